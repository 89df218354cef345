use crate::types::scoring::Weaknesses;

const MIN_STEPS: usize = 5;

const MAINTENANCE_STEPS: [&str; 5] = [
    "Maintain this standard by automating your CI/CD pipeline.",
    "Start contributing to larger open-source projects to test your skills at scale.",
    "Implement strict linting rules (e.g., flake8, ruff) to enforce style consistency.",
    "Add comprehensive API documentation using tools like Swagger/OpenAPI.",
    "Explore containerization (Docker) to ensure environment reproducibility.",
];

/// Keywords matched against the lower-cased weakness text, with the step
/// each one unlocks.
const TARGETED_STEPS: [(&[&str], &str); 4] = [
    (
        &["readme"],
        "Documentation First: Create a README.md immediately. Include installation steps, \
         usage examples, and a clear project description. No code exists if it's not documented.",
    ),
    (
        &["test"],
        "Zero Tolerance for Untested Code: Set up pytest (or equivalent). Write unit tests for \
         your core logic. Aim for at least 60% coverage before adding new features.",
    ),
    (
        &["folder", "structure"],
        "Refactor Architecture: Move your source code into a `src` or `app` directory. Separate \
         implementation from configuration. Don't dump files in the root.",
    ),
    (
        &["concentrated", "days"],
        "Show Consistency: Coding is a habit, not a sprint. Commit code on at least 3 separate \
         days this week. Prove you can maintain a project over time.",
    ),
];

const GENERIC_STEPS: [&str; 4] = [
    "Clean Code Audit: Remove all commented-out code and unused imports. If you don't need it, \
     delete it. That's what version control is for.",
    "Git Hygiene: Use a `.gitignore` file. Never commit virtual environments, system files, or \
     secrets (API keys).",
    "Environment Management: Freeze your dependencies into a `requirements.txt` or \
     `pyproject.toml`. Your project must run on another machine with one command.",
    "Linter Enforcement: format your code. Use `black` or `prettier` to automate formatting. \
     Inconsistent style screams 'amateur'.",
];

/// Ordered remediation steps for the detected weaknesses, padded with general
/// advice up to five entries and capped at `limit`.
pub fn generate_roadmap(weaknesses: &Weaknesses, limit: usize) -> Vec<String> {
    if weaknesses.is_empty() {
        return MAINTENANCE_STEPS
            .iter()
            .take(limit)
            .map(|step| step.to_string())
            .collect();
    }

    let mut roadmap: Vec<String> = Vec::new();
    for weakness in weaknesses {
        let text = weakness.description().to_lowercase();
        for (keywords, step) in TARGETED_STEPS {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                roadmap.push(step.to_string());
            }
        }
    }

    let needed = MIN_STEPS.saturating_sub(roadmap.len());
    roadmap.extend(GENERIC_STEPS.iter().take(needed).map(|step| step.to_string()));
    roadmap.truncate(limit);
    roadmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::Weakness;

    fn set(weaknesses: &[Weakness]) -> Weaknesses {
        weaknesses.iter().copied().collect()
    }

    #[test]
    fn clean_repository_gets_maintenance_steps() {
        let roadmap = generate_roadmap(&Weaknesses::new(), 7);
        assert_eq!(roadmap.len(), 5);
        assert!(roadmap[0].starts_with("Maintain this standard"));
    }

    #[test]
    fn matched_steps_come_first_then_generic_padding() {
        let roadmap = generate_roadmap(&set(&[Weakness::MissingReadme, Weakness::MissingTests]), 7);
        assert_eq!(roadmap.len(), 5);
        assert!(roadmap[0].starts_with("Documentation First"));
        assert!(roadmap[1].starts_with("Zero Tolerance"));
        assert!(roadmap[2].starts_with("Clean Code Audit"));
        assert!(roadmap[4].starts_with("Environment Management"));
    }

    #[test]
    fn folder_and_activity_weaknesses_map_to_targeted_steps() {
        let roadmap = generate_roadmap(
            &set(&[
                Weakness::MissingStandardFolders,
                Weakness::ActivityConcentrated,
            ]),
            7,
        );
        assert!(roadmap[0].starts_with("Refactor Architecture"));
        assert!(roadmap[1].starts_with("Show Consistency"));
    }

    #[test]
    fn unmatched_weaknesses_fall_back_to_generic_steps() {
        let roadmap = generate_roadmap(&set(&[Weakness::MissingGitignore]), 7);
        assert_eq!(roadmap.len(), 4);
        assert!(roadmap.iter().all(|step| GENERIC_STEPS.contains(&step.as_str())));
    }

    #[test]
    fn roadmap_respects_limit() {
        let roadmap = generate_roadmap(
            &set(&[
                Weakness::MissingReadme,
                Weakness::MissingTests,
                Weakness::MissingStandardFolders,
                Weakness::ActivityConcentrated,
            ]),
            3,
        );
        assert_eq!(roadmap.len(), 3);
        assert_eq!(generate_roadmap(&Weaknesses::new(), 2).len(), 2);
    }
}
