use crate::types::report::{Improvement, SimulationResult};
use crate::types::scoring::{Score, Weakness, Weaknesses};
use std::cmp::Reverse;

const MAX_SCORE: Score = 100;
const TOP_IMPROVEMENTS: usize = 3;

/// Projected gain from fixing a weakness. `None` means fixing it is not
/// credited by the simulation.
pub fn improvement_for(weakness: Weakness) -> Option<Improvement> {
    let (points_gain, action) = match weakness {
        Weakness::MissingReadme => (20, "Create comprehensive README documentation"),
        Weakness::ReadmeMissingUsage => (10, "Document installation and usage steps"),
        Weakness::MissingTests => (15, "Implement automated test suite"),
        Weakness::MissingStandardFolders => {
            (10, "Structure code into modular directories (src/)")
        }
        Weakness::NonSemanticCommits => (10, "Adopt semantic commit message convention"),
        Weakness::MissingGitignore => (5, "Add .gitignore to exclude build artifacts"),
        Weakness::RootFileConcentration
        | Weakness::ActivityConcentrated
        | Weakness::GenericCommitMessages => return None,
    };
    Some(Improvement {
        action,
        points_gain,
    })
}

pub fn simulate(current_score: Score, weaknesses: &Weaknesses) -> SimulationResult {
    let mut impacts: Vec<Improvement> = weaknesses
        .iter()
        .filter_map(|weakness| improvement_for(*weakness))
        .collect();
    let total_gain: Score = impacts.iter().map(|impact| impact.points_gain).sum();

    let potential_score = (current_score + total_gain).min(MAX_SCORE);

    // Stable sort keeps emission order among equal gains.
    impacts.sort_by_key(|impact| Reverse(impact.points_gain));
    impacts.truncate(TOP_IMPROVEMENTS);

    SimulationResult {
        current_score,
        potential_score,
        points_gap: potential_score.saturating_sub(current_score),
        top_improvements: impacts,
    }
}
