use crate::types::report::{Analysis, ComparedRepository, Comparison};

pub fn to_markdown(analysis: &Analysis) -> String {
    let report = &analysis.report;
    let mut output = String::new();
    output.push_str(&format!("# Repository Audit: {}\n\n", analysis.target));
    output.push_str(&format!(
        "Score: {}/100 ({})\n\nConfidence: {} ({})\n\n",
        report.total_score, report.level, report.confidence.level, report.confidence.description
    ));

    output.push_str("## Breakdown\n\n");
    for (category, result) in &report.breakdown {
        output.push_str(&format!(
            "### {}: {}/{}\n\n",
            category, result.score, result.max_score
        ));
        for reason in &result.reasons {
            output.push_str(&format!("- {reason}\n"));
        }
        output.push_str(&format!("\n> {}\n\n", result.hint));
    }

    output.push_str("## Weaknesses\n\n");
    if report.weaknesses.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for weakness in &report.weaknesses {
            output.push_str(&format!("- {weakness}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Health Flags\n\n");
    let raised: Vec<_> = report
        .flags
        .named()
        .into_iter()
        .filter(|(_, flag)| flag.value)
        .collect();
    if raised.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (name, flag) in raised {
            output.push_str(&format!("- {name}: {}\n", flag.description));
        }
        output.push('\n');
    }

    let simulation = &report.simulation;
    output.push_str("## Simulation\n\n");
    output.push_str(&format!(
        "Potential score: {}/100 (+{})\n\n",
        simulation.potential_score, simulation.points_gap
    ));
    for improvement in &simulation.top_improvements {
        output.push_str(&format!(
            "- {} (+{})\n",
            improvement.action, improvement.points_gain
        ));
    }
    if !simulation.top_improvements.is_empty() {
        output.push('\n');
    }

    output.push_str("## Roadmap\n\n");
    for (index, step) in analysis.roadmap.iter().enumerate() {
        output.push_str(&format!("{}. {step}\n", index + 1));
    }
    output.push('\n');

    output.push_str("## Summary\n\n");
    output.push_str(&format!("Recruiter: {}\n\n", analysis.summary.recruiter));
    output.push_str(&format!("Student: {}\n", analysis.summary.student));

    output
}

pub fn comparison_to_markdown(comparison: &Comparison) -> String {
    let mut output = String::new();
    output.push_str("# Repository Comparison\n\n");
    output.push_str(&format!("Winner: {}\n\n", comparison.winner));
    output.push_str(&format!("{}\n\n", comparison.summary));
    output.push_str("| Repository | Score | Level | Weaknesses |\n");
    output.push_str("|---|---|---|---|\n");
    for repo in [&comparison.repo_1, &comparison.repo_2] {
        output.push_str(&table_row(repo));
    }
    output
}

fn table_row(repo: &ComparedRepository) -> String {
    format!(
        "| {} | {} | {} | {} |\n",
        repo.name,
        repo.score,
        repo.level,
        repo.weaknesses.len()
    )
}
