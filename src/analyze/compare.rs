use crate::types::report::{ComparedRepository, Comparison, ScoreReport};
use std::cmp::Ordering;

pub const DRAW: &str = "Draw";

pub fn summarize(name: &str, report: &ScoreReport) -> ComparedRepository {
    ComparedRepository {
        name: name.to_string(),
        score: report.total_score,
        level: report.level,
        weaknesses: report.weaknesses.clone(),
        flags: report.flags.clone(),
    }
}

/// Picks the stronger of two analysed repositories. Equal scores are a draw.
pub fn compare(first: ComparedRepository, second: ComparedRepository) -> Comparison {
    let (winner, summary) = match first.score.cmp(&second.score) {
        Ordering::Equal => (
            DRAW.to_string(),
            format!(
                "Both repositories are evenly matched with a score of {}. \
                 They exhibit similar engineering maturity levels.",
                first.score
            ),
        ),
        Ordering::Greater => (first.name.clone(), victory_summary(&first, &second)),
        Ordering::Less => (second.name.clone(), victory_summary(&second, &first)),
    };

    Comparison {
        winner,
        summary,
        repo_1: first,
        repo_2: second,
    }
}

fn victory_summary(better: &ComparedRepository, worse: &ComparedRepository) -> String {
    let mut reasons = Vec::new();
    if !better.flags.no_tests.value && worse.flags.no_tests.value {
        reasons.push("includes automated tests");
    }
    if !better.flags.missing_readme.value && worse.flags.missing_readme.value {
        reasons.push("has better documentation");
    }

    let reason_text = if reasons.is_empty() {
        "overall better structural hygiene".to_string()
    } else {
        format!("superior engineering standards ({})", reasons.join(", "))
    };

    format!(
        "**{}** is the stronger repository (Score: {} vs {}). It outperforms **{}** due to {}.",
        better.name, better.score, worse.score, worse.name, reason_text
    )
}
