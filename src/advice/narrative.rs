use crate::types::report::Narrative;
use crate::types::scoring::{Level, Score, Weaknesses};

const FALLBACK_FOCUS: &str = "minor details";

/// Two readings of the same score: a hiring signal and feedback for the author.
pub fn generate_narrative(score: Score, level: Level, weaknesses: &Weaknesses) -> Narrative {
    let focus = weaknesses
        .iter()
        .next()
        .map(|weakness| weakness.description().to_lowercase())
        .unwrap_or_else(|| FALLBACK_FOCUS.to_string());

    Narrative {
        recruiter: recruiter_view(score, level, &focus),
        student: student_view(score, level, &focus),
    }
}

fn recruiter_view(score: Score, level: Level, focus: &str) -> String {
    match level {
        Level::Pro => format!(
            "✅ **Signal: Strong Hire.** This candidate demonstrates production-ready capability ({score}/100). \
             The repository adheres to rigorous industry standards. \
             The work suggests a developer who can integrate into a team with minimal onboarding."
        ),
        Level::Advanced => format!(
            "⚠️ **Signal: Potential Hire.** The submission is solid ({score}/100) but lacks final production polish. \
             Issues with {focus} prevent top-tier classification. \
             Suitable for mid-level roles, but probe on architectural decisions during interview."
        ),
        Level::Intermediate => format!(
            "🛑 **Signal: High Risk.** Foundational knowledge is present ({score}/100), but professional standards are missing. \
             Gaps in {focus} suggest habit-forming is still in progress. \
             Likely requires significant mentorship to reach production velocity."
        ),
        Level::Beginner => format!(
            "⛔ **Signal: Do Not Progress.** The submission ({score}/100) fails to meet baseline engineering expectations. \
             Deficiencies in {focus} indicate a lack of familiarity with professional workflows. \
             Not recommended for technical review."
        ),
    }
}

fn student_view(score: Score, level: Level, focus: &str) -> String {
    match level {
        Level::Pro => format!(
            "🚀 **Outstanding work!** You are coding at a professional level ({score}/100). \
             Your structure and habits are excellent. \
             To push for perfection, double-check your {focus} and consider adding CI/CD pipelines if missing."
        ),
        Level::Advanced => format!(
            "💪 **Great job.** You are well above average ({score}/100), but there is a clear path to the next level. \
             Your logic is good, but your {focus} is holding you back from a perfect score. \
             Polish these edges to turn this project into a star portfolio piece."
        ),
        Level::Intermediate => format!(
            "🔧 **Good start, but needs structure.** You have written working code ({score}/100), but it's hard for others to read or maintain. \
             Your biggest opportunity for growth is fixing {focus}. \
             Focus on 'Clean Code' principles and file organization next."
        ),
        Level::Beginner => format!(
            "🎓 **Learning Opportunity.** Right now, this project looks more like a scratchpad than a product ({score}/100). \
             Don't worry about complex algorithms yet. Focus on the basics: {focus}. \
             Structure and documentation are just as important as the code itself."
        ),
    }
}
