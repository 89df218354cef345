use crate::types::profile::RepositoryProfile;
use crate::types::scoring::{Category, CategoryResult, Score, Weakness, Weaknesses};

/// Result of evaluating one rule against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub points: Score,
    pub reason: Option<String>,
    pub weakness: Option<Weakness>,
}

impl RuleOutcome {
    pub fn pass(points: Score, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
            weakness: None,
        }
    }

    /// Points without a reason line.
    pub fn award(points: Score) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Zero points with an informational reason.
    pub fn note(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn fail(reason: impl Into<String>, weakness: Weakness) -> Self {
        Self {
            points: 0,
            reason: Some(reason.into()),
            weakness: Some(weakness),
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }
}

pub type RuleFn = fn(&RepositoryProfile) -> RuleOutcome;

#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub max_points: Score,
    pub evaluate: RuleFn,
}

pub struct CategoryRules {
    pub category: Category,
    pub hint: &'static str,
    pub rules: &'static [Rule],
}

impl CategoryRules {
    pub fn max_score(&self) -> Score {
        self.rules.iter().map(|rule| rule.max_points).sum()
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Runs every rule in order, collecting reasons and adding any weakness
    /// to the shared set. Points are capped per rule.
    pub fn score(
        &self,
        profile: &RepositoryProfile,
        weaknesses: &mut Weaknesses,
    ) -> CategoryResult {
        let mut score = 0;
        let mut reasons = Vec::new();
        for rule in self.rules {
            let outcome = (rule.evaluate)(profile);
            score += outcome.points.min(rule.max_points);
            reasons.extend(outcome.reason);
            weaknesses.extend(outcome.weakness);
        }

        CategoryResult {
            score,
            max_score: self.max_score(),
            reasons,
            hint: self.hint.to_string(),
        }
    }
}
