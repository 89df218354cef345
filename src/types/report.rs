use crate::types::profile::RepositoryProfile;
use crate::types::scoring::{Breakdown, Level, Score, Weaknesses};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthFlag {
    pub value: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceResult {
    pub level: ConfidenceLevel,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthFlags {
    pub missing_readme: HealthFlag,
    pub no_tests: HealthFlag,
    pub is_inactive: HealthFlag,
    pub is_dump: HealthFlag,
    pub is_overengineered: HealthFlag,
    pub is_empty: HealthFlag,
    pub confidence_score: ConfidenceResult,
}

impl HealthFlags {
    /// Flags paired with their serialized names, in declaration order.
    pub fn named(&self) -> [(&'static str, &HealthFlag); 6] {
        [
            ("missing_readme", &self.missing_readme),
            ("no_tests", &self.no_tests),
            ("is_inactive", &self.is_inactive),
            ("is_dump", &self.is_dump),
            ("is_overengineered", &self.is_overengineered),
            ("is_empty", &self.is_empty),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub action: &'static str,
    pub points_gain: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub current_score: Score,
    pub potential_score: Score,
    pub points_gap: Score,
    pub top_improvements: Vec<Improvement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub total_score: Score,
    pub level: Level,
    pub breakdown: Breakdown,
    pub weaknesses: Weaknesses,
    pub flags: HealthFlags,
    pub confidence: ConfidenceResult,
    pub simulation: SimulationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub recruiter: String,
    pub student: String,
}

/// Everything handed to a renderer for a single repository.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub target: String,
    pub report: ScoreReport,
    pub summary: Narrative,
    pub roadmap: Vec<String>,
    pub repo_stats: RepositoryProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedRepository {
    pub name: String,
    pub score: Score,
    pub level: Level,
    pub weaknesses: Weaknesses,
    pub flags: HealthFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub winner: String,
    pub summary: String,
    pub repo_1: ComparedRepository,
    pub repo_2: ComparedRepository,
}
