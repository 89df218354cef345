use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub type Score = u32;

/// Upper bound for every category; five categories sum to 100.
pub const CATEGORY_MAX_SCORE: Score = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Code Organization")]
    CodeOrganization,
    #[serde(rename = "Documentation")]
    Documentation,
    #[serde(rename = "Commit Hygiene")]
    CommitHygiene,
    #[serde(rename = "Engineering Standards")]
    EngineeringStandards,
    #[serde(rename = "Tech Stack")]
    TechStack,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CodeOrganization,
        Category::Documentation,
        Category::CommitHygiene,
        Category::EngineeringStandards,
        Category::TechStack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CodeOrganization => "Code Organization",
            Self::Documentation => "Documentation",
            Self::CommitHygiene => "Commit Hygiene",
            Self::EngineeringStandards => "Engineering Standards",
            Self::TechStack => "Tech Stack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    pub score: Score,
    pub max_score: Score,
    pub reasons: Vec<String>,
    pub hint: String,
}

pub type Breakdown = BTreeMap<Category, CategoryResult>;

/// Closed vocabulary of deficiencies the scorer can report.
///
/// Variants are declared in the order the category scorers emit them, so a
/// `BTreeSet<Weakness>` iterates in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weakness {
    MissingStandardFolders,
    RootFileConcentration,
    MissingReadme,
    ReadmeMissingUsage,
    NonSemanticCommits,
    ActivityConcentrated,
    GenericCommitMessages,
    MissingTests,
    MissingGitignore,
}

impl Weakness {
    pub fn description(self) -> &'static str {
        match self {
            Self::MissingStandardFolders => {
                "Standard architecture folders (src, app, utils) not detected"
            }
            Self::RootFileConcentration => "High file concentration in root directory",
            Self::MissingReadme => "README.md file is absent",
            Self::ReadmeMissingUsage => "Documentation omits 'Usage' or 'Installation' steps",
            Self::NonSemanticCommits => {
                "Commit messages do not follow semantic conventions (e.g., feat:, fix:)"
            }
            Self::ActivityConcentrated => "Activity concentrated in single day",
            Self::GenericCommitMessages => "Generic commit messages detected (e.g., 'Update file')",
            Self::MissingTests => "Testing framework not detected",
            Self::MissingGitignore => ".gitignore file is missing",
        }
    }
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for Weakness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.description())
    }
}

pub type Weaknesses = BTreeSet<Weakness>;

/// Output of the category scorers, before flags and simulation are derived.
#[derive(Debug, Clone)]
pub struct ScoreCard {
    pub total_score: Score,
    pub level: Level,
    pub breakdown: Breakdown,
    pub weaknesses: Weaknesses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl Level {
    pub fn from_score(score: Score) -> Self {
        match score {
            85.. => Self::Pro,
            65..=84 => Self::Advanced,
            40..=64 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Pro => "Pro",
        };
        f.write_str(label)
    }
}
