use crate::error::MirrorError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MirrorConfig {
    pub source: Option<SourceConfig>,
    pub flags: Option<FlagsConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub commit_limit: Option<u32>,
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_branch() -> String {
    "HEAD".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlagsConfig {
    pub inactive_after_days: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    pub roadmap_limit: Option<usize>,
}

/// Values the source needs, resolved against defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub commit_limit: u32,
    pub branch: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            commit_limit: MirrorConfig::DEFAULT_COMMIT_LIMIT,
            branch: default_branch(),
        }
    }
}

impl MirrorConfig {
    pub const DEFAULT_COMMIT_LIMIT: u32 = 100;
    pub const DEFAULT_INACTIVE_AFTER_DAYS: i64 = 180;
    pub const DEFAULT_ROADMAP_LIMIT: usize = 7;

    pub fn source_settings(&self) -> SourceSettings {
        match &self.source {
            Some(source) => SourceSettings {
                commit_limit: source
                    .commit_limit
                    .unwrap_or(Self::DEFAULT_COMMIT_LIMIT),
                branch: source.branch.clone(),
            },
            None => SourceSettings::default(),
        }
    }

    pub fn inactive_after_days(&self) -> i64 {
        self.flags
            .as_ref()
            .and_then(|flags| flags.inactive_after_days)
            .unwrap_or(Self::DEFAULT_INACTIVE_AFTER_DAYS)
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn roadmap_limit(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.roadmap_limit)
            .unwrap_or(Self::DEFAULT_ROADMAP_LIMIT)
    }

    pub fn validate(&self) -> Result<(), MirrorError> {
        if let Some(source) = &self.source {
            if source.commit_limit == Some(0) {
                return Err(MirrorError::ConfigParse(
                    "source.commit_limit must be greater than 0".to_string(),
                ));
            }
            if source.branch.trim().is_empty() {
                return Err(MirrorError::ConfigParse(
                    "source.branch cannot be empty".to_string(),
                ));
            }
        }

        if let Some(days) = self.flags.as_ref().and_then(|flags| flags.inactive_after_days) {
            if days < 0 {
                return Err(MirrorError::ConfigParse(
                    "flags.inactive_after_days cannot be negative".to_string(),
                ));
            }
        }

        if self.report.as_ref().and_then(|report| report.roadmap_limit) == Some(0) {
            return Err(MirrorError::ConfigParse(
                "report.roadmap_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_are_missing() {
        let cfg = MirrorConfig::default();
        assert_eq!(cfg.source_settings(), SourceSettings::default());
        assert_eq!(cfg.source_settings().commit_limit, 100);
        assert_eq!(cfg.inactive_after_days(), 180);
        assert_eq!(cfg.roadmap_limit(), 7);
        assert!(cfg.report_format().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg: MirrorConfig = toml::from_str(
            r#"
[source]
commit_limit = 30
branch = "develop"

[flags]
inactive_after_days = 90

[report]
format = "json"
roadmap_limit = 5
"#,
        )
        .expect("config should parse");

        assert_eq!(cfg.source_settings().commit_limit, 30);
        assert_eq!(cfg.source_settings().branch, "develop");
        assert_eq!(cfg.inactive_after_days(), 90);
        assert_eq!(cfg.report_format(), Some(ReportFormatSetting::Json));
        assert_eq!(cfg.roadmap_limit(), 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_commit_limit() {
        let cfg: MirrorConfig = toml::from_str(
            r#"
[source]
commit_limit = 0
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(MirrorError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_zero_roadmap_limit() {
        let cfg: MirrorConfig = toml::from_str(
            r#"
[report]
roadmap_limit = 0
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(MirrorError::ConfigParse(_))));
    }
}
