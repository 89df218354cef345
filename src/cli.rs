use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repomirror",
    version,
    about = "Repository quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single repository
    Analyze(AnalyzeCommand),
    /// Score two repositories and pick the stronger one
    Compare(CompareCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Working copy directory or snapshot JSON file
    pub target: PathBuf,
    /// Report the repository under this `owner/name` (or URL)
    #[arg(long)]
    pub repo: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with status 2 when the total score is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,
}

#[derive(Args)]
pub struct CompareCommand {
    pub first: PathBuf,
    pub second: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_accepts_repo_override_and_threshold() {
        let cli = Cli::try_parse_from([
            "repomirror",
            "analyze",
            "snapshot.json",
            "--repo",
            "octo/demo",
            "--format",
            "json",
            "--fail-under",
            "60",
        ])
        .expect("arguments should parse");
        match cli.command {
            Commands::Analyze(cmd) => {
                assert_eq!(cmd.repo.as_deref(), Some("octo/demo"));
                assert!(matches!(cmd.format, Some(ReportFormat::Json)));
                assert_eq!(cmd.fail_under, Some(60));
            }
            Commands::Compare(_) => panic!("expected analyze"),
        }
    }

    #[test]
    fn threshold_above_one_hundred_is_rejected() {
        assert!(Cli::try_parse_from(["repomirror", "analyze", ".", "--fail-under", "101"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["repomirror", "-q", "-v", "analyze", "."]).is_err());
    }
}
