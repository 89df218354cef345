mod advice;
mod analyze;
mod cli;
mod config;
mod error;
mod metrics;
mod report;
mod source;
mod types;

use crate::error::MirrorError;
use crate::types::config::{MirrorConfig, ReportFormatSetting};
use crate::types::report::{Analysis, ComparedRepository};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Directory whose config layers apply to `target`.
fn config_root(target: &Path) -> &Path {
    if target.is_file() {
        target.parent().unwrap_or(Path::new("."))
    } else {
        target
    }
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: &MirrorConfig,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.report_format() {
            Some(ReportFormatSetting::Json) => report::OutputFormat::Json,
            Some(ReportFormatSetting::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn analyze_target(
    target: &Path,
    repo_override: Option<&str>,
    config: &MirrorConfig,
) -> Result<Analysis, MirrorError> {
    let settings = config.source_settings();
    let mut opened = source::open(target, &settings)?;
    if let Some(reference) = repo_override {
        opened.repo = source::RepoRef::parse(reference, &settings.branch)?;
    }
    debug!(repo = %opened.repo, "analyzing repository");

    let profile = metrics::extract(opened.source.as_ref(), &opened.repo, &settings)?;
    let score_report = analyze::analyze(&profile, config);
    info!(
        repo = %opened.repo,
        total = score_report.total_score,
        level = %score_report.level,
        "repository scored"
    );

    Ok(Analysis {
        target: opened.repo.to_string(),
        summary: advice::generate_narrative(
            score_report.total_score,
            score_report.level,
            &score_report.weaknesses,
        ),
        roadmap: advice::generate_roadmap(&score_report.weaknesses, config.roadmap_limit()),
        report: score_report,
        repo_stats: profile,
    })
}

fn compared(target: &Path) -> Result<ComparedRepository, MirrorError> {
    let config = config::load_config(config_root(target))?;
    let analysis = analyze_target(target, None, &config)?;
    Ok(analyze::compare::summarize(&analysis.target, &analysis.report))
}

fn run(cli: cli::Cli) -> Result<i32, MirrorError> {
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let config = config::load_config(config_root(&cmd.target))?;
            let analysis = analyze_target(&cmd.target, cmd.repo.as_deref(), &config)?;
            let rendered = report::render(&analysis, output_format(cmd.format, &config))?;
            println!("{rendered}");

            match cmd.fail_under {
                Some(threshold) if analysis.report.total_score < threshold => {
                    eprintln!(
                        "score {} is below the required {threshold}",
                        analysis.report.total_score
                    );
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Compare(cmd) => {
            let config = config::load_config(config_root(&cmd.first))?;
            let comparison =
                analyze::compare::compare(compared(&cmd.first)?, compared(&cmd.second)?);
            let rendered =
                report::render_comparison(&comparison, output_format(cmd.format, &config))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                MirrorError::NotFound(_) => exit_code::NOT_FOUND,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
