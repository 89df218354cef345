pub mod json;
pub mod md;

use crate::error::MirrorError;
use crate::types::report::{Analysis, Comparison};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String, MirrorError> {
    match format {
        OutputFormat::Json => json::to_json(analysis).map_err(MirrorError::Json),
        OutputFormat::Md => Ok(md::to_markdown(analysis)),
    }
}

pub fn render_comparison(
    comparison: &Comparison,
    format: OutputFormat,
) -> Result<String, MirrorError> {
    match format {
        OutputFormat::Json => json::to_json(comparison).map_err(MirrorError::Json),
        OutputFormat::Md => Ok(md::comparison_to_markdown(comparison)),
    }
}
