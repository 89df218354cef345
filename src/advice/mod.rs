//! Human-facing guidance derived from a score report.

pub mod narrative;
pub mod roadmap;

pub use narrative::generate_narrative;
pub use roadmap::generate_roadmap;
