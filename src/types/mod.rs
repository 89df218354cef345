pub mod config;
pub mod profile;
pub mod report;
pub mod scoring;
pub mod snapshot;
