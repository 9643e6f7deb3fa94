//! Configuration system for Sift.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod analysis_config;
pub mod profile;
pub mod scan_config;
pub mod sift_config;

pub use analysis_config::AnalysisConfig;
pub use profile::ProfileConfig;
pub use scan_config::ScanConfig;
pub use sift_config::{CliOverrides, SiftConfig};
