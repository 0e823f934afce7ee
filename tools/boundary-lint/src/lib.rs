pub mod checks;
pub mod config;
pub mod error;
pub mod feature;
pub mod instructions;
pub mod loader;
pub mod reporter;
pub mod tags;

pub use error::{Error, Result};

use std::path::Path;

use checks::CheckResult;
use config::CheckConfig;

/// Load features from `features_path` and run the configured boundary check.
pub fn run_boundary_check(config: &CheckConfig, features_path: &Path) -> Result<CheckResult> {
    let features = loader::read_features(features_path)?;
    let check = config.build_check();
    Ok(checks::run_check(&check, &features))
}
