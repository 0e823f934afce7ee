use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::feature::Feature;

/// Parse a JSON array of features.
pub fn parse_features(text: &str, origin: &Path) -> Result<Vec<Feature>> {
    serde_json::from_str(text).map_err(|source| Error::Json {
        path: origin.to_path_buf(),
        source,
    })
}

pub fn read_features(path: &Path) -> Result<Vec<Feature>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let features = parse_features(&text, path)?;
    debug!(path = %path.display(), count = features.len(), "loaded features");
    Ok(features)
}
