use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::checks::boundary_tags::BoundaryTagCheck;
use crate::error::{Error, Result};
use crate::instructions::{DefectKind, Instructions};
use crate::tags::{BoundaryValues, DEFAULT_MAXIMUM_ADMIN_LEVEL, DEFAULT_MINIMUM_ADMIN_LEVEL};

/// File looked up by `CheckConfig::discover`.
pub const CONFIG_FILE_NAME: &str = "boundary-lint.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminLevelBounds {
    pub minimum: i64,
    pub maximum: i64,
}

impl Default for AdminLevelBounds {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_ADMIN_LEVEL,
            maximum: DEFAULT_MAXIMUM_ADMIN_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    pub admin_level: AdminLevelBounds,
    pub administrative_values: Vec<String>,
    /// Localized instruction templates keyed by defect kind.
    pub instructions: BTreeMap<DefectKind, String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            admin_level: AdminLevelBounds::default(),
            administrative_values: vec!["administrative".to_string()],
            instructions: BTreeMap::new(),
        }
    }
}

impl CheckConfig {
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        let config: CheckConfig = serde_json::from_str(text).map_err(|source| Error::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Self::from_json(&text, path)
    }

    /// Find `boundary-lint.json` by walking up from `start`.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Explicit path if given, otherwise a discovered file, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let cwd = std::env::current_dir().map_err(|source| Error::Io {
            path: PathBuf::from("."),
            source,
        })?;
        match Self::discover(&cwd) {
            Some(found) => Self::from_path(&found),
            None => {
                debug!("no {CONFIG_FILE_NAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let bounds = &self.admin_level;
        if bounds.minimum > bounds.maximum {
            return Err(Error::Config(format!(
                "admin_level.minimum ({}) is greater than admin_level.maximum ({})",
                bounds.minimum, bounds.maximum
            )));
        }

        if self.administrative_values.is_empty() {
            return Err(Error::Config(
                "administrative_values must list at least one boundary value".to_string(),
            ));
        }

        if let Some(kind) = DefectKind::ALL.into_iter().find(|kind| {
            self.instructions
                .get(kind)
                .is_some_and(|template| template.trim().is_empty())
        }) {
            return Err(Error::Config(format!(
                "instruction template for {kind:?} is empty"
            )));
        }

        Ok(())
    }

    pub fn boundary_values(&self) -> BoundaryValues {
        BoundaryValues::new(self.administrative_values.iter().cloned())
    }

    pub fn build_check(&self) -> BoundaryTagCheck {
        BoundaryTagCheck::new(self.boundary_values())
            .with_admin_levels(self.admin_level.minimum, self.admin_level.maximum)
            .with_instructions(Instructions::new(self.instructions.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<CheckConfig> {
        CheckConfig::from_json(text, Path::new("inline.json"))
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = parse("{}").unwrap();
        assert_eq!(config, CheckConfig::default());
        assert_eq!(config.admin_level.minimum, 1);
        assert_eq!(config.admin_level.maximum, 11);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse(r#"{"admin_level": {"minimum": 2, "maximum": 10}}"#).unwrap();
        assert_eq!(config.admin_level, AdminLevelBounds { minimum: 2, maximum: 10 });
        assert_eq!(config.administrative_values, vec!["administrative".to_string()]);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = parse(r#"{"admin_level": {"minimum": 9, "maximum": 3}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("greater than"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse(r#"{"admin_levels": {"minimum": 1, "maximum": 3}}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn rejects_unknown_instruction_kind() {
        let err = parse(r#"{"instructions": {"missing_ref": "x"}}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn rejects_blank_instruction_template() {
        let err = parse(r#"{"instructions": {"empty_name": "  "}}"#).unwrap_err();
        assert!(err.to_string().contains("EmptyName"));
    }

    #[test]
    fn rejects_empty_administrative_values() {
        let err = parse(r#"{"administrative_values": []}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn build_check_applies_configuration() {
        let config = parse(
            r#"{
                "admin_level": {"minimum": 3, "maximum": 7},
                "administrative_values": ["administrative", "political"]
            }"#,
        )
        .unwrap();
        let check = config.build_check();
        assert_eq!(check.minimum_admin_level(), 3);
        assert_eq!(check.maximum_admin_level(), 7);
    }
}
