//! Optional YAML file with fallback answers for the entry flow

use crate::error::{Result, ScaffoldError};
use crate::project::{Archetype, Language};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a defaults file
pub const DEFAULTS_ENV: &str = "JSGEN_CONFIG";

/// Values used when the command line leaves something unset
///
/// ```yaml
/// archetype: express
/// language: ts
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldDefaults {
    pub archetype: Option<Archetype>,
    pub language: Option<Language>,
}

impl ScaffoldDefaults {
    /// Load from `explicit`, falling back to `$JSGEN_CONFIG`, then to empty defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var_os(DEFAULTS_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScaffoldError::fs("read config file", path, e))?;
        let defaults = Self::from_yaml_str(&content).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), ?defaults, "loaded defaults");
        Ok(defaults)
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "no defaults", not a parse error
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_defaults() {
        let defaults = ScaffoldDefaults::from_yaml_str("archetype: express\nlanguage: ts\n").unwrap();
        assert_eq!(defaults.archetype, Some(Archetype::Express));
        assert_eq!(defaults.language, Some(Language::TypeScript));
    }

    #[test]
    fn test_parse_accepts_aliases() {
        let defaults = ScaffoldDefaults::from_yaml_str("archetype: desktop-shell").unwrap();
        assert_eq!(defaults.archetype, Some(Archetype::Electron));
        assert_eq!(defaults.language, None);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ScaffoldDefaults::from_yaml_str("  \n").unwrap(), ScaffoldDefaults::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(ScaffoldDefaults::from_yaml_str("archetyp: express").is_err());
    }

    #[test]
    fn test_unknown_archetype_is_rejected() {
        let err = ScaffoldDefaults::from_yaml_str("archetype: cobol").unwrap_err();
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("defaults.yaml");
        std::fs::write(&path, "language: js\n").unwrap();

        let defaults = ScaffoldDefaults::load(Some(&path)).unwrap();
        assert_eq!(defaults.language, Some(Language::JavaScript));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = ScaffoldDefaults::load(Some(&tmp.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "language: [ts").unwrap();

        let err = ScaffoldDefaults::from_file(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
