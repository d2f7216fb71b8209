//! Configuration for the template expander
//!
//! Every setting has a default, so a config file only needs the keys it
//! overrides. Parsed from TOML using serde.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from a file
pub fn load(path: &Path) -> Result<ExpanderConfig> {
    let content = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: ExpanderConfig = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Settings shared by the expander and the resolver
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpanderConfig {
    /// First token that turns a template line into a directive
    pub marker: String,

    /// Folder directive names are resolved against when none is given
    pub source_folder: PathBuf,

    /// Extension of both the template and the generated file
    pub extension: String,

    /// Appended to the base name to form the template file name
    pub template_suffix: String,

    /// Appended to the base name to form the generated file name
    pub generated_suffix: String,

    /// Extension of the source files pulled in by directives
    pub source_extension: String,
}

fn default_marker() -> String {
    "LITTLE_TO_ELM".to_string()
}

fn default_source_folder() -> PathBuf {
    PathBuf::from("../examples/")
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            source_folder: default_source_folder(),
            extension: "elm".to_string(),
            template_suffix: "Template".to_string(),
            generated_suffix: "Generated".to_string(),
            source_extension: "little".to_string(),
        }
    }
}

impl ExpanderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            return Err(Error::ConfigValidation("marker must not be empty".into()));
        }
        if self.marker.contains(' ') {
            return Err(Error::ConfigValidation(format!(
                "marker '{}' must be a single token",
                self.marker
            )));
        }

        for (key, value) in [
            ("extension", &self.extension),
            ("source_extension", &self.source_extension),
        ] {
            if value.is_empty() {
                return Err(Error::ConfigValidation(format!("{} must not be empty", key)));
            }
        }

        if self.template_suffix == self.generated_suffix {
            return Err(Error::ConfigValidation(format!(
                "template_suffix and generated_suffix are both '{}'",
                self.template_suffix
            )));
        }

        Ok(())
    }

    /// Path of the template for a base name
    pub fn template_path(&self, base: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.{}", base, self.template_suffix, self.extension))
    }

    /// Path of the generated file for a base name
    pub fn generated_path(&self, base: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.{}", base, self.generated_suffix, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExpanderConfig::default();
        assert_eq!(config.marker, "LITTLE_TO_ELM");
        assert_eq!(config.source_folder, PathBuf::from("../examples/"));
        assert_eq!(config.template_path("Prelude"), PathBuf::from("PreludeTemplate.elm"));
        assert_eq!(config.generated_path("Prelude"), PathBuf::from("PreludeGenerated.elm"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
marker = "INCLUDE"
extension = "rs"
"#;

        let config: ExpanderConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.marker, "INCLUDE");
        assert_eq!(config.extension, "rs");
        assert_eq!(config.source_extension, "little");
        assert_eq!(config.template_path("lib"), PathBuf::from("libTemplate.rs"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<ExpanderConfig, _> = toml::from_str("markr = \"X\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_marker() {
        let config = ExpanderConfig {
            marker: "TWO WORDS".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));

        let config = ExpanderConfig {
            marker: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn test_validate_suffixes() {
        let config = ExpanderConfig {
            generated_suffix: "Template".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expand-template.toml");
        fs::write(&path, "source_folder = \"lib/\"\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.source_folder, PathBuf::from("lib/"));
        assert_eq!(config.marker, "LITTLE_TO_ELM");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }
}
