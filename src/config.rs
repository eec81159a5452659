//! Scan configuration: built-in defaults, an optional JSON/YAML file, then
//! command-line overrides.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::scanner::patterns::{default_extensions, DEFAULT_EXTENDS_PATTERN, DEFAULT_TEST_MARKER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub test_marker: String,
    pub extends_pattern: String,
    pub strict_cycles: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            test_marker: DEFAULT_TEST_MARKER.to_string(),
            extends_pattern: DEFAULT_EXTENDS_PATTERN.to_string(),
            strict_cycles: false,
        }
    }
}

/// On-disk shape of a config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub test_marker: Option<String>,
    #[serde(default)]
    pub extends_pattern: Option<String>,
    #[serde(default)]
    pub strict_cycles: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_failed(path, e.to_string()))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_failed(path, e.to_string()))
        }
    }
}

impl ScanConfig {
    /// Overlays every field the file sets.
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(extensions) = file.extensions {
            self.extensions = extensions;
        }
        if let Some(marker) = file.test_marker {
            self.test_marker = marker;
        }
        if let Some(pattern) = file.extends_pattern {
            self.extends_pattern = pattern;
        }
        if let Some(strict) = file.strict_cycles {
            self.strict_cycles = strict;
        }
        self
    }

    /// Extensions with a guaranteed leading dot, empty entries dropped.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim())
            .filter(|ext| !ext.is_empty() && *ext != ".")
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect()
    }

    /// Compiles the extends pattern and checks it has child and parent groups.
    pub fn compile_pattern(&self) -> Result<Regex, ConfigError> {
        let re = Regex::new(&self.extends_pattern)
            .map_err(|e| ConfigError::invalid_pattern(&self.extends_pattern, e))?;

        // captures_len counts the implicit whole-match group
        let groups = re.captures_len() - 1;
        if groups < 2 {
            return Err(ConfigError::MissingCaptureGroups {
                pattern: self.extends_pattern.clone(),
                found: groups,
            });
        }
        Ok(re)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalized_extensions().is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        if self.test_marker.is_empty() {
            return Err(ConfigError::EmptyTestMarker);
        }
        self.compile_pattern().map(|_| ())
    }
}
