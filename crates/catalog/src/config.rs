//! Runtime configuration for the document backend.
//!
//! # Environment Variables
//!
//! | Variable           | Values          | Default |
//! |--------------------|-----------------|---------|
//! | `CATALOG_DATA_DIR` | directory path  | `data`  |
//! | `CATALOG_FORMAT`   | `json` \| `xml` | `json`  |

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use store_framework::{DocumentFormat, Json, Xml};
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "CATALOG_DATA_DIR";
pub const FORMAT_VAR: &str = "CATALOG_FORMAT";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which document encoding the file backend writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentKind {
    #[default]
    Json,
    Xml,
}

impl DocumentKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => Json::EXTENSION,
            Self::Xml => Xml::EXTENSION,
        }
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(format!("expected `json` or `xml`, got `{other}`")),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub format: DocumentKind,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            format: DocumentKind::default(),
        }
    }
}

impl CatalogConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_format(mut self, format: DocumentKind) -> Self {
        self.format = format;
        self
    }

    /// Reads the process environment, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `CATALOG_FORMAT` names an unknown format.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(dir) = get(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(format) = get(FORMAT_VAR) {
            config.format = format
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar(FORMAT_VAR.to_string(), e))?;
        }
        Ok(config)
    }

    /// `<data_dir>/<collection>.<ext>`
    pub fn document_path(&self, collection: &str) -> PathBuf {
        self.data_dir
            .join(format!("{collection}.{}", self.format.extension()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
