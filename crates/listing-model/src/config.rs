//! Run configuration: input files, delimiters, output path and repair policy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::schema::SourceKind;

/// Directory the default deployment reads from and writes to.
pub const DEFAULT_DATA_DIR: &str = "/home/data";

/// Default file name of the merged dataset.
pub const DEFAULT_OUTPUT_FILE: &str = "merged_dataset.csv";

/// Strategy for rows that have more fields than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStrategy {
    /// Fold excess trailing fields into the second-to-last field.
    #[default]
    MergeTrailing,
    /// Drop every row whose width differs from the header.
    Strict,
}

/// One input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub delimiter: String,
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>, delimiter: char) -> Self {
        Self {
            path: path.into(),
            delimiter: delimiter.to_string(),
        }
    }

    /// Default file name and delimiter for a source.
    pub fn default_for(kind: SourceKind, data_dir: &Path) -> Self {
        let (file, delimiter) = match kind {
            SourceKind::Website => ("website_dataset.csv", ';'),
            SourceKind::Google => ("google_dataset.csv", ','),
            SourceKind::Facebook => ("facebook_dataset.csv", ','),
        };
        Self::new(data_dir.join(file), delimiter)
    }

    /// Returns the delimiter as a single ASCII character.
    pub fn delimiter_char(&self, kind: SourceKind) -> Result<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii() && ch != '"' && ch != '\n' && ch != '\r' => Ok(ch),
            _ => Err(ModelError::InvalidDelimiter {
                source_name: kind.to_string(),
                value: self.delimiter.clone(),
            }),
        }
    }
}

/// Complete configuration of one merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    pub website: SourceConfig,
    pub google: SourceConfig,
    pub facebook: SourceConfig,
    pub output: PathBuf,
    #[serde(default)]
    pub repair: RepairStrategy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl MergeConfig {
    /// Default file names rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            website: SourceConfig::default_for(SourceKind::Website, dir),
            google: SourceConfig::default_for(SourceKind::Google, dir),
            facebook: SourceConfig::default_for(SourceKind::Facebook, dir),
            output: dir.join(DEFAULT_OUTPUT_FILE),
            repair: RepairStrategy::default(),
        }
    }

    /// Loads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MergeConfig =
            serde_json::from_str(&text).map_err(|source| ModelError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for kind in SourceKind::ALL {
            self.source(kind).delimiter_char(kind)?;
        }
        Ok(())
    }

    pub fn source(&self, kind: SourceKind) -> &SourceConfig {
        match kind {
            SourceKind::Website => &self.website,
            SourceKind::Google => &self.google,
            SourceKind::Facebook => &self.facebook,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }
}
