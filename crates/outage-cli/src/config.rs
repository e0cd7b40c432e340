//! Pipeline configuration file.
//!
//! ```toml
//! data_dir = "doe_147_data"
//! files = ["2021_Annual_Summary.csv", "2022_Annual_Summary.csv"]
//! header_row = 2
//! output = "data_output/combined_outages.csv"
//! summary_json = "data_output/insights.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use outage_ingest::{DEFAULT_HEADER_ROW, HeaderRow, LoadOptions, list_summary_files};

pub const DEFAULT_DATA_DIR: &str = "doe_147_data";
pub const DEFAULT_OUTPUT: &str = "data_output/combined_outages.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory holding the summary CSV exports.
    pub data_dir: PathBuf,
    /// Files to load, relative to `data_dir`. Empty loads every CSV there.
    pub files: Vec<PathBuf>,
    /// Zero-based row index of the source header.
    pub header_row: usize,
    /// Locate the header row by content instead of `header_row`.
    pub auto_header: bool,
    pub output: PathBuf,
    pub summary_json: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            files: Vec::new(),
            header_row: DEFAULT_HEADER_ROW,
            auto_header: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
            summary_json: None,
        }
    }
}

impl PipelineConfig {
    /// Reads a TOML configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn header_row(&self) -> HeaderRow {
        if self.auto_header {
            HeaderRow::Auto
        } else {
            HeaderRow::Fixed(self.header_row)
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new().with_header_row(self.header_row())
    }

    /// Resolves the files to load, in load order.
    pub fn resolve_files(&self) -> Result<Vec<PathBuf>> {
        if self.files.is_empty() {
            return list_summary_files(&self.data_dir)
                .with_context(|| format!("discover files in {}", self.data_dir.display()));
        }
        Ok(self
            .files
            .iter()
            .map(|file| self.data_dir.join(file))
            .collect())
    }
}
