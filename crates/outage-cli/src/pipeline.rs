//! Staged outage pipeline: read, clean, normalize, save, insights.
//!
//! Each stage stores its output on the pipeline and requires the previous
//! stage to have produced a non-empty table. Calling a stage out of order is
//! a [`PipelineError::Sequencing`] error.

use std::fmt;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use outage_ingest::{IngestError, LoadOptions, clean_column_names, load_summary_csv};
use outage_normalization::{NormalizationError, NormalizationStats, normalize_outages_with_stats};
use outage_report::{Insights, write_normalized_csv};

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadRaw,
    Clean,
    Normalize,
    Save,
    Insights,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::ReadRaw => "read_raw",
            Stage::Clean => "clean",
            Stage::Normalize => "normalize",
            Stage::Save => "save",
            Stage::Insights => "insights",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage ran before its prerequisite produced data.
    #[error("{stage}() called before {prerequisite}()")]
    Sequencing { stage: Stage, prerequisite: Stage },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error("{stage} failed: {message}")]
    Report { stage: Stage, message: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for PipelineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// What happened to one input file during [`OutagePipeline::read_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Loaded { rows: usize },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub status: SourceStatus,
}

/// Holds the table produced by each stage.
#[derive(Debug, Default)]
pub struct OutagePipeline {
    files: Vec<PathBuf>,
    options: LoadOptions,
    sources: Vec<SourceFile>,
    raw: Option<DataFrame>,
    cleaned: Option<DataFrame>,
    normalized: Option<DataFrame>,
    stats: Option<NormalizationStats>,
}

impl OutagePipeline {
    pub fn new(files: Vec<PathBuf>, options: LoadOptions) -> Self {
        Self {
            files,
            options,
            ..Self::default()
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn raw(&self) -> Option<&DataFrame> {
        self.raw.as_ref()
    }

    pub fn cleaned(&self) -> Option<&DataFrame> {
        self.cleaned.as_ref()
    }

    pub fn normalized(&self) -> Option<&DataFrame> {
        self.normalized.as_ref()
    }

    pub fn stats(&self) -> Option<NormalizationStats> {
        self.stats
    }

    /// Loads every configured file and stacks the non-empty tables.
    ///
    /// A file that fails to load is logged and skipped. With nothing loaded
    /// the result is an empty table. Later stages are reset.
    pub fn read_raw(&mut self) -> Result<&DataFrame> {
        let span = info_span!("read_raw", files = self.files.len());
        let _guard = span.enter();

        self.sources.clear();
        self.cleaned = None;
        self.normalized = None;
        self.stats = None;

        let mut stacked: Option<DataFrame> = None;
        for path in &self.files {
            let frame = match load_summary_csv(path, &self.options) {
                Ok(frame) => frame,
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable file");
                    self.sources.push(SourceFile {
                        path: path.clone(),
                        status: SourceStatus::Skipped {
                            reason: error.to_string(),
                        },
                    });
                    continue;
                }
            };
            debug!(path = %path.display(), rows = frame.height(), "loaded file");
            self.sources.push(SourceFile {
                path: path.clone(),
                status: SourceStatus::Loaded {
                    rows: frame.height(),
                },
            });
            if frame.height() == 0 {
                continue;
            }
            match stacked.as_mut() {
                Some(acc) => {
                    acc.vstack_mut(&frame)?;
                }
                None => stacked = Some(frame),
            }
        }

        let raw = stacked.unwrap_or_else(DataFrame::empty);
        if raw.height() == 0 {
            warn!("no rows loaded");
        } else {
            info!(rows = raw.height(), "read raw reports");
        }
        Ok(&*self.raw.insert(raw))
    }

    /// Tidies column names of the raw table.
    pub fn clean(&mut self) -> Result<&DataFrame> {
        let raw = require(self.raw.as_ref(), Stage::Clean, Stage::ReadRaw)?;
        let _guard = info_span!("clean").entered();
        let cleaned = clean_column_names(raw)?;
        self.normalized = None;
        self.stats = None;
        Ok(&*self.cleaned.insert(cleaned))
    }

    /// Runs the normalization engine over the cleaned table.
    pub fn normalize(&mut self) -> Result<&DataFrame> {
        let cleaned = require(self.cleaned.as_ref(), Stage::Normalize, Stage::Clean)?;
        let outcome = normalize_outages_with_stats(cleaned)?;
        info!(
            input_rows = outcome.stats.input_rows,
            output_rows = outcome.stats.output_rows,
            "normalized reports"
        );
        self.stats = Some(outcome.stats);
        Ok(&*self.normalized.insert(outcome.frame))
    }

    /// Writes the normalized table as CSV.
    pub fn save(&self, path: &Path) -> Result<()> {
        let normalized = require(self.normalized.as_ref(), Stage::Save, Stage::Normalize)?;
        let _guard = info_span!("save", path = %path.display()).entered();
        write_normalized_csv(normalized, path).map_err(|error| PipelineError::Report {
            stage: Stage::Save,
            message: format!("{error:#}"),
        })
    }

    /// Computes restoration insights from the normalized table.
    pub fn insights(&self) -> Result<Insights> {
        let normalized = require(self.normalized.as_ref(), Stage::Insights, Stage::Normalize)?;
        Insights::from_frame(normalized).map_err(|error| PipelineError::Report {
            stage: Stage::Insights,
            message: format!("{error:#}"),
        })
    }
}

fn require(frame: Option<&DataFrame>, stage: Stage, prerequisite: Stage) -> Result<&DataFrame> {
    match frame {
        Some(frame) if frame.height() > 0 => Ok(frame),
        _ => Err(PipelineError::Sequencing {
            stage,
            prerequisite,
        }),
    }
}
