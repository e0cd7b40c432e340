use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use outage_cli::config::PipelineConfig;
use outage_cli::pipeline::{OutagePipeline, SourceFile};
use outage_model::{NORMALIZED_COLUMNS, RAW_COLUMNS};
use outage_normalization::{NormalizationStats, parse_area_affected};
use outage_report::InsightsSummary;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

/// Outcome of `outages run`.
pub struct RunResult {
    pub sources: Vec<SourceFile>,
    pub stats: Option<NormalizationStats>,
    pub output: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
    pub insights: Option<InsightsSummary>,
}

/// Merges the config file (if any) with command-line overrides.
fn resolve_config(args: &RunArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if !args.files.is_empty() {
        config.files = args.files.clone();
    }
    if let Some(row) = args.header_row {
        config.header_row = row;
        config.auto_header = false;
    }
    if args.auto_header {
        config.auto_header = true;
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(path) = &args.summary_json {
        config.summary_json = Some(path.clone());
    }
    Ok(config)
}

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let config = resolve_config(args)?;
    let span = info_span!("run", data_dir = %config.data_dir.display());
    let _guard = span.enter();

    let files = config.resolve_files()?;
    info!(files = files.len(), "resolved input files");
    let mut pipeline = OutagePipeline::new(files, config.load_options());

    let loaded = pipeline.read_raw()?.height();
    if loaded == 0 {
        info!("no report rows loaded, nothing to do");
        return Ok(RunResult {
            sources: pipeline.sources().to_vec(),
            stats: None,
            output: None,
            summary_json: None,
            insights: None,
        });
    }

    pipeline.clean()?;
    pipeline.normalize()?;
    pipeline.save(&config.output)?;

    let insights = if args.no_insights {
        None
    } else {
        Some(pipeline.insights()?.summary())
    };

    let summary_json = match (&config.summary_json, &insights) {
        (Some(path), Some(summary)) => {
            write_summary_json(path, summary)?;
            Some(path.clone())
        }
        _ => None,
    };

    Ok(RunResult {
        sources: pipeline.sources().to_vec(),
        stats: pipeline.stats(),
        output: Some(config.output.clone()),
        summary_json,
        insights,
    })
}

fn write_summary_json(path: &Path, summary: &InsightsSummary) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(summary).context("serialize insights")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote insights summary");
    Ok(())
}

pub fn run_parse_area(cell: &str) {
    let pairs = parse_area_affected(cell);
    if pairs.is_empty() {
        println!("No areas found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["State", "County"]);
    apply_table_style(&mut table);
    for pair in pairs {
        table.add_row(vec![
            pair.state.unwrap_or_else(|| "-".to_string()),
            pair.county.unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
}

pub fn run_schema() {
    let mut table = Table::new();
    table.set_header(vec!["#", "Raw column", "Normalized column"]);
    apply_table_style(&mut table);
    let rows = RAW_COLUMNS.len().max(NORMALIZED_COLUMNS.len());
    for idx in 0..rows {
        table.add_row(vec![
            (idx + 1).to_string(),
            RAW_COLUMNS.get(idx).copied().unwrap_or("").to_string(),
            NORMALIZED_COLUMNS.get(idx).copied().unwrap_or("").to_string(),
        ]);
    }
    println!("{table}");
}
