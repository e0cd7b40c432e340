use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use outage_cli::pipeline::SourceStatus;
use outage_report::{GroupCount, GroupStat, InsightsSummary};

use crate::commands::RunResult;

pub fn print_run_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Rows"), header_cell("Status")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for source in &result.sources {
        let (rows, status) = match &source.status {
            SourceStatus::Loaded { rows } => (Cell::new(rows), Cell::new("loaded").fg(Color::Green)),
            SourceStatus::Skipped { reason } => (dim_cell("-"), Cell::new(reason).fg(Color::Yellow)),
        };
        table.add_row(vec![Cell::new(source.path.display()), rows, status]);
    }
    println!("{table}");

    if let Some(stats) = &result.stats {
        println!(
            "Rows: {} reports -> {} normalized ({} without area, {} unparsed starts, {} unparsed ends)",
            stats.input_rows,
            stats.output_rows,
            stats.rows_without_area,
            stats.unparsed_starts,
            stats.unparsed_ends
        );
    }
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: none (no report rows loaded)"),
    }
    if let Some(path) = &result.summary_json {
        println!("Insights JSON: {}", path.display());
    }
    if let Some(insights) = &result.insights {
        print_insights(insights);
    }
}

fn print_insights(summary: &InsightsSummary) {
    let years: Vec<String> = summary
        .observed_years
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Years observed: {}", years.join(", "));
    print_hours_table("NERC Region", "Avg restoration (h)", &summary.avg_restoration_by_nerc);
    print_hours_table("State", "Avg restoration (h)", &summary.avg_restoration_by_state);
    print_count_table("Event Type", &summary.top_event_types);
    print_hours_table("Month", "Median restoration (h)", &summary.seasonal_trends_by_month);
}

fn print_hours_table(key_label: &str, value_label: &str, stats: &[GroupStat]) {
    if stats.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(key_label), header_cell(value_label)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for stat in stats {
        table.add_row(vec![Cell::new(&stat.key), Cell::new(format!("{:.2}", stat.hours))]);
    }
    println!("{table}");
}

fn print_count_table(key_label: &str, counts: &[GroupCount]) {
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(key_label), header_cell("Outages")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![Cell::new(&count.key), Cell::new(count.events)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
