use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{RunResult, SourceSummary};

pub fn print_summary(result: &RunResult) {
    if result.written {
        println!("Output: {}", result.output_path.display());
    } else {
        println!(
            "Output: {} (dry run, not written)",
            result.output_path.display()
        );
    }
    println!("{}", source_table(&result.sources));
    println!("Merged rows: {}", result.output_rows);
    if !result.resolutions.is_empty() {
        println!();
        println!("Reconciliation:");
        println!("{}", resolution_table(result));
    }
}

pub fn source_table(sources: &[SourceSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Read"),
        header_cell("Repaired"),
        header_cell("Dropped"),
        header_cell("Kept"),
        header_cell("Normalized"),
    ]);
    apply_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_read = 0usize;
    let mut total_repaired = 0usize;
    let mut total_dropped = 0usize;
    let mut total_normalized = 0usize;
    for source in sources {
        let report = source.report;
        total_read += report.rows_read;
        total_repaired += report.rows_repaired;
        total_dropped += report.rows_dropped;
        total_normalized += source.normalized_values;
        table.add_row(vec![
            Cell::new(source.kind.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(source.path.display()),
            Cell::new(report.rows_read),
            count_cell(report.rows_repaired, Color::Yellow),
            count_cell(report.rows_dropped, Color::Red),
            Cell::new(report.rows_kept()),
            dim_cell(source.normalized_values),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_read).add_attribute(Attribute::Bold),
        count_cell(total_repaired, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_dropped, Color::Red).add_attribute(Attribute::Bold),
        Cell::new(total_read - total_dropped).add_attribute(Attribute::Bold),
        Cell::new(total_normalized).add_attribute(Attribute::Bold),
    ]);
    table
}

fn resolution_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Primary override"),
        header_cell("First non-null"),
        header_cell("All null"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stats in &result.resolutions {
        table.add_row(vec![
            Cell::new(&stats.output),
            count_cell(stats.primary_override, Color::Yellow),
            Cell::new(stats.first_non_null),
            dim_cell(stats.all_null),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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

#[cfg(test)]
mod tests {
    use super::*;
    use listing_ingest::IngestReport;
    use listing_model::SourceKind;
    use std::path::PathBuf;

    #[test]
    fn test_source_table_counts() {
        let sources = vec![SourceSummary {
            kind: SourceKind::Website,
            path: PathBuf::from("website_dataset.csv"),
            report: IngestReport {
                rows_read: 10,
                rows_repaired: 2,
                rows_dropped: 3,
            },
            normalized_values: 4,
        }];

        let mut table = source_table(&sources);
        table.force_no_tty();
        let rendered = table.to_string();

        assert!(rendered.contains("website"));
        assert!(rendered.contains("website_dataset.csv"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains(" 7 "));
        assert!(rendered.contains("Normalized"));
        assert!(rendered.contains(" 4 "));
    }
}
