use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use genemap_model::ConversionSummary;

pub fn print_summary(summary: &ConversionSummary) {
    println!("Input: {}", summary.input.display());
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }
    println!("{}", summary_table(summary));
    if !summary.unmapped_samples.is_empty() {
        println!("{}", unmapped_table(&summary.unmapped_samples));
    }
}

/// Print the summary as pretty JSON on stdout.
pub fn print_summary_json(summary: &ConversionSummary) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

pub fn summary_table(summary: &ConversionSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Direction"),
        header_cell("Rows"),
        header_cell("Mapped"),
        header_cell("Unmapped"),
        header_cell("Empty"),
        header_cell("Mapped %"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&summary.column).add_attribute(Attribute::Bold),
        Cell::new(summary.direction),
        Cell::new(summary.rows),
        count_cell(summary.mapped, Color::Green),
        count_cell(summary.unmapped, Color::Yellow),
        dim_cell(summary.empty),
        Cell::new(format_ratio(summary.mapped, summary.unmapped)),
    ]);
    table
}

pub fn unmapped_table(samples: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Unmapped values (sample)")]);
    apply_table_style(&mut table);
    for sample in samples {
        table.add_row(vec![Cell::new(sample).fg(Color::Yellow)]);
    }
    table
}

/// Headers plus preview rows as one table.
pub fn preview_table(headers: &[String], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
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

/// Percentage of looked-up cells that mapped, or `-` when none were looked up.
pub fn format_ratio(mapped: usize, unmapped: usize) -> String {
    let looked_up = mapped + unmapped;
    if looked_up == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", mapped as f64 * 100.0 / looked_up as f64)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
