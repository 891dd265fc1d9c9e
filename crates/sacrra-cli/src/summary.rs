use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sacrra_cli::logging::redact_value;
use sacrra_transform::date::format_date;

use crate::types::{GenerateResult, ValidateResult};

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Input: {}", result.input.display());
    println!(
        "Transaction date: {}  Month end: {}",
        format_date(result.transaction_date),
        format_date(result.month_end)
    );
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Kind"),
        header_cell("Lines"),
        header_cell("Data"),
        header_cell("Bytes"),
        header_cell("SHA-256"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for file in &result.files {
        table.add_row(vec![
            Cell::new(&file.name).fg(Color::Green),
            Cell::new(file.kind),
            Cell::new(file.line_count),
            Cell::new(file.data_line_count),
            Cell::new(file.byte_count),
            dim_cell(&file.sha256),
        ]);
    }
    if result.files.is_empty() {
        table.add_row(vec![
            dim_cell("no files produced"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    let stats = &result.stats;
    println!(
        "Records: {} read, {} skipped, {} registrations, {} closures, {} monthly of {} accounts",
        stats.input_records,
        stats.skipped_count(),
        stats.registrations,
        stats.closures,
        stats.monthly_records,
        stats.monthly_accounts,
    );
    if !stats.skipped.is_empty() {
        print_skipped_table(result);
    }
    if !result.unknown_fields.is_empty() {
        println!("Ignored input fields: {}", result.unknown_fields.join(", "));
    }
}

fn print_skipped_table(result: &GenerateResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Account"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for skipped in &result.stats.skipped {
        let account = if skipped.account_number.is_empty() {
            "-"
        } else {
            redact_value(&skipped.account_number)
        };
        table.add_row(vec![
            Cell::new(skipped.index + 1),
            Cell::new(account),
            Cell::new(skipped.reason).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn print_validate_summary(result: &ValidateResult) {
    let checked = &result.checked;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("File"),
        Cell::new(result.path.display()),
    ]);
    table.add_row(vec![Cell::new("Kind"), Cell::new(checked.kind)]);
    table.add_row(vec![Cell::new("Lines"), Cell::new(checked.line_count)]);
    table.add_row(vec![
        Cell::new("Data lines"),
        Cell::new(checked.data_line_count),
    ]);
    table.add_row(vec![Cell::new("Line width"), Cell::new(checked.line_width)]);
    table.add_row(vec![Cell::new("SHA-256"), dim_cell(&checked.sha256)]);
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new("valid")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
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
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
