use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use sacrra_cli::output::{FileReport, check_file, describe, write_verified};
use sacrra_ingest::load_records;
use sacrra_layout::LayoutVersion;
use sacrra_model::{FileKind, SubmitterConfig};
use sacrra_transform::{Generator, RunDates};

use crate::cli::{GenerateArgs, LayoutArgs, ValidateArgs};
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::{GenerateResult, ValidateResult};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = SubmitterConfig::new(
        args.submitter.supplier_ref.trim(),
        args.submitter.brand_name.trim(),
    );
    config.validate().context("submitter configuration")?;

    let transaction_date = args
        .transaction_date
        .unwrap_or_else(|| Local::now().date_naive());
    let mut dates = RunDates::for_transaction_date(transaction_date);
    if let Some(month_end) = args.month_end {
        dates.month_end = month_end;
    }

    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let ingested = load_records(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let version = LayoutVersion::default();
    let output = Generator::new(&config, version)
        .generate(&ingested.records, dates, args.file_type.into())
        .context("generate submission files")?;

    let files = if args.dry_run {
        output.files.iter().map(describe).collect()
    } else {
        output
            .files
            .iter()
            .map(|file| write_verified(&args.output_dir, file, version))
            .collect::<Result<Vec<FileReport>>>()?
    };
    info!(
        files = files.len(),
        dry_run = args.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(GenerateResult {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        transaction_date: dates.transaction_date,
        month_end: dates.month_end,
        dry_run: args.dry_run,
        files,
        stats: output.stats,
        unknown_fields: ingested.unknown_fields.into_iter().collect(),
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let checked = check_file(
        &args.file,
        args.kind.map(FileKind::from),
        LayoutVersion::default(),
    )?;
    Ok(ValidateResult {
        path: args.file.clone(),
        checked,
    })
}

pub fn run_layout(args: &LayoutArgs) {
    let version = LayoutVersion::default();
    let kind = FileKind::from(args.kind);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Width"),
        header_cell("Align"),
        header_cell("Pad"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (start, field) in version.positioned_fields(kind) {
        let pad = if field.pad == ' ' {
            "space".to_string()
        } else {
            field.pad.to_string()
        };
        table.add_row(vec![
            Cell::new(field.name),
            Cell::new(start),
            Cell::new(start + field.width - 1),
            Cell::new(field.width),
            Cell::new(field.justification.as_str()),
            Cell::new(pad),
            Cell::new(field.default),
        ]);
    }
    println!("{kind} data line, {} bytes", version.line_width(kind));
    println!("{table}");
}
