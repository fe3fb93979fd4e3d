use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};
use tracing::{info, info_span};

use genemap_cli::options::{OptionOverrides, resolve_options};
use genemap_cli::summary::{apply_table_style, dim_cell, preview_table};
use genemap_core::ConverterSession;
use genemap_ingest::{InputTable, load_input_file, load_input_file_with_delimiter};
use genemap_model::{ColumnSelector, ConversionSummary, Species};
use genemap_output::WriteOptions;
use genemap_reference::{reference_table_path, resolve_reference_dir};

use crate::cli::{ConvertArgs, DelimiterArg, PreviewArgs, SpeciesArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionSummary> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();

    let overrides = OptionOverrides {
        placeholder: args.placeholder.clone(),
        append: args.append,
        strip_version: args.strip_version,
        match_unversioned: args.match_unversioned,
    };
    let options = resolve_options(args.options.as_deref(), &overrides)?;
    let species = Species::from(args.species);
    let reference_dir = resolve_reference_dir(args.reference_dir.as_deref());

    let mut session =
        ConverterSession::new(reference_dir).with_dedup_policy(args.dedup.into());
    session
        .select_species(species)
        .with_context(|| format!("load {species} reference table"))?;
    match args.delimiter {
        Some(delimiter) => session.load_file_with_delimiter(&args.input, delimiter.into()),
        None => session.load_file(&args.input),
    }
    .with_context(|| format!("read {}", args.input.display()))?;

    let selector = column_selector(args);
    session.select_column(&selector)?;
    session.convert(args.direction.into(), &options)?;
    let written = session
        .write(
            args.output_dir.as_deref(),
            WriteOptions::default().with_overwrite(args.overwrite),
        )
        .context("write converted file")?;
    let output = written.path.clone();
    info!(output = %output.display(), rows = written.rows, "conversion written");

    let result = session
        .result()
        .context("conversion result missing after write")?;
    Ok(result.summary(Some(output)))
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let table = read_table(&args.input, args.delimiter)?;
    println!(
        "{} ({} rows, {} columns, {}-delimited)",
        table.source.display(),
        table.row_count(),
        table.column_count(),
        table.delimiter.name()
    );
    println!("{}", preview_table(table.headers(), table.preview(args.rows)));
    Ok(())
}

pub fn run_species(args: &SpeciesArgs) -> Result<()> {
    let reference_dir = resolve_reference_dir(args.reference_dir.as_deref());
    let mut table = Table::new();
    table.set_header(vec!["Species", "Label", "Organism", "Reference table", "Present"]);
    apply_table_style(&mut table);
    for species in Species::ALL {
        let path = reference_table_path(&reference_dir, species);
        let present = if path.is_file() {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(species.code()),
            Cell::new(species.label()),
            Cell::new(species.organism()),
            dim_cell(path.display()),
            present,
        ]);
    }
    println!("{table}");
    Ok(())
}

fn read_table(path: &Path, delimiter: Option<DelimiterArg>) -> Result<InputTable> {
    let table = match delimiter {
        Some(delimiter) => load_input_file_with_delimiter(path, delimiter.into()),
        None => load_input_file(path),
    };
    table.with_context(|| format!("read {}", path.display()))
}

fn column_selector(args: &ConvertArgs) -> ColumnSelector {
    match (&args.column, args.column_index) {
        (Some(name), _) => ColumnSelector::by_name(name.clone()),
        (None, Some(index)) => ColumnSelector::ByIndex(index),
        // clap requires one of the two
        (None, None) => ColumnSelector::ByIndex(0),
    }
}
