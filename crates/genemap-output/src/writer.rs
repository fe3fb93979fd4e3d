//! Atomic delimited-text writer.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tempfile::NamedTempFile;
use tracing::{debug, info, info_span};

use genemap_model::{ConversionResult, Delimiter, InputTable};

use crate::error::{OutputError, Result};

/// Marker inserted between the input file stem and its extension.
pub const CONVERTED_SUFFIX: &str = "_converted";

/// Options for [`write_output`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Replace an existing file at the target path.
    pub overwrite: bool,
    /// Field separator; defaults to the input table's delimiter.
    pub delimiter: Option<Delimiter>,
}

impl WriteOptions {
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

/// Where an output file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub path: PathBuf,
    pub rows: usize,
    pub delimiter: Delimiter,
}

/// Default output path: `<dir>/<stem>_converted<.ext>`, where `dir` is
/// `output_dir` or the input file's own directory.
pub fn resolve_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."));
    let mut file_name = input
        .file_stem()
        .map_or_else(|| OsString::from("output"), OsStr::to_os_string);
    file_name.push(CONVERTED_SUFFIX);
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    dir.join(file_name)
}

/// Write a conversion result to `path`.
pub fn write_output(
    result: &ConversionResult,
    path: &Path,
    options: WriteOptions,
) -> Result<WrittenOutput> {
    write_table(&result.table, path, options)
}

/// Write any table to `path` via a temporary file in the same directory.
///
/// Either the complete file appears at `path` or nothing does.
pub fn write_table(table: &InputTable, path: &Path, options: WriteOptions) -> Result<WrittenOutput> {
    let span = info_span!("write_output", path = %path.display());
    let _guard = span.enter();

    if is_same_file(&table.source, path) {
        return Err(OutputError::OutputIsInput {
            path: path.to_path_buf(),
        });
    }
    if !options.overwrite && path.exists() {
        return Err(OutputError::OutputExists {
            path: path.to_path_buf(),
        });
    }

    let delimiter = options.delimiter.unwrap_or(table.delimiter);
    let write_err = |source: io::Error| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    debug!(temp = %temp.path().display(), "writing temporary file");
    write_records(temp.as_file_mut(), table, delimiter).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    let persisted = if options.overwrite {
        temp.persist(path)
    } else {
        temp.persist_noclobber(path)
    };
    persisted.map_err(|err| {
        if !options.overwrite && err.error.kind() == io::ErrorKind::AlreadyExists {
            OutputError::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            write_err(err.error)
        }
    })?;

    info!(rows = table.row_count(), %delimiter, "output written");
    Ok(WrittenOutput {
        path: path.to_path_buf(),
        rows: table.row_count(),
        delimiter,
    })
}

fn write_records<W: Write>(sink: W, table: &InputTable, delimiter: Delimiter) -> io::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_writer(sink);
    writer.write_record(&table.headers).map_err(csv_to_io)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_to_io)?;
    }
    writer.flush()
}

fn csv_to_io(err: csv::Error) -> io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => io::Error::other(format!("{other:?}")),
    }
}

fn is_same_file(source: &Path, target: &Path) -> bool {
    if source.as_os_str().is_empty() {
        return false;
    }
    match (source.canonicalize(), target.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => source == target,
    }
}
