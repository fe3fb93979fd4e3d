//! Delimited text reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, info_span};

use genemap_model::{Delimiter, InputTable};

use crate::error::{IngestError, Result};

/// Load `path`, inferring the delimiter from its extension.
pub fn load_input_file(path: &Path) -> Result<InputTable> {
    load_input_file_with_delimiter(path, Delimiter::for_path(path))
}

/// Load `path` with an explicit delimiter.
pub fn load_input_file_with_delimiter(path: &Path, delimiter: Delimiter) -> Result<InputTable> {
    let span = info_span!("load_input", path = %path.display(), %delimiter);
    let _guard = span.enter();

    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_input_table(BufReader::new(file), delimiter, path)?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "input file loaded"
    );
    Ok(table)
}

/// Parse delimited text from any reader. `source` is recorded on the table
/// and used in error messages.
pub fn read_input_table<R: Read>(
    reader: R,
    delimiter: Delimiter,
    source: &Path,
) -> Result<InputTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| csv_error(source, err))?
        .iter()
        .enumerate()
        .map(|(idx, header)| normalize_header(idx, header))
        .collect();

    let mut rows = Vec::new();
    let mut ragged = 0usize;
    for record in reader.records() {
        let record = record.map_err(|err| csv_error(source, err))?;
        if record.len() != headers.len() {
            ragged += 1;
        }
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if headers.is_empty() || rows.is_empty() {
        return Err(IngestError::EmptyFile {
            path: source.to_path_buf(),
        });
    }
    if ragged > 0 {
        debug!(ragged, "rows padded or truncated to header width");
    }

    Ok(InputTable::new(headers, rows, delimiter, source))
}

fn normalize_header(idx: usize, raw: &str) -> String {
    if idx == 0 {
        raw.trim_start_matches('\u{feff}').to_string()
    } else {
        raw.to_string()
    }
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
