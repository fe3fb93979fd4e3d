//! Explicit conversion session state.
//!
//! The file pipeline moves through
//! `NoFileLoaded → FileLoaded → ColumnSelected → Converted → Written`.
//! Loading a new file returns to `FileLoaded` from any state and discards
//! the column choice and any pending result. The species index is tracked
//! separately and must be ready before `convert`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use genemap_convert::{ConvertError, convert_column};
use genemap_ingest::{load_input_file, load_input_file_with_delimiter};
use genemap_model::{
    ColumnSelector, ConversionOptions, ConversionResult, Delimiter, Direction, InputTable, Species,
};
use genemap_output::{WriteOptions, WrittenOutput, resolve_output_path, write_output};
use genemap_reference::{DedupPolicy, GeneIndex, build_index, load_mapping_table, reference_root};

use crate::error::{Result, SessionError};

/// Position in the file pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionState {
    NoFileLoaded,
    FileLoaded,
    ColumnSelected,
    Converted,
    Written,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoFileLoaded => "no file loaded",
            Self::FileLoaded => "file loaded",
            Self::ColumnSelected => "column selected",
            Self::Converted => "converted",
            Self::Written => "written",
        };
        f.write_str(name)
    }
}

/// One user's conversion workflow.
#[derive(Debug)]
pub struct ConverterSession {
    reference_dir: PathBuf,
    dedup_policy: DedupPolicy,
    index: Option<Arc<GeneIndex>>,
    input: Option<InputTable>,
    column: Option<usize>,
    result: Option<ConversionResult>,
    written: Option<WrittenOutput>,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(reference_root())
    }
}

impl ConverterSession {
    pub fn new(reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            reference_dir: reference_dir.into(),
            dedup_policy: DedupPolicy::default(),
            index: None,
            input: None,
            column: None,
            result: None,
            written: None,
        }
    }

    #[must_use]
    pub fn with_dedup_policy(mut self, policy: DedupPolicy) -> Self {
        self.dedup_policy = policy;
        self
    }

    pub fn state(&self) -> SessionState {
        if self.written.is_some() {
            SessionState::Written
        } else if self.result.is_some() {
            SessionState::Converted
        } else if self.column.is_some() {
            SessionState::ColumnSelected
        } else if self.input.is_some() {
            SessionState::FileLoaded
        } else {
            SessionState::NoFileLoaded
        }
    }

    pub fn index_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&Arc<GeneIndex>> {
        self.index.as_ref()
    }

    pub fn species(&self) -> Option<Species> {
        self.index.as_ref().map(|index| index.species())
    }

    pub fn input(&self) -> Option<&InputTable> {
        self.input.as_ref()
    }

    pub fn selected_column(&self) -> Option<usize> {
        self.column
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn written(&self) -> Option<&WrittenOutput> {
        self.written.as_ref()
    }

    pub fn reference_dir(&self) -> &Path {
        &self.reference_dir
    }

    /// Load and index the table for `species`.
    ///
    /// On failure the session has no index. A pending result built with the
    /// previous species is discarded either way.
    pub fn select_species(&mut self, species: Species) -> Result<Arc<GeneIndex>> {
        self.discard_result();
        self.index = None;
        let table = load_mapping_table(species, &self.reference_dir)?;
        let index = Arc::new(build_index(&table, self.dedup_policy)?);
        info!(species = %species, genes = index.len(), "species index ready");
        self.index = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Use an index built elsewhere, e.g. shared between sessions.
    pub fn set_index(&mut self, index: Arc<GeneIndex>) {
        self.discard_result();
        self.index = Some(index);
    }

    /// Load a new input file, inferring the delimiter from its extension.
    pub fn load_file(&mut self, path: &Path) -> Result<&InputTable> {
        let table = load_input_file(path)?;
        Ok(self.replace_input(table))
    }

    /// Load a new input file with an explicit delimiter.
    pub fn load_file_with_delimiter(
        &mut self,
        path: &Path,
        delimiter: Delimiter,
    ) -> Result<&InputTable> {
        let table = load_input_file_with_delimiter(path, delimiter)?;
        Ok(self.replace_input(table))
    }

    /// Headers of the loaded file.
    pub fn headers(&self) -> Option<&[String]> {
        self.input.as_ref().map(InputTable::headers)
    }

    /// First `n` rows of the loaded file.
    pub fn preview(&self, n: usize) -> Option<&[Vec<String>]> {
        self.input.as_ref().map(|table| table.preview(n))
    }

    /// Pick the column to convert. Resolved to a position immediately.
    pub fn select_column(&mut self, selector: &ColumnSelector) -> Result<usize> {
        let table = self.input.as_ref().ok_or(SessionError::InvalidState {
            action: "select a column",
            expected: SessionState::FileLoaded,
            actual: SessionState::NoFileLoaded,
        })?;
        let column = selector
            .resolve(table.headers())
            .ok_or_else(|| ConvertError::ColumnNotFound {
                selector: selector.clone(),
                available: table.headers.clone(),
            })?;
        debug!(column, header = %table.headers[column], "column selected");
        self.discard_result();
        self.column = Some(column);
        Ok(column)
    }

    /// Convert the selected column with the current species index.
    pub fn convert(
        &mut self,
        direction: Direction,
        options: &ConversionOptions,
    ) -> Result<&ConversionResult> {
        let actual = self.state();
        let (Some(table), Some(column)) = (self.input.as_ref(), self.column) else {
            return Err(SessionError::InvalidState {
                action: "convert",
                expected: SessionState::ColumnSelected,
                actual,
            });
        };
        let index = self.index.as_ref().ok_or(SessionError::IndexNotReady)?;
        let result = convert_column(
            table,
            &ColumnSelector::ByIndex(column),
            index,
            direction,
            options,
        )?;
        self.written = None;
        Ok(&*self.result.insert(result))
    }

    /// Write the converted table next to the input file, or into `output_dir`.
    pub fn write(
        &mut self,
        output_dir: Option<&Path>,
        options: WriteOptions,
    ) -> Result<&WrittenOutput> {
        let source = self
            .result
            .as_ref()
            .map(|result| result.table.source.clone())
            .unwrap_or_default();
        let path = resolve_output_path(&source, output_dir);
        self.write_to(&path, options)
    }

    /// Write the converted table to an explicit path.
    pub fn write_to(&mut self, path: &Path, options: WriteOptions) -> Result<&WrittenOutput> {
        let actual = self.state();
        let result = self.result.as_ref().ok_or(SessionError::InvalidState {
            action: "write output",
            expected: SessionState::Converted,
            actual,
        })?;
        let written = write_output(result, path, options)?;
        Ok(&*self.written.insert(written))
    }

    fn replace_input(&mut self, table: InputTable) -> &InputTable {
        debug!(path = %table.source.display(), "input replaced");
        self.discard_result();
        self.column = None;
        self.input.insert(table)
    }

    fn discard_result(&mut self) {
        self.result = None;
        self.written = None;
    }
}
