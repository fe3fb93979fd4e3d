//! Conversion options from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use genemap_model::{ConversionOptions, OutputColumn, UnmappedPolicy};

/// Command-line flags that override file or default options.
///
/// Boolean flags only ever switch a setting on; leaving one off keeps the
/// value from the options file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub placeholder: Option<String>,
    pub append: bool,
    pub strip_version: bool,
    pub match_unversioned: bool,
}

impl OptionOverrides {
    pub fn apply(&self, mut options: ConversionOptions) -> ConversionOptions {
        if let Some(marker) = &self.placeholder {
            options.unmapped = UnmappedPolicy::placeholder(marker.clone());
        }
        if self.append {
            options.output_column = OutputColumn::Append;
        }
        if self.strip_version {
            options.keep_version = false;
        }
        if self.match_unversioned {
            options.match_unversioned = true;
        }
        options
    }
}

/// Parse a TOML options file. Missing keys take their defaults.
pub fn load_options_file(path: &Path) -> Result<ConversionOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read options file {}", path.display()))?;
    let options: ConversionOptions =
        toml::from_str(&text).with_context(|| format!("parse options file {}", path.display()))?;
    debug!(path = %path.display(), ?options, "options file loaded");
    Ok(options)
}

/// Options from `file` (or defaults) with `overrides` applied on top.
pub fn resolve_options(
    file: Option<&Path>,
    overrides: &OptionOverrides,
) -> Result<ConversionOptions> {
    let base = match file {
        Some(path) => load_options_file(path)?,
        None => ConversionOptions::default(),
    };
    Ok(overrides.apply(base))
}
