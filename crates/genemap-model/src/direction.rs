use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Which side of the reference table a column is converted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Ensembl ID to gene symbol.
    #[default]
    IdToSymbol,
    /// Gene symbol to Ensembl ID.
    SymbolToId,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Self::IdToSymbol => Self::SymbolToId,
            Self::SymbolToId => Self::IdToSymbol,
        }
    }

    /// Suffix appended to the source header when converted values go into a new column.
    pub fn column_suffix(self) -> &'static str {
        match self {
            Self::IdToSymbol => "_symbol",
            Self::SymbolToId => "_ensembl",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IdToSymbol => "id-to-symbol",
            Self::SymbolToId => "symbol-to-id",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdToSymbol => f.write_str("ID → Symbol"),
            Self::SymbolToId => f.write_str("Symbol → ID"),
        }
    }
}

impl FromStr for Direction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "idtosymbol" | "id2symbol" | "idsymbol" => Ok(Self::IdToSymbol),
            "symboltoid" | "symbol2id" | "symbolid" => Ok(Self::SymbolToId),
            _ => Err(ModelError::UnknownDirection(s.to_string())),
        }
    }
}
