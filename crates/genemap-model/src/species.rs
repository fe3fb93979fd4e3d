use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Reference genome whose gene table is bundled with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Human, GRCh38 with GENCODE v43 annotation.
    Hg38,
    /// Mouse, GRCm38 with GENCODE vM25 annotation.
    Mm10,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Hg38, Species::Mm10];

    /// Short assembly code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Hg38 => "hg38",
            Self::Mm10 => "mm10",
        }
    }

    /// Assembly plus annotation release, as shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hg38 => "hg38_v43",
            Self::Mm10 => "mm10_v25",
        }
    }

    pub fn organism(self) -> &'static str {
        match self {
            Self::Hg38 => "Homo sapiens",
            Self::Mm10 => "Mus musculus",
        }
    }

    /// File name of the bundled two-column reference table.
    pub fn table_file_name(self) -> &'static str {
        match self {
            Self::Hg38 => "hg38_table.tsv",
            Self::Mm10 => "mm10_table.tsv",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hg38" | "hg38_v43" | "human" | "grch38" => Ok(Self::Hg38),
            "mm10" | "mm10_v25" | "mouse" | "grcm38" => Ok(Self::Mm10),
            _ => Err(ModelError::UnknownSpecies(s.to_string())),
        }
    }
}
