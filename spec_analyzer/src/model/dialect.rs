//!
//! The report dialect.
//!

use std::str::FromStr;

use serde::Deserialize;

///
/// The report dialect, one per benchmark suite generation.
///
/// Ordered from the oldest generation to the newest.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// The CPU95 fixed-column text format.
    Cpu95,
    /// The CPU2000 fixed-column text format.
    Cpu2000,
    /// The CPU2006 fixed-column text format.
    Cpu2006,
}

impl Dialect {
    /// Every dialect, oldest first.
    pub const ALL: [Self; 3] = [Self::Cpu95, Self::Cpu2000, Self::Cpu2006];

    ///
    /// The position of the dialect in the generation order.
    ///
    pub fn index(self) -> usize {
        match self {
            Self::Cpu95 => 0,
            Self::Cpu2000 => 1,
            Self::Cpu2006 => 2,
        }
    }

    ///
    /// The newest dialect.
    ///
    pub fn newest() -> Self {
        Self::Cpu2006
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "cpu95" => Ok(Self::Cpu95),
            "cpu2000" => Ok(Self::Cpu2000),
            "cpu2006" => Ok(Self::Cpu2006),
            string => anyhow::bail!(
                "Unknown dialect `{}`. Supported dialects: {}",
                string,
                Self::ALL
                    .iter()
                    .map(|dialect| dialect.to_string().to_lowercase())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpu95 => write!(f, "CPU95"),
            Self::Cpu2000 => write!(f, "CPU2000"),
            Self::Cpu2006 => write!(f, "CPU2006"),
        }
    }
}
