//!
//! The benchmark type.
//!

use std::str::FromStr;

use super::dialect::Dialect;
use super::metric::Metric;

///
/// The canonical base-metric benchmark category of a submission.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BenchType {
    /// CPU95 integer.
    Cint95,
    /// CPU95 floating-point.
    Cfp95,
    /// CPU2000 integer.
    Cint2000,
    /// CPU2000 floating-point.
    Cfp2000,
    /// CPU2006 integer.
    Cint2006,
    /// CPU2006 floating-point.
    Cfp2006,
}

impl BenchType {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(metric: Metric, dialect: Dialect) -> Self {
        match (metric, dialect) {
            (Metric::Integer, Dialect::Cpu95) => Self::Cint95,
            (Metric::FloatingPoint, Dialect::Cpu95) => Self::Cfp95,
            (Metric::Integer, Dialect::Cpu2000) => Self::Cint2000,
            (Metric::FloatingPoint, Dialect::Cpu2000) => Self::Cfp2000,
            (Metric::Integer, Dialect::Cpu2006) => Self::Cint2006,
            (Metric::FloatingPoint, Dialect::Cpu2006) => Self::Cfp2006,
        }
    }

    ///
    /// The suite generation.
    ///
    pub fn dialect(self) -> Dialect {
        match self {
            Self::Cint95 | Self::Cfp95 => Dialect::Cpu95,
            Self::Cint2000 | Self::Cfp2000 => Dialect::Cpu2000,
            Self::Cint2006 | Self::Cfp2006 => Dialect::Cpu2006,
        }
    }

    ///
    /// The performance dimension.
    ///
    pub fn metric(self) -> Metric {
        match self {
            Self::Cint95 | Self::Cint2000 | Self::Cint2006 => Metric::Integer,
            Self::Cfp95 | Self::Cfp2000 | Self::Cfp2006 => Metric::FloatingPoint,
        }
    }
}

impl FromStr for BenchType {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "CINT95" => Ok(Self::Cint95),
            "CFP95" => Ok(Self::Cfp95),
            "CINT2000" => Ok(Self::Cint2000),
            "CFP2000" => Ok(Self::Cfp2000),
            "CINT2006" => Ok(Self::Cint2006),
            "CFP2006" => Ok(Self::Cfp2006),
            string => anyhow::bail!("Unknown benchmark type `{string}`"),
        }
    }
}

impl std::fmt::Display for BenchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cint95 => write!(f, "CINT95"),
            Self::Cfp95 => write!(f, "CFP95"),
            Self::Cint2000 => write!(f, "CINT2000"),
            Self::Cfp2000 => write!(f, "CFP2000"),
            Self::Cint2006 => write!(f, "CINT2006"),
            Self::Cfp2006 => write!(f, "CFP2006"),
        }
    }
}
