//!
//! The resolved CPU identity.
//!

///
/// The resolved CPU identity.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    /// The manufacturer or family.
    pub brand: String,
    /// The model.
    pub model: String,
    /// The representative clock speed in MHz, the first one seen.
    pub mhz: f64,
}

impl CpuInfo {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(brand: String, model: String, mhz: f64) -> Self {
        Self { brand, model, mhz }
    }
}

impl std::fmt::Display for CpuInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{} ({:.0} MHz)", self.brand, self.model, self.mhz)
    }
}
