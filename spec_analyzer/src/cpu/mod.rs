//!
//! The CPU identity resolver.
//!

#[cfg(test)]
mod tests;

pub mod cleaner;
pub mod identified;
pub mod info;
pub mod rule;

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;

use self::info::CpuInfo;
use self::rule::cascade::CASCADE;
use self::rule::cascade::UNKNOWN_BRAND;
use self::rule::Subject;

/// The clock speed tolerance, in percent, within which two submissions share an identity.
pub const CLOCK_SPEED_TOLERANCE_PERCENT: f64 = 5.0;

///
/// The handle of a resolved identity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CpuId(usize);

///
/// Classifies a CPU name into its brand and model.
///
/// Names no rule recognizes get the unknown brand with the cleaned name as the model.
///
pub fn classify(cpu: &str, machine: &str) -> (String, String) {
    let cleaned = cleaner::clean(cpu);
    let subject = Subject {
        cleaned: cleaned.as_str(),
        raw: cpu,
        machine,
    };
    CASCADE
        .iter()
        .find_map(|rule| rule.apply(&subject))
        .unwrap_or_else(|| (UNKNOWN_BRAND.to_owned(), cleaned.clone()))
}

///
/// Whether the larger of two clock speeds is within `percent` of the smaller one.
///
pub fn is_within_percent(a: f64, b: f64, percent: f64) -> bool {
    let (smaller, larger) = if a > b { (b, a) } else { (a, b) };
    larger < smaller * (1.0 + percent / 100.0)
}

///
/// The corpus-wide table of resolved CPU identities.
///
/// Identities are append-only. Each brand and model keeps its identities in
/// first-seen order, and a new submission reuses the first one whose clock
/// speed is within the tolerance.
///
#[derive(Debug, Default)]
pub struct CpuDatabase {
    /// The identities, in creation order.
    identities: Vec<CpuInfo>,
    /// The identities of each brand and model, in creation order.
    models: HashMap<(String, String), Vec<CpuId>>,
}

impl CpuDatabase {
    ///
    /// Resolves a submission's CPU into an identity, creating it on first sight.
    ///
    pub fn identify(&mut self, cpu: &str, machine: &str, mhz: f64) -> CpuId {
        let key = classify(cpu, machine);
        let identities = &mut self.identities;
        let speeds = self.models.entry(key.clone()).or_default();

        if let Some(id) = speeds.iter().find(|id| {
            is_within_percent(mhz, identities[id.0].mhz, CLOCK_SPEED_TOLERANCE_PERCENT)
        }) {
            return *id;
        }

        let id = CpuId(identities.len());
        let (brand, model) = key;
        identities.push(CpuInfo::new(brand, model, mhz));
        speeds.push(id);
        id
    }

    ///
    /// Returns the identity behind the handle.
    ///
    pub fn get(&self, id: CpuId) -> &CpuInfo {
        &self.identities[id.0]
    }

    ///
    /// The number of identities.
    ///
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    ///
    /// Whether no identity has been resolved yet.
    ///
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    ///
    /// Counts the distinct models resolved for each brand.
    ///
    pub fn models_by_brand(&self) -> BTreeMap<&str, usize> {
        let models: BTreeSet<(&str, &str)> = self
            .iter()
            .map(|(_, info)| (info.brand.as_str(), info.model.as_str()))
            .collect();
        let mut counts = BTreeMap::new();
        for (brand, _) in models.into_iter() {
            *counts.entry(brand).or_insert(0) += 1;
        }
        counts
    }

    ///
    /// Iterates over the identities in creation order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (CpuId, &CpuInfo)> {
        self.identities
            .iter()
            .enumerate()
            .map(|(index, info)| (CpuId(index), info))
    }
}
