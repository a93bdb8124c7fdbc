//!
//! The sub-benchmark contribution.
//!

///
/// The largest multiple of a submission's geometric mean reached by a sub-benchmark.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// The sub-benchmark name.
    pub bench_name: String,
    /// The base score divided by the submission's geometric mean.
    pub multiple: f64,
    /// The submission reaching the multiple.
    pub test_id: String,
    /// The machine of that submission.
    pub machine: String,
}

impl Contribution {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(bench_name: String, multiple: f64, test_id: String, machine: String) -> Self {
        Self {
            bench_name,
            multiple,
            test_id,
            machine,
        }
    }
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>10.4} {:<20} {} {}",
            self.multiple, self.bench_name, self.test_id, self.machine
        )
    }
}
