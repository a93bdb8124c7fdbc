//!
//! The SPEC CPU report analyzer library.
//!

pub mod auto_parallel;
pub mod corpus;
pub mod cpu;
pub mod ingest;
pub mod model;
pub mod normalizer;
pub mod report;
pub mod results;
pub mod scan;
pub mod summary;
pub mod table;

pub use self::corpus::Config;
pub use self::cpu::CpuDatabase;
pub use self::ingest::Ingest;
pub use self::model::BenchRecord;
pub use self::model::Dialect;
pub use self::model::Metric;
pub use self::model::TestRecord;
pub use self::normalizer::CalibratedRun;
pub use self::report::Outcome;
pub use self::results::TestResult;
pub use self::summary::Summary;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
