//!
//! The normalized record model.
//!


pub mod availability;
pub mod bench_record;
pub mod bench_type;
pub mod dialect;
pub mod metric;
pub mod score;
pub mod test_record;

pub use self::bench_record::BenchRecord;
pub use self::bench_type::BenchType;
pub use self::dialect::Dialect;
pub use self::metric::Metric;
pub use self::score::Score;
pub use self::test_record::TestRecord;
