//!
//! The SPEC CPU result report fetcher library.
//!

pub mod backoff;
pub mod discovery;
pub mod fetcher;
pub mod transport;

pub use self::backoff::Backoff;
pub use self::discovery::target::Target;
pub use self::fetcher::error::Error as FetchError;
pub use self::fetcher::fetched::Fetched;
pub use self::fetcher::CachedFetcher;
pub use self::transport::http::HttpTransport;
pub use self::transport::Transport;

/// The default number of concurrent fetches.
pub const DEFAULT_JOBS: usize = 20;

/// The default delay before the first retry, in milliseconds.
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;
