//!
//! The cached fetcher tests.
//!

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::transport::error::Error as TransportError;
use crate::transport::Transport;

use super::error::Error;
use super::fetched::Fetched;
use super::CachedFetcher;

///
/// Fails a fixed number of times before answering.
///
struct FlakyTransport {
    failures: usize,
    calls: AtomicUsize,
    rejected: Option<u16>,
}

impl FlakyTransport {
    fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
            rejected: None,
        }
    }

    fn rejecting(status: u16) -> Self {
        Self {
            failures: 0,
            calls: AtomicUsize::new(0),
            rejected: Some(status),
        }
    }
}

impl Transport for FlakyTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.rejected {
            return Err(TransportError::Rejected { status });
        }
        if call < self.failures {
            return Err(TransportError::Transient("connection reset".to_owned()));
        }
        Ok(format!("content of {url}").into_bytes())
    }
}

fn fetcher(transport: FlakyTransport) -> CachedFetcher<FlakyTransport> {
    CachedFetcher::new(transport, Duration::ZERO, true)
}

#[test]
fn retries_until_success() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let path = directory.path().join("cpu2000").join("a00001.asc");
    let fetcher = fetcher(FlakyTransport::new(3));

    let fetched = fetcher
        .fetch("http://host/a00001.asc", path.as_path())
        .expect("Fetching failed");

    assert_eq!(fetched, Fetched::Downloaded { retries: 3 });
    assert_eq!(fetcher.transport.calls.load(Ordering::SeqCst), 4);
    assert_eq!(
        std::fs::read_to_string(path.as_path()).expect("Reading failed"),
        "content of http://host/a00001.asc"
    );
    assert!(!directory
        .path()
        .join("cpu2000")
        .join("a00001.asc.part")
        .exists());
}

#[test]
fn cache_hit_skips_transport() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let path = directory.path().join("a00001.asc");
    std::fs::write(path.as_path(), "cached").expect("Writing failed");
    let fetcher = fetcher(FlakyTransport::new(0));

    let fetched = fetcher
        .fetch("http://host/a00001.asc", path.as_path())
        .expect("Fetching failed");

    assert_eq!(fetched, Fetched::Cached);
    assert_eq!(fetcher.transport.calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        std::fs::read_to_string(path.as_path()).expect("Reading failed"),
        "cached"
    );
}

#[test]
fn rejection_is_surfaced() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let path = directory.path().join("missing.asc");
    let fetcher = fetcher(FlakyTransport::rejecting(404));

    match fetcher.fetch("http://host/missing.asc", path.as_path()) {
        Err(Error::Rejected { url, status }) => {
            assert_eq!(url, "http://host/missing.asc");
            assert_eq!(status, 404);
        }
        result => panic!("Unexpected result: {result:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn directory_failure_is_surfaced() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let blocker = directory.path().join("blocker");
    std::fs::write(blocker.as_path(), "").expect("Writing failed");
    let path = blocker.join("a00001.asc");
    let fetcher = fetcher(FlakyTransport::new(0));

    let result = fetcher.fetch("http://host/a00001.asc", path.as_path());

    assert!(matches!(result, Err(Error::CreatingDirectory { .. })));
    assert_eq!(fetcher.transport.calls.load(Ordering::SeqCst), 0);
}
