//!
//! The cached fetcher.
//!

#[cfg(test)]
mod tests;

pub mod error;
pub mod fetched;

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::backoff::Backoff;
use crate::transport::error::Error as TransportError;
use crate::transport::Transport;

use self::error::Error;
use self::fetched::Fetched;

///
/// The cached fetcher.
///
/// A file present at the cache path is never fetched again. Downloads go
/// through a temporary sibling file, so an interrupted fetch never leaves a
/// partial file at the cache path.
///
#[derive(Debug)]
pub struct CachedFetcher<T: Transport> {
    /// The transport.
    transport: T,
    /// The delay before the first retry.
    initial_delay: Duration,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl<T: Transport> CachedFetcher<T> {
    /// The temporary download file extension.
    pub const PARTIAL_EXTENSION: &'static str = "part";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(transport: T, initial_delay: Duration, quiet: bool) -> Self {
        Self {
            transport,
            initial_delay,
            quiet,
        }
    }

    ///
    /// Makes sure the content of `url` is stored at `path`.
    ///
    /// Transient failures are retried with exponential backoff until the
    /// download succeeds.
    ///
    pub fn fetch(&self, url: &str, path: &Path) -> Result<Fetched, Error> {
        if path.exists() {
            return Ok(Fetched::Cached);
        }
        if let Some(directory) = path.parent() {
            std::fs::create_dir_all(directory).map_err(|error| Error::CreatingDirectory {
                error,
                path: directory.to_path_buf(),
            })?;
        }

        let mut retries = 0;
        let mut backoff = Backoff::new(self.initial_delay);
        let data = loop {
            match self.transport.get(url) {
                Ok(data) => break data,
                Err(TransportError::Rejected { status }) => {
                    return Err(Error::Rejected {
                        url: url.to_owned(),
                        status,
                    })
                }
                Err(TransportError::Transient(reason)) => {
                    let delay = backoff.next().unwrap_or(Duration::MAX);
                    if !self.quiet {
                        eprintln!(
                            "    {} `{}` in {:?}: {}",
                            "Retrying".bright_yellow().bold(),
                            url,
                            delay,
                            reason,
                        );
                    }
                    std::thread::sleep(delay);
                    retries += 1;
                }
            }
        };

        let partial_path = Self::partial_path(path);
        std::fs::write(partial_path.as_path(), data).map_err(|error| Error::Writing {
            error,
            path: partial_path.clone(),
        })?;
        std::fs::rename(partial_path.as_path(), path).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })?;

        Ok(Fetched::Downloaded { retries })
    }

    ///
    /// The temporary download path of the cache path.
    ///
    fn partial_path(path: &Path) -> PathBuf {
        let mut file_name = path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".");
        file_name.push(Self::PARTIAL_EXTENSION);
        path.with_file_name(file_name)
    }
}
