//!
//! The HTTP transport.
//!


use super::error::Error;
use super::Transport;

///
/// The HTTP transport.
///
#[derive(Debug, Default)]
pub struct HttpTransport {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
}

impl HttpTransport {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(http_client: reqwest::blocking::Client) -> Self {
        Self { http_client }
    }

    ///
    /// Whether the status will not change if the request is repeated.
    ///
    fn is_permanent(status: reqwest::StatusCode) -> bool {
        status.is_client_error()
            && status != reqwest::StatusCode::REQUEST_TIMEOUT
            && status != reqwest::StatusCode::TOO_MANY_REQUESTS
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .http_client
            .get(url)
            .send()
            .map_err(|error| Error::Transient(error.to_string()))?;
        let status = response.status();
        if Self::is_permanent(status) {
            return Err(Error::Rejected {
                status: status.as_u16(),
            });
        }
        let response = response
            .error_for_status()
            .map_err(|error| Error::Transient(error.to_string()))?;
        let bytes = response
            .bytes()
            .map_err(|error| Error::Transient(error.to_string()))?;
        Ok(bytes.to_vec())
    }
}
