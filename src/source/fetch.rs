use reqwest::blocking::Client;
use tracing::instrument;

use crate::Config;

/// Something that can retrieve a page by URL.
///
/// The wiki is reached through [`HttpFetcher`]; tests substitute canned
/// pages.
pub trait Fetcher {
    /// Retrieves the raw bytes of the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

/// Errors that can occur while retrieving a page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived.
    #[error("request to {url} failed")]
    Request {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

/// Blocking HTTP access to the wiki.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client that identifies itself and times out as configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(request_error)?;
        tracing::debug!(bytes = body.len(), "Fetched page");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        assert!(HttpFetcher::new(&Config::default()).is_ok());
    }

    #[test]
    fn status_error_names_the_page() {
        let error = FetchError::Status {
            url: "http://wiki.lvl1.org/missing".to_string(),
            status: 404,
        };
        assert_eq!(
            error.to_string(),
            "http://wiki.lvl1.org/missing responded with HTTP 404"
        );
    }
}
