//! Document retrieval for the convenience entry point.
//!
//! The extraction core never touches the network. When a caller hands
//! [`Readability::from_source`](crate::Readability::from_source) a URL, the
//! bytes come from a [`Fetcher`] they supply.

use url::Url;

use crate::error::{Error, Result};

/// Retrieves raw document bytes for a location.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Interpret `source` as a document location.
///
/// Only text starting with `http://` or `https://` counts as a location;
/// anything else is literal markup and yields `Ok(None)`.
pub fn parse_location(source: &str) -> Result<Option<Url>> {
    let source = source.trim();
    if !(source.starts_with("http://") || source.starts_with("https://")) {
        return Ok(None);
    }
    let url = Url::parse(source)?;
    if url.host_str().is_none() {
        return Err(Error::InvalidLocation(source.to_string()));
    }
    Ok(Some(url))
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[cfg(feature = "fetch")]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("rs-readability/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::FetchError(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!(%url, "fetching document");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::FetchError(e.to_string()))?;
        let bytes = resp.bytes().map_err(|e| Error::FetchError(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
