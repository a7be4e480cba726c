use crate::domain::constants::LOCATION_AREA_PATH;
use crate::domain::models::LocationArea;
use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("request for location area {index} failed: {source}")]
    Transport {
        index: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("location area {index} responded with status code {status} and\nbody: {body}")]
    Status { index: u32, status: u16, body: String },
    #[error("location area {index} returned an unreadable body: {source}")]
    Decode {
        index: u32,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Transport and status failures end the session; a bad body only
    /// costs the one item.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CatalogError::Decode { .. })
    }
}

/// Anything that can resolve a catalog index to a location area.
pub trait CatalogSource {
    fn location_area(&self, index: u32) -> Result<LocationArea, CatalogError>;
}

pub struct CatalogClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn location_area_url(&self, index: u32) -> String {
        format!("{}/{}/{}", self.base_url, LOCATION_AREA_PATH, index)
    }
}

impl CatalogSource for CatalogClient {
    fn location_area(&self, index: u32) -> Result<LocationArea, CatalogError> {
        let url = self.location_area_url(index);
        tracing::debug!(%url, index, "fetching location area");

        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|source| CatalogError::Transport { index, source })?;
        let status = resp.status();
        // text() consumes the response, so the body is released here on
        // every path below.
        let body = resp
            .text()
            .map_err(|source| CatalogError::Transport { index, source })?;

        if !(status.is_success() || status.is_redirection()) {
            return Err(CatalogError::Status {
                index,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| CatalogError::Decode { index, source })
    }
}

/// Lazily resolves display names for `range`, one request per pulled item.
///
/// Calling again with the same range restarts the walk from the top.
pub fn page_names<'a>(
    source: &'a dyn CatalogSource,
    range: RangeInclusive<u32>,
) -> impl Iterator<Item = (u32, Result<String, CatalogError>)> + 'a {
    range.map(move |index| (index, source.location_area(index).map(|area| area.name)))
}
