use serde_json::Value;
use std::sync::Arc;

mod data;
pub use data::*;


/// Reasons the feed couldn't be loaded
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("cannot get url '{url}'")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot get json for '{url}'")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid api response: {0}")]
    InvalidResponse(&'static str),
}

/// Fetches the video feed from a fixed endpoint
#[derive(Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    endpoint: Arc<String>,
}

impl FeedClient {
    pub fn new(endpoint: impl ToString) -> Self {
        Self {
            client: crate::http::new_client(),
            endpoint: Arc::new(endpoint.to_string()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Gets the feed and returns its records, unparsed.
    ///
    /// Records are only checked for shape when they get rendered.
    pub async fn fetch_videos(&self) -> Result<Vec<Value>, FetchError> {
        log::debug!("fetching videos from {}", self.endpoint);

        let body = crate::http::get_body(
            &self.client,
            &self.endpoint,
            &[("Accept", "application/json")],
        )
        .await
        .map_err(|source| FetchError::Network {
            url: self.endpoint.to_string(),
            source,
        })?;

        let body = serde_json::from_str(&body).map_err(|source| FetchError::InvalidJson {
            url: self.endpoint.to_string(),
            source,
        })?;

        let videos = extract_videos(body)?;
        log::debug!("got {} records from {}", videos.len(), self.endpoint);
        Ok(videos)
    }
}

/// Pulls the record list out of a `{ data: { data: [..] } }` envelope
pub fn extract_videos(mut body: Value) -> Result<Vec<Value>, FetchError> {
    use crate::util::is_truthy;

    let outer = body
        .get_mut("data")
        .filter(|data| is_truthy(data))
        .ok_or(FetchError::InvalidResponse("missing `data`"))?;

    let inner = outer
        .get_mut("data")
        .filter(|data| is_truthy(data))
        .ok_or(FetchError::InvalidResponse("missing `data.data`"))?;

    match inner.take() {
        Value::Array(videos) => Ok(videos),
        _ => Err(FetchError::InvalidResponse("`data.data` is not a list")),
    }
}
