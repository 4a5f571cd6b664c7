use common::error::FinderError;
use serde_json::Value;

/// The remote restaurant feed. Its payload is fetched and parsed but not
/// merged into the catalog yet.
#[derive(Debug, Clone)]
pub struct RemoteFeed {
    client: reqwest::Client,
    url: String,
}

impl RemoteFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GETs the feed and parses the body as JSON.
    pub async fn fetch(&self) -> Result<Value, FinderError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FinderError::FetchFailure(e.to_string()))?
            .error_for_status()
            .map_err(|e| FinderError::FetchFailure(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| FinderError::FetchFailure(e.to_string()))
    }
}

/// Number of top-level entries in a fetched payload, for logging.
pub fn payload_size(payload: &Value) -> usize {
    match payload {
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
        Value::Null => 0,
        _ => 1,
    }
}
