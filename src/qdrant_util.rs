use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::QdrantConfig;
use crate::error::{VectorError, VectorResult};
use crate::point::{Point, UpsertPoints};

/// Minimal client for the Qdrant REST API (default port 6333).
#[derive(Debug, Clone)]
pub struct QdrantRest {
    http: Client,
    base_url: String,
}

impl QdrantRest {
    pub fn new(config: &QdrantConfig) -> VectorResult<Self> {
        if config.timeout_secs == 0 {
            return Err(VectorError::Config("timeout must be at least 1 second".to_string()));
        }
        Url::parse(&config.url).map_err(|e| {
            VectorError::Config(format!("invalid Qdrant URL '{}': {e}", config.url))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn points_url(&self, collection_name: &str) -> String {
        format!("{}/collections/{}/points", self.base_url, collection_name)
    }
}

/// Upserts `points` into `collection_name` and returns Qdrant's JSON reply as is.
pub async fn upsert_points(
    qdrant_client: &QdrantRest,
    collection_name: &str,
    points: &[Point],
) -> VectorResult<Value> {
    let url = qdrant_client.points_url(collection_name);
    tracing::debug!(%url, count = points.len(), "upserting points");

    let response = qdrant_client
        .http
        .put(&url)
        .json(&UpsertPoints { points })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::warn!(%url, %status, "qdrant rejected upsert");
        return Err(VectorError::Status { status, body });
    }

    let result: Value = serde_json::from_str(&body)?;
    tracing::info!(collection = collection_name, count = points.len(), "upserted points");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_tickets_endpoint() {
        let client = QdrantRest::new(&QdrantConfig::resolve(None, None, None)).unwrap();
        assert_eq!(
            client.points_url("tickets"),
            "http://localhost:6333/collections/tickets/points"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = QdrantRest::new(&QdrantConfig::new("http://qdrant:6333/")).unwrap();
        assert_eq!(client.base_url(), "http://qdrant:6333");
        assert_eq!(
            client.points_url("docs"),
            "http://qdrant:6333/collections/docs/points"
        );
    }

    #[test]
    fn zero_timeout_is_a_config_error() {
        let config = QdrantConfig::new("http://localhost:6333").with_timeout(0);
        let err = QdrantRest::new(&config).unwrap_err();
        assert!(matches!(err, VectorError::Config(_)), "{err:?}");
    }

    #[test]
    fn unparsable_url_is_a_config_error() {
        let err = QdrantRest::new(&QdrantConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, VectorError::Config(_)), "{err:?}");
    }
}
