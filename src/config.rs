pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Qdrant REST connection settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QdrantConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl QdrantConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// An explicit `url` wins over `QDRANT_URL`, which wins over the local default.
    pub fn resolve(
        url: Option<String>,
        env_url: Option<String>,
        env_timeout: Option<String>,
    ) -> Self {
        let non_empty = |u: &String| !u.trim().is_empty();
        let url = url
            .filter(non_empty)
            .or_else(|| env_url.filter(non_empty))
            .unwrap_or_else(|| DEFAULT_QDRANT_URL.to_string());

        let timeout_secs = env_timeout
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self { url, timeout_secs }
    }

    pub fn from_env(url: Option<String>) -> Self {
        Self::resolve(
            url,
            std::env::var("QDRANT_URL").ok(),
            std::env::var("QDRANT_TIMEOUT_SECS").ok(),
        )
    }
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QDRANT_URL)
    }
}
