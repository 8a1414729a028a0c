/// Base URL of an Ollama endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Trailing slashes are dropped so paths can be appended verbatim.
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_empty(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Full URL for an API path such as `/tags`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Model listing; doubles as the reachability check.
    pub fn tags_url(&self) -> String {
        self.url("/tags")
    }
}
