use async_trait::async_trait;
use serde_json::Value;

/// Interface for issuing one request against the Discord REST API
///
/// Implementations own everything about the wire: base URL, authentication,
/// status handling and timeouts. Callers only see the decoded JSON body.
#[async_trait]
pub trait DiscordTransport: Send + Sync {
    /// Request a path and return its decoded JSON body
    ///
    /// # Arguments
    ///
    /// * `path` - Endpoint path relative to the API root, query string included
    ///   (e.g., `/guilds/1/members?after=0&limit=2`)
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed response body
    /// * `Err(_)` - The request failed; the fetcher hands this error back as is
    async fn fetch(&self, path: &str) -> anyhow::Result<Value>;
}
