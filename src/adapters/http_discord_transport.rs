use super::discord_transport::DiscordTransport;
use anyhow::Context as _;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Implementation for fetching Discord resources via HTTP
pub struct HttpDiscordTransport {
    client: reqwest::Client,
    base_url: Url,
    authorization: String,
}

impl HttpDiscordTransport {
    /// Create a new HttpDiscordTransport
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API root (e.g., `https://discord.com/api`)
    /// * `token` - Bot token, sent as `Authorization: Bot <token>`
    /// * `timeout` - Total request timeout
    /// * `connect_timeout` - Connection establishment timeout
    /// * `insecure_mode` - If true, accept invalid TLS certificates
    pub fn new(
        base_url: Url,
        token: &str,
        timeout: Duration,
        connect_timeout: Duration,
        insecure_mode: bool,
    ) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .danger_accept_invalid_certs(insecure_mode)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self {
            client,
            base_url,
            authorization: format!("Bot {}", token),
        })
    }

    /// Join the API root and an endpoint path with exactly one slash
    ///
    /// The guild endpoint is emitted without a leading slash while every
    /// other endpoint has one; both resolve to the same place here.
    pub fn url_for(&self, path: &str) -> anyhow::Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).with_context(|| format!("Building request URL for {}", path))
    }
}

#[async_trait]
impl DiscordTransport for HttpDiscordTransport {
    async fn fetch(&self, path: &str) -> anyhow::Result<Value> {
        let url = self.url_for(path)?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, self.authorization.as_str())
            .send()
            .await
            .with_context(|| format!("Requesting {}", path))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %path, "Discord returned non-success status");
            anyhow::bail!("Discord returned {} for {}", status, path);
        }

        debug!(%status, %path, "Received Discord response");

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Decoding JSON body of {}", path))
    }
}
