use super::config::FetchConfig;
use super::page::{PageInfo, ResultPage};
use super::resource::{MembersResource, MessagesResource, PagedResource, ReactionsResource};
use super::{endpoint, normalize};
use crate::adapters::DiscordTransport;
use crate::model::raw::{RawChannel, RawGuild};
use crate::model::{Channel, Emoji, Guild, GuildMember, Message, Reaction, Snowflake};
use anyhow::Context as _;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Fetch and normalize the resources of one guild
///
/// Every method issues exactly one request through the transport. Transport
/// errors are returned untouched; responses that do not match the expected
/// shape fail with the resource name as context. Walking pages (feeding
/// `end_cursor` back in as `after`) is left to the caller.
pub struct GuildFetcher<T>
where
    T: DiscordTransport,
{
    transport: Arc<T>,
    config: FetchConfig,
}

impl<T> GuildFetcher<T>
where
    T: DiscordTransport,
{
    /// Create a new GuildFetcher
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport that performs requests
    /// * `config` - Guild id and per-resource page sizes
    pub fn new(transport: Arc<T>, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub async fn guild(&self) -> anyhow::Result<Guild> {
        let raw: RawGuild = self
            .fetch_json(&endpoint::guild(&self.config.guild_id), "guild")
            .await?;
        Ok(normalize::guild(raw))
    }

    /// All channels of the guild; Discord does not paginate this resource
    pub async fn channels(&self) -> anyhow::Result<Vec<Channel>> {
        let raw: Vec<RawChannel> = self
            .fetch_json(&endpoint::channels(&self.config.guild_id), "channels")
            .await?;
        Ok(raw.into_iter().map(normalize::channel).collect())
    }

    pub async fn members(&self, after: &Snowflake) -> anyhow::Result<ResultPage<GuildMember>> {
        let resource = MembersResource {
            guild_id: &self.config.guild_id,
        };
        self.fetch_page(&resource, after).await
    }

    pub async fn messages(
        &self,
        channel_id: &Snowflake,
        after: &Snowflake,
    ) -> anyhow::Result<ResultPage<Message>> {
        self.fetch_page(&MessagesResource { channel_id }, after)
            .await
    }

    /// Users who reacted to a message with one emoji
    pub async fn reactions(
        &self,
        channel_id: &Snowflake,
        message_id: &Snowflake,
        emoji: &Emoji,
        after: &Snowflake,
    ) -> anyhow::Result<ResultPage<Reaction>> {
        let resource = ReactionsResource::new(channel_id, message_id, emoji)?;
        self.fetch_page(&resource, after).await
    }

    /// Fetch one page of a paginated resource
    ///
    /// Assumes Discord returns items in ascending id order, so the last raw
    /// item is the cursor for the next page. This is not checked; unordered
    /// responses would make the walk skip or repeat items.
    pub async fn fetch_page<R>(
        &self,
        resource: &R,
        after: &Snowflake,
    ) -> anyhow::Result<ResultPage<R::Item>>
    where
        R: PagedResource,
    {
        let limit = resource.limit(&self.config);
        let path = resource.path(after, limit);

        let raw: Vec<R::Raw> = self.fetch_json(&path, R::NAME).await?;
        let page_info = PageInfo::from_raw(&raw, limit, R::raw_cursor);

        let results = raw
            .into_iter()
            .map(|item| resource.normalize(item))
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("Normalizing {} page", R::NAME))?;

        debug!(
            resource = R::NAME,
            %after,
            limit,
            count = results.len(),
            has_next_page = page_info.has_next_page,
            end_cursor = ?page_info.end_cursor,
            "Fetched page"
        );

        Ok(ResultPage { page_info, results })
    }

    async fn fetch_json<D>(&self, path: &str, resource: &str) -> anyhow::Result<D>
    where
        D: DeserializeOwned,
    {
        debug!(%path, %resource, "Requesting resource");

        let value = self.transport.fetch(path).await?;

        serde_json::from_value(value)
            .with_context(|| format!("Unexpected {} response shape from {}", resource, path))
    }
}
