use super::config::FetchConfig;
use super::{endpoint, normalize};
use crate::model::raw::{RawGuildMember, RawReactor};
use crate::model::{
    Emoji, EmojiRef, GuildMember, Message, RawMessage, Reaction, Snowflake, emoji_to_ref,
};
use serde::de::DeserializeOwned;

/// Descriptor of a cursor-paginated resource
///
/// Ties together how to address one page, how to read the paging id from a
/// raw item and how to normalize that item. `GuildFetcher::fetch_page` drives
/// any descriptor with the same page completion policy.
pub trait PagedResource {
    /// Upstream item shape
    type Raw: DeserializeOwned;
    /// Normalized record
    type Item;

    /// Resource name used in logs and error context
    const NAME: &'static str;

    /// Page size configured for this resource
    fn limit(&self, config: &FetchConfig) -> usize;

    /// Request path for the page that starts after `after`
    fn path(&self, after: &Snowflake, limit: usize) -> String;

    /// The id Discord pages this resource on
    fn raw_cursor(raw: &Self::Raw) -> &Snowflake;

    fn normalize(&self, raw: Self::Raw) -> anyhow::Result<Self::Item>;
}

pub struct MembersResource<'a> {
    pub guild_id: &'a Snowflake,
}

impl PagedResource for MembersResource<'_> {
    type Raw = RawGuildMember;
    type Item = GuildMember;

    const NAME: &'static str = "members";

    fn limit(&self, config: &FetchConfig) -> usize {
        config.members_limit
    }

    fn path(&self, after: &Snowflake, limit: usize) -> String {
        endpoint::members(self.guild_id, after, limit)
    }

    /// Members are paged on the user id
    fn raw_cursor(raw: &RawGuildMember) -> &Snowflake {
        &raw.user.id
    }

    fn normalize(&self, raw: RawGuildMember) -> anyhow::Result<GuildMember> {
        Ok(normalize::member(raw))
    }
}

pub struct MessagesResource<'a> {
    pub channel_id: &'a Snowflake,
}

impl PagedResource for MessagesResource<'_> {
    type Raw = RawMessage;
    type Item = Message;

    const NAME: &'static str = "messages";

    fn limit(&self, config: &FetchConfig) -> usize {
        config.messages_limit
    }

    fn path(&self, after: &Snowflake, limit: usize) -> String {
        endpoint::messages(self.channel_id, after, limit)
    }

    fn raw_cursor(raw: &RawMessage) -> &Snowflake {
        &raw.id
    }

    fn normalize(&self, raw: RawMessage) -> anyhow::Result<Message> {
        normalize::message(raw, self.channel_id)
    }
}

pub struct ReactionsResource<'a> {
    channel_id: &'a Snowflake,
    message_id: &'a Snowflake,
    emoji: &'a Emoji,
    emoji_ref: EmojiRef,
}

impl<'a> ReactionsResource<'a> {
    /// Fails when the emoji cannot be encoded into a path segment
    pub fn new(
        channel_id: &'a Snowflake,
        message_id: &'a Snowflake,
        emoji: &'a Emoji,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            channel_id,
            message_id,
            emoji,
            emoji_ref: emoji_to_ref(emoji)?,
        })
    }
}

impl PagedResource for ReactionsResource<'_> {
    type Raw = RawReactor;
    type Item = Reaction;

    const NAME: &'static str = "reactions";

    fn limit(&self, config: &FetchConfig) -> usize {
        config.reactions_limit
    }

    fn path(&self, after: &Snowflake, limit: usize) -> String {
        endpoint::reactions(
            self.channel_id,
            self.message_id,
            &self.emoji_ref,
            after,
            limit,
        )
    }

    /// Reactions are paged on the reacting user's id
    fn raw_cursor(raw: &RawReactor) -> &Snowflake {
        &raw.id
    }

    fn normalize(&self, raw: RawReactor) -> anyhow::Result<Reaction> {
        Ok(normalize::reaction(
            raw,
            self.emoji,
            self.channel_id,
            self.message_id,
        ))
    }
}
