use crate::model::Snowflake;

/// Immutable settings shared by every call of one fetcher
///
/// Limits are passed to Discord as given; keeping them positive (and within
/// Discord's per-endpoint maximum) is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub guild_id: Snowflake,
    pub members_limit: usize,
    pub messages_limit: usize,
    pub reactions_limit: usize,
}
