pub mod config;
pub mod endpoint;
pub mod guild_fetcher;
pub mod normalize;
pub mod page;
pub mod resource;

// Re-exports for convenience
pub use config::FetchConfig;
pub use guild_fetcher::GuildFetcher;
pub use page::{PageInfo, ResultPage};
pub use resource::{MembersResource, MessagesResource, PagedResource, ReactionsResource};
