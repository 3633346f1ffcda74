// Trait definitions
pub mod discord_transport;

// Implementations
pub mod http_discord_transport;

// Re-exports for convenience
pub use discord_transport::DiscordTransport;
pub use http_discord_transport::HttpDiscordTransport;
