// Integration tests for HttpDiscordTransport against a local mock server

use guildfetch::adapters::{DiscordTransport, HttpDiscordTransport};
use guildfetch::fetcher::{FetchConfig, GuildFetcher};
use guildfetch::model::Snowflake;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer) -> HttpDiscordTransport {
    let base_url = Url::parse(&format!("{}/api", server.uri())).unwrap();
    HttpDiscordTransport::new(
        base_url,
        "secret-token",
        Duration::from_secs(5),
        Duration::from_secs(5),
        false,
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_sends_bot_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guilds/1/channels"))
        .and(header("authorization", "Bot secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let body = transport(&server).fetch("/guilds/1/channels").await.unwrap();

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_guild_path_without_leading_slash_is_joined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guilds/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "g"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = transport(&server).fetch("guilds/1").await.unwrap();

    assert_eq!(body["name"], "g");
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guilds/1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Missing Access"})))
        .mount(&server)
        .await;

    let err = transport(&server).fetch("guilds/1").await.unwrap_err();

    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_fetcher_over_http_pages_members() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guilds/1/members"))
        .and(query_param("after", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"user": {"id": "1", "username": "a", "discriminator": "0001"}, "roles": []},
            {"user": {"id": "2", "username": "b", "discriminator": "0002", "bot": true}, "nick": "bee", "roles": ["9"]},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetchConfig {
        guild_id: Snowflake::from("1"),
        members_limit: 2,
        messages_limit: 100,
        reactions_limit: 100,
    };
    let fetcher = GuildFetcher::new(Arc::new(transport(&server)), config);

    let page = fetcher.members(&Snowflake::from("0")).await.unwrap();

    assert!(page.page_info.has_next_page);
    assert_eq!(page.page_info.end_cursor, Some(Snowflake::from("2")));
    assert!(page.results[1].user.bot);
    assert_eq!(page.results[1].nick.as_deref(), Some("bee"));
}
