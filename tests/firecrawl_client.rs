use mockito::Matcher;
use serde_json::json;

use firecrawl_tools::client::types::{
    CrawlRequest, MapRequest, ScrapeRequest, SearchRequest,
};
use firecrawl_tools::{Error, FirecrawlApi, FirecrawlClient, FirecrawlConfig, JobStatus};

fn config_for(server: &mockito::ServerGuard) -> FirecrawlConfig {
    let mut config = FirecrawlConfig::new("test-key");
    config.base_url = Some(server.url());
    config
}

#[tokio::test]
async fn scrape_sends_auth_and_parses_data() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/scrape")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "url": "https://example.com",
            "formats": ["markdown"],
            "onlyMainContent": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "data": {
                    "markdown": "# Example Domain",
                    "links": ["https://www.iana.org/domains"],
                    "metadata": { "title": "Example", "sourceURL": "https://example.com", "statusCode": 200 }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = FirecrawlClient::new(&config_for(&server)).unwrap();
    let data = client
        .scrape(ScrapeRequest {
            url: "https://example.com".to_string(),
            formats: vec!["markdown".to_string()],
            only_main_content: Some(true),
            wait_for: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(data.markdown.as_deref(), Some("# Example Domain"));
    let metadata = data.metadata.unwrap();
    assert_eq!(metadata.source_url.as_deref(), Some("https://example.com"));
    assert_eq!(metadata.status_code, Some(200));
}

#[tokio::test]
async fn search_serializes_scrape_options_camel_case() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/search")
        .match_body(Matcher::PartialJson(json!({
            "query": "rust",
            "limit": 3,
            "scrapeOptions": { "formats": ["markdown"], "onlyMainContent": true }
        })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [{ "url": "https://example.com", "title": "Example" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = FirecrawlClient::new(&config_for(&server)).unwrap();
    let hits = client
        .search(SearchRequest {
            query: "rust".to_string(),
            limit: Some(3),
            scrape_options: Some(firecrawl_tools::client::types::ScrapeOptions {
                formats: vec!["markdown".to_string()],
                only_main_content: Some(true),
            }),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://example.com");
}

#[tokio::test]
async fn map_parses_the_link_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/map")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "links": ["https://example.com/a", "https://example.com/b"]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = FirecrawlClient::new(&config_for(&server)).unwrap();
    let links = client
        .map_site(MapRequest {
            url: "https://example.com".to_string(),
            search: None,
            include_subdomains: None,
            limit: None,
        })
        .await
        .unwrap();

    assert_eq!(links, vec!["https://example.com/a", "https://example.com/b"]);
}

#[tokio::test]
async fn http_failure_becomes_a_remote_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/scrape")
        .with_status(502)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = FirecrawlClient::new(&config_for(&server)).unwrap();
    let err = client
        .scrape(ScrapeRequest {
            url: "https://example.com".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        Error::Remote(message) => {
            assert!(message.contains("502"));
            assert!(message.contains("upstream unavailable"));
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_reported_failure_becomes_a_remote_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/map")
        .with_status(200)
        .with_body(json!({ "success": false, "error": "invalid URL" }).to_string())
        .create_async()
        .await;

    let client = FirecrawlClient::new(&config_for(&server)).unwrap();
    let err = client
        .map_site(MapRequest {
            url: "https://example.com".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        Error::Remote(message) => assert!(message.contains("invalid URL")),
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn crawl_submit_and_status_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _submit = server
        .mock("POST", "/v1/crawl")
        .match_body(Matcher::PartialJson(json!({
            "url": "https://example.com",
            "maxDepth": 2,
            "excludePaths": ["/blog/*"],
            "deduplicateSimilarURLs": true
        })))
        .with_status(200)
        .with_body(json!({ "success": true, "id": "abc-123" }).to_string())
        .create_async()
        .await;
    let _status = server
        .mock("GET", "/v1/crawl/abc-123")
        .with_status(200)
        .with_body(
            json!({
                "status": "scraping",
                "total": 10,
                "completed": 4,
                "creditsUsed": 4,
                "data": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = FirecrawlClient::new(&config_for(&server)).unwrap();
    let handle = client
        .start_crawl(CrawlRequest {
            url: "https://example.com".to_string(),
            max_depth: Some(2),
            exclude_paths: vec!["/blog/*".to_string()],
            deduplicate_similar_urls: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(handle.id, "abc-123");

    let snapshot = client.crawl_status(&handle.id).await.unwrap();
    assert_eq!(snapshot.status, JobStatus::Running);
    assert_eq!(snapshot.total, Some(10));
    assert_eq!(snapshot.completed, Some(4));
    assert_eq!(snapshot.credits_used, Some(4));
}

#[test]
fn blank_api_key_fails_before_any_request() {
    let config = FirecrawlConfig::new("   ");
    let err = FirecrawlClient::new(&config).err().expect("config error");
    match err {
        Error::Config(message) => assert!(message.contains("API key")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn from_env_requires_the_api_key() {
    std::env::remove_var(firecrawl_tools::config::API_KEY_ENV);
    match FirecrawlConfig::from_env() {
        Err(Error::Config(message)) => {
            assert!(message.contains(firecrawl_tools::config::API_KEY_ENV));
        }
        other => panic!("expected Config error, got {other:?}"),
    }

    std::env::set_var(firecrawl_tools::config::API_KEY_ENV, "fc-test");
    let config = FirecrawlConfig::from_env().unwrap();
    assert_eq!(config.api_key, "fc-test");
    assert_eq!(config.poll_interval_secs, 2);
    std::env::remove_var(firecrawl_tools::config::API_KEY_ENV);
}
