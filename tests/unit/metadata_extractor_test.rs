//! Unit tests for metadata extraction, the metadata endpoint client and the
//! image probe.
//!
//! HTML parsing is tested directly; network behaviour runs against a local
//! wiremock server standing in for the upstream page or the endpoint.

use linkstack::services::image_probe::{HttpImageProbe, ImageProbe};
use linkstack::services::metadata_client::{EndpointClient, MetadataSource, FUNCTION_PATH};
use linkstack::services::metadata_extractor::{extract_metadata, MetadataExtractor};
use linkstack::types::bookmark::PageMetadata;
use linkstack::types::errors::ExtractError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXAMPLE_PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <title>Example</title>
    <meta name="description" content="desc">
    <meta property="og:image" content="https://example.com/og.png">
    <meta name="twitter:image" content="https://example.com/tw.png">
  </head>
  <body><p>Hello</p></body>
</html>"#;

// ─── extract_metadata ───

#[test]
fn test_extracts_all_fields() {
    let meta = extract_metadata(EXAMPLE_PAGE);
    assert_eq!(
        meta,
        PageMetadata {
            page_title: "Example".to_string(),
            meta_description: Some("desc".to_string()),
            preview_img: Some("https://example.com/og.png".to_string()),
        }
    );
}

#[test]
fn test_twitter_image_used_without_og_image() {
    let html = r#"<html><head><title>T</title>
        <meta name="twitter:image" content="https://example.com/tw.png"></head></html>"#;
    let meta = extract_metadata(html);
    assert_eq!(meta.preview_img.as_deref(), Some("https://example.com/tw.png"));
}

#[test]
fn test_no_image_tags_gives_none() {
    let html = "<html><head><title>T</title></head></html>";
    let meta = extract_metadata(html);
    assert_eq!(meta.preview_img, None);
    assert_eq!(meta.meta_description, None);
}

#[test]
fn test_only_first_title_is_used() {
    let html = "<html><head><title>First</title><title>Second</title></head></html>";
    assert_eq!(extract_metadata(html).page_title, "First");
}

#[test]
fn test_malformed_html_still_extracts() {
    let html = "<title>Broken<meta name=description content=loose>";
    let meta = extract_metadata(html);
    assert!(meta.page_title.starts_with("Broken"));
}

#[test]
fn test_metadata_serializes_with_wire_names() {
    let value = serde_json::to_value(extract_metadata(EXAMPLE_PAGE)).unwrap();
    assert_eq!(
        value,
        json!({
            "pageTitle": "Example",
            "metaDescription": "desc",
            "previewImg": "https://example.com/og.png"
        })
    );
}

// ─── MetadataExtractor::fetch_metadata ───

#[tokio::test]
async fn test_fetch_metadata_from_upstream_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXAMPLE_PAGE))
        .mount(&server)
        .await;

    let extractor = MetadataExtractor::with_client(reqwest::Client::new());
    let meta = extractor
        .fetch_metadata(&format!("{}/article", server.uri()))
        .await
        .unwrap()
        .expect("2xx upstream should yield metadata");

    assert_eq!(meta.page_title, "Example");
    assert_eq!(meta.preview_img.as_deref(), Some("https://example.com/og.png"));
}

#[tokio::test]
async fn test_fetch_metadata_non_success_status_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(&server)
        .await;

    let extractor = MetadataExtractor::with_client(reqwest::Client::new());
    let result = extractor
        .fetch_metadata(&format!("{}/missing", server.uri()))
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_fetch_metadata_invalid_url() {
    let extractor = MetadataExtractor::with_client(reqwest::Client::new());
    let result = extractor.fetch_metadata("not a url").await;
    assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_fetch_metadata_unreachable_host_is_network_error() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let extractor = MetadataExtractor::with_client(reqwest::Client::new());
    let result = extractor.fetch_metadata("http://127.0.0.1:9/").await;
    assert!(matches!(result, Err(ExtractError::NetworkError(_))));
}

// ─── EndpointClient ───

#[test]
fn test_endpoint_client_joins_function_path() {
    let client = EndpointClient::new(reqwest::Client::new(), "https://linkstack.example/").unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        format!("https://linkstack.example/{}", FUNCTION_PATH)
    );
}

#[test]
fn test_endpoint_client_rejects_bad_base() {
    let result = EndpointClient::new(reqwest::Client::new(), "::nope");
    assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_endpoint_client_passes_url_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", FUNCTION_PATH)))
        .and(query_param("url", "https://example.com/a?b=c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pageTitle": "Example",
            "metaDescription": "desc",
            "previewImg": "https://example.com/og.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EndpointClient::new(reqwest::Client::new(), &server.uri()).unwrap();
    let meta = client
        .lookup("https://example.com/a?b=c")
        .await
        .unwrap()
        .expect("200 should yield metadata");
    assert_eq!(meta.page_title, "Example");
    assert_eq!(meta.meta_description.as_deref(), Some("desc"));
}

#[tokio::test]
async fn test_endpoint_client_no_content_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", FUNCTION_PATH)))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = EndpointClient::new(reqwest::Client::new(), &server.uri()).unwrap();
    assert_eq!(client.lookup("https://example.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_endpoint_client_bad_body_is_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", FUNCTION_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = EndpointClient::new(reqwest::Client::new(), &server.uri()).unwrap();
    let result = client.lookup("https://example.com").await;
    assert!(matches!(result, Err(ExtractError::BodyError(_))));
}

// ─── HttpImageProbe ───

async fn probe_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/og.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0x89, b'P', b'N', b'G'], "image/png"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_image_probe_outcomes() {
    let server = probe_server().await;
    let probe = HttpImageProbe::new(reqwest::Client::new());

    assert!(probe.loads(Some(&format!("{}/og.png", server.uri()))).await);
    assert!(!probe.loads(Some(&format!("{}/page.html", server.uri()))).await);
    assert!(!probe.loads(Some(&format!("{}/gone.png", server.uri()))).await);
    assert!(!probe.loads(Some("/relative/og.png")).await);
    assert!(!probe.loads(None).await);
}
