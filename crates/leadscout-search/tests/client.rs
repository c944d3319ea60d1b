//! Integration tests for `SerperClient` and `fetch_leads` using wiremock HTTP mocks.

use chrono::NaiveDate;
use leadscout_core::RoleProfile;
use leadscout_search::{fetch_leads, SearchError, SerperClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SerperClient {
    SerperClient::with_base_url(
        Some("test-key"),
        5,
        "leadscout-test/0.1",
        &format!("{}/search", server.uri()),
    )
    .expect("client construction should not fail")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn search_returns_normalized_organic_results() {
    let server = MockServer::start().await;

    let body = json!({
        "searchParameters": { "q": "ignored", "type": "search" },
        "organic": [
            {
                "title": "Senior Data Analyst",
                "snippet": "5+ years,\n remote",
                "link": "https://a.co/1",
                "position": 1
            },
            {
                "title": "Sales Rep",
                "link": "https://b.co/2",
                "position": 2
            },
            {
                "snippet": "no title or link here",
                "position": 3
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "test-key"))
        .and(body_json(json!({ "q": "data analyst", "num": 25 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let leads = client
        .search("data analyst", 25)
        .await
        .expect("should parse organic results");

    assert_eq!(leads.len(), 3);
    assert_eq!(leads[0].title, "Senior Data Analyst");
    assert_eq!(leads[0].snippet, "5+ years, remote");
    assert_eq!(leads[0].url, "https://a.co/1");
    assert_eq!(leads[1].snippet, "");
    assert_eq!(leads[2].title, "");
    assert_eq!(leads[2].url, "");
}

#[tokio::test]
async fn missing_organic_key_is_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "searchParameters": {} })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let leads = client.search("anything", 25).await.expect("should succeed");

    assert!(leads.is_empty());
}

#[tokio::test]
async fn non_success_status_returns_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Unauthorized." })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.search("anything", 25).await;

    match result {
        Err(SearchError::UnexpectedStatus { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("Unauthorized"), "got body: {body}");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_returns_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.search("anything", 25).await;

    assert!(
        matches!(result, Err(SearchError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_leads_sends_profile_query() {
    let server = MockServer::start().await;

    let expected_query = r#"(site:lever.co OR site:greenhouse.io OR site:ashbyhq.com) ("Data Analyst" OR "Business Intelligence" OR "Data Analytics") "Remote""#;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({ "q": expected_query, "num": 50 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [{ "title": "BI Analyst", "snippet": "remote", "link": "https://c.co/3" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let leads = fetch_leads(&client, &RoleProfile::default(), 50, today()).await;

    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].url, "https://c.co/3");
}

#[tokio::test]
async fn fetch_leads_swallows_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let leads = fetch_leads(&client, &RoleProfile::default(), 25, today()).await;

    assert!(leads.is_empty());
}
