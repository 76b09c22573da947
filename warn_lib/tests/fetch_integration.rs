//! Integration tests for FetchClient with wiremock.

use reqwest::StatusCode;
use warn_lib::fetch::DEFAULT_USER_AGENT;
use warn_lib::{FetchClient, FetchError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_returns_body_and_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warn.html"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let body = client
        .get(&format!("{}/warn.html", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<table></table>");
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FetchClient::with_user_agent("test-agent/1.0").unwrap();
    let body = client.get(&mock_server.uri()).await.unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn not_found_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2030/default.htm"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let url = format!("{}/2030/default.htm", mock_server.uri());
    let err = client.get(&url).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    match err {
        FetchError::HttpStatus { status, url: failed } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(failed, url);
        }
        other => panic!("Expected HttpStatus, got: {:?}", other),
    }
}

#[tokio::test]
async fn server_error_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let err = client.get_utf8(&mock_server.uri()).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn get_honors_declared_charset() {
    let mock_server = MockServer::start().await;

    // "Café" in ISO-8859-1
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0x43, 0x61, 0x66, 0xE9])
                .insert_header("content-type", "text/html; charset=iso-8859-1"),
        )
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let body = client.get(&mock_server.uri()).await.unwrap();
    assert_eq!(body, "Café");
}

#[tokio::test]
async fn get_utf8_ignores_declared_charset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes("Montréal".as_bytes().to_vec())
                .insert_header("content-type", "text/html; charset=iso-8859-1"),
        )
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let body = client.get_utf8(&mock_server.uri()).await.unwrap();
    assert_eq!(body, "Montréal");
}

#[tokio::test]
async fn post_form_sends_urlencoded_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/SearchWARN.aspx"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("__EVENTARGUMENT=Page%242"))
        .and(body_string_contains("__VIEWSTATE=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("page two"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FetchClient::new().unwrap();
    let fields = vec![
        ("__EVENTARGUMENT".to_string(), "Page$2".to_string()),
        ("__VIEWSTATE".to_string(), "abc".to_string()),
    ];
    let body = client
        .post_form(&format!("{}/SearchWARN.aspx", mock_server.uri()), &fields)
        .await
        .unwrap();
    assert_eq!(body, "page two");
}
