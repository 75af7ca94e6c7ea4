use serde_json::json;
use tree_fetch::{ContentSource, ContentsApi, Entry, FetchError, RepoCoordinates};
use tree_fetch_github::{GitHubClientConfig, GitHubContentsClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubContentsClient {
    let mut config = GitHubClientConfig::new(
        RepoCoordinates::new("test-owner", "test-repo").with_branch("develop"),
        "test-token",
    );
    config.api_base_url = Some(server.uri());
    GitHubContentsClient::new(config).unwrap()
}

#[tokio::test]
async fn list_sends_auth_accept_and_ref() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/src"))
        .and(query_param("ref", "develop"))
        .and(header("authorization", "token test-token"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "dir", "path": "src/bin"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).list("src").await.unwrap();

    assert_eq!(entries, vec![Entry::Directory { path: "src/bin".into() }]);
}

#[tokio::test]
async fn list_root_uses_bare_contents_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).list("").await.unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn list_wraps_single_file_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "file",
            "path": "README.md",
            "download_url": null,
            "content": "aGVsbG8=\n",
            "encoding": "base64"
        })))
        .mount(&server)
        .await;

    let entries = client_for(&server).list("README.md").await.unwrap();

    assert_eq!(
        entries,
        vec![Entry::File {
            path: "README.md".into(),
            source: Some(ContentSource::InlineBase64("aGVsbG8=\n".into())),
        }]
    );
}

#[tokio::test]
async fn list_classifies_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let result = client_for(&server).list("missing").await;

    assert!(matches!(result, Err(FetchError::NotFound { ref path }) if path == "missing"));
}

#[tokio::test]
async fn list_classifies_auth_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/private"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client_for(&server).list("private").await;

    assert!(matches!(result, Err(FetchError::Auth { status: 403 })));
}

#[tokio::test]
async fn list_classifies_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/src"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = client_for(&server).list("src").await;

    assert!(matches!(result, Err(FetchError::Http { status: 502, .. })));
}

#[tokio::test]
async fn list_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/src"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).list("src").await;

    assert!(matches!(result, Err(FetchError::MalformedResponse { .. })));
}

#[tokio::test]
async fn list_reports_connection_failure_as_transport() {
    let mut config = GitHubClientConfig::new(RepoCoordinates::new("o", "r"), "t");
    // Nothing listens on the discard port
    config.api_base_url = Some("http://127.0.0.1:9".into());
    let client = GitHubContentsClient::new(config).unwrap();

    let result = client.list("").await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn download_sends_token_and_returns_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw/test-owner/test-repo/develop/notes.md"))
        .and(header("authorization", "token test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Notes\n\nline two\n"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/raw/test-owner/test-repo/develop/notes.md", server.uri());
    let body = client_for(&server).download(&url).await.unwrap();

    assert_eq!(body, "# Notes\n\nline two\n");
}

#[tokio::test]
async fn download_keeps_byte_order_mark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw/bom.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"\xEF\xBB\xBFhello".to_vec(), "text/plain; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/raw/bom.txt", server.uri());
    let body = client_for(&server).download(&url).await.unwrap();

    assert_eq!(body, "\u{feff}hello");
}

#[tokio::test]
async fn download_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw/gone.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/raw/gone.txt", server.uri());
    let result = client_for(&server).download(&url).await;

    assert!(matches!(result, Err(FetchError::Http { status: 500, .. })));
}
