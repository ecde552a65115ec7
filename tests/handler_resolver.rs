mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_resolve_redirects_with_302() {
    let repo = common::create_test_repository();
    repo.seed("docs", "https://example.com/docs").await;
    let server = common::resolver_server(repo);

    let response = server.get("/docs").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/docs");
    common::assert_standard_headers(&response);
}

#[tokio::test]
async fn test_resolve_is_case_insensitive() {
    let repo = common::create_test_repository();
    repo.seed("my_link", "http://example.com/a").await;
    let server = common::resolver_server(repo);

    let response = server.get("/My_LINK").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "http://example.com/a");
}

#[tokio::test]
async fn test_resolve_leading_slashes_match_single_slash() {
    let repo = common::create_test_repository();
    repo.seed("foo", "https://example.com/foo").await;
    let server = common::resolver_server(repo);

    let single = server.get("/foo").await;
    let double = server.get("//foo").await;

    single.assert_status(StatusCode::FOUND);
    double.assert_status(StatusCode::FOUND);
    assert_eq!(single.header("location"), double.header("location"));
}

#[tokio::test]
async fn test_resolve_root_is_missing_path() {
    let server = common::resolver_server(common::create_test_repository());

    let response = server.get("/").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": 400, "message": "Missing Path" })
    );
}

#[tokio::test]
async fn test_resolve_invalid_path_format() {
    let server = common::resolver_server(common::create_test_repository());

    for path in ["/foo/bar", "/a_b_c", "/with-dash", "/docs/"] {
        let response = server.get(path).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": 400, "message": "Invalid Path Format" }),
            "path {path}"
        );
    }
}

#[tokio::test]
async fn test_resolve_not_found() {
    let server = common::resolver_server(common::create_test_repository());

    let response = server.get("/nothing_here").await;

    response.assert_status_not_found();
    common::assert_standard_headers(&response);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": 404, "message": "Not Found" })
    );
}

#[tokio::test]
async fn test_resolve_corrupt_stored_url_is_not_redirected() {
    let repo = common::create_test_repository();
    repo.seed("legacy", "javascript:alert(1)").await;
    repo.seed("broken", "not a url at all").await;
    let server = common::resolver_server(repo);

    for path in ["/legacy", "/broken"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get("location").is_none());
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": 500, "message": "Invalid URL in Database" })
        );
    }
}

#[tokio::test]
async fn test_resolver_has_no_management_routes() {
    let repo = common::create_test_repository();
    repo.seed("docs", "https://example.com/").await;
    let server = common::resolver_server(repo);

    // `/data/all` is a path to the resolver, and not a valid short name.
    server.get("/data/all").await.assert_status_bad_request();
}
