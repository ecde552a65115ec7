#![allow(dead_code)]

use axum_test::TestServer;
use link_registry::api::routes::{management_app, resolver_router};
use link_registry::infrastructure::persistence::InMemoryLinkRepository;
use link_registry::state::{ManagementState, ResolverState};
use std::sync::Arc;

pub const API_TOKEN: &str = "test-api-token";
pub const RESOLVER_HOST: &str = "go.example.com";

pub fn bearer() -> String {
    format!("Bearer {API_TOKEN}")
}

pub fn create_test_repository() -> Arc<InMemoryLinkRepository> {
    Arc::new(InMemoryLinkRepository::new())
}

pub fn management_server(repo: Arc<InMemoryLinkRepository>) -> TestServer {
    let state = ManagementState::with_settings(repo, API_TOKEN, RESOLVER_HOST);
    TestServer::new(management_app(state)).unwrap()
}

pub fn resolver_server(repo: Arc<InMemoryLinkRepository>) -> TestServer {
    let state = ResolverState::new(repo);
    TestServer::new(resolver_router(state)).unwrap()
}

/// Management and resolver servers sharing one store.
pub fn create_test_servers() -> (TestServer, TestServer, Arc<InMemoryLinkRepository>) {
    let repo = create_test_repository();
    (
        management_server(repo.clone()),
        resolver_server(repo.clone()),
        repo,
    )
}

pub fn assert_standard_headers(response: &axum_test::TestResponse) {
    assert_eq!(response.header("cache-control"), "no-store");
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
}
