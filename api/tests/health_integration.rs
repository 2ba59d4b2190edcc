use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use ecoscan_api::application::http::server::http_server::{router, state};
use ecoscan_api::args::Args;

#[tokio::test]
async fn health_reports_ok() {
    let args = Args::parse_from([
        "ecoscan-api",
        "--llm-provider",
        "gemini",
        "--llm-api-key",
        "test-key",
    ]);
    let state = state(Arc::new(args)).await.expect("state should build");
    let server = TestServer::new(router(state).expect("router should build"))
        .expect("server should start");

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "status": "ok" }));
}
