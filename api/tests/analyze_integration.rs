use std::sync::Arc;

use axum_test::multipart::MultipartForm;
use axum_test::TestServer;
use clap::Parser;
use ecoscan_api::application::http::server::http_server::{router, state};
use ecoscan_api::args::Args;

#[tokio::test]
async fn analyze_without_an_image_is_rejected() {
    let args = Args::parse_from([
        "ecoscan-api",
        "--llm-provider",
        "perplexity",
        "--llm-api-key",
        "test-key",
    ]);
    let state = state(Arc::new(args)).await.expect("state should build");
    let server = TestServer::new(router(state).expect("router should build"))
        .expect("server should start");

    let response = server
        .post("/receipt-analysis/image")
        .multipart(MultipartForm::new().add_text("note", "no image here"))
        .await;

    response.assert_status_bad_request();
}
