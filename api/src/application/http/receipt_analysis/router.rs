use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

use super::handlers::analyze_receipt_image::{__path_analyze_receipt_image, analyze_receipt_image};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_receipt_image))]
pub struct ReceiptAnalysisApiDoc;

pub fn receipt_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/receipt-analysis/image",
            state.args.server.root_path
        ),
        post(analyze_receipt_image),
    )
}
