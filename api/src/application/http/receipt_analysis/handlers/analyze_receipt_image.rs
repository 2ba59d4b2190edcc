use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use ecoscan_core::domain::receipt_analysis::{
    entities::ReceiptAnalysisOutcome,
    ports::ReceiptAnalysisService,
    value_objects::{AnalyzeReceiptInput, ImageMime, ReceiptImage},
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReceiptResponse {
    pub data: ReceiptAnalysisOutcome,
}

#[utoipa::path(
    post,
    path = "/receipt-analysis/image",
    tag = "receipt-analysis",
    summary = "Analyze a shopping receipt image",
    description = "Forwards the receipt image to the configured vision model and returns its carbon-footprint assessment",
    responses(
        (status = 200, body = AnalyzeReceiptResponse)
    ),
)]
pub async fn analyze_receipt_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeReceiptResponse>, ApiError> {
    let mut image: Option<ReceiptImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                let mime = content_type
                    .as_deref()
                    .and_then(ImageMime::from_content_type)
                    .ok_or_else(|| {
                        ApiError::BadRequest("Image must be a JPEG or PNG upload".to_string())
                    })?;

                image = Some(ReceiptImage {
                    data: data.to_vec(),
                    mime,
                });
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let mut outcome = state
        .service
        .analyze_receipt(AnalyzeReceiptInput { image })
        .await
        .map_err(ApiError::from)?;

    if !state.args.debug_raw_response {
        outcome.raw_response = None;
    }

    Ok(Response::OK(AnalyzeReceiptResponse { data: outcome }))
}
