use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, receipt_analysis::router::ReceiptAnalysisApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoScan API",
        description = "Carbon-footprint analysis of shopping receipts via hosted multimodal models"
    ),
    tags(
        (name = "receipt-analysis", description = "Receipt analysis endpoints"),
        (name = "health", description = "Service health")
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseApiDoc::openapi();
        doc.merge(ReceiptAnalysisApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
