use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    receipt_analysis::{
        entities::ReceiptAnalysisOutcome,
        value_objects::{AnalyzeReceiptInput, ReceiptImage},
    },
};

/// LLM client trait for calling hosted multimodal models
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ReceiptImage,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for receipt analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait ReceiptAnalysisService: Send + Sync {
    fn analyze_receipt(
        &self,
        input: AnalyzeReceiptInput,
    ) -> impl Future<Output = Result<ReceiptAnalysisOutcome, CoreError>> + Send;
}
