use chrono::Utc;
use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    receipt_analysis::{
        entities::{AnalysisRecord, ReceiptAnalysisOutcome, REQUIRED_FIELDS},
        extract::{extract_json_from_response, require_fields},
        ports::{LlmClient, ReceiptAnalysisService},
        prompt::RECEIPT_ANALYSIS_PROMPT,
        schema::receipt_analysis_schema,
        value_objects::{AnalyzeReceiptInput, ScoreBand},
    },
};

impl<L> ReceiptAnalysisService for Service<L>
where
    L: LlmClient,
{
    async fn analyze_receipt(
        &self,
        input: AnalyzeReceiptInput,
    ) -> Result<ReceiptAnalysisOutcome, CoreError> {
        // 1. Reject unusable input before spending a provider call
        if input.image.data.is_empty() {
            return Err(CoreError::Invalid("image payload is empty".to_string()));
        }

        // 2. Response schema handed to the provider
        let response_schema = receipt_analysis_schema();

        // 3. Call the model, retrying transient failures
        let raw_response = self
            .retry
            .run(|| {
                self.llm_client.generate_with_image(
                    RECEIPT_ANALYSIS_PROMPT.to_string(),
                    input.image.clone(),
                    response_schema.clone(),
                )
            })
            .await?;

        // 4. Recover and validate the record
        let record = match extract_json_from_response(&raw_response) {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(raw = %raw_response, "failed to extract analysis from model response");
                return Err(err);
            }
        };

        require_fields(&record, REQUIRED_FIELDS)?;

        let record: AnalysisRecord = serde_json::from_value(Value::Object(record)).map_err(|e| {
            tracing::error!("model response does not match the analysis shape: {}", e);
            CoreError::ExtractionFailed {
                raw: raw_response.clone(),
            }
        })?;

        // 5. Attach presentation metadata
        let band = ScoreBand::from_score(record.score);

        Ok(ReceiptAnalysisOutcome {
            record,
            band,
            model: self.model_label.clone(),
            raw_response: Some(raw_response),
            analyzed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        common::retry::RetryPolicy,
        receipt_analysis::{
            ports::MockLlmClient,
            value_objects::{ImageMime, ReceiptImage},
        },
    };

    use super::*;

    fn service_with(llm: MockLlmClient) -> Service<MockLlmClient> {
        Service::new(llm, "gemini-test".to_string(), RetryPolicy::default())
    }

    fn input() -> AnalyzeReceiptInput {
        AnalyzeReceiptInput {
            image: ReceiptImage {
                data: vec![0xFF, 0xD8, 0xFF, 0xE0],
                mime: ImageMime::Jpeg,
            },
        }
    }

    #[tokio::test]
    async fn fenced_reply_produces_a_validated_outcome() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async {
                Ok("```json\n{\"score\": 7, \"dominant_category\": \"red_meat\", \"insights\": [\"buy less beef\"]}\n```"
                    .to_string())
            })
        });

        let outcome = service_with(llm).analyze_receipt(input()).await.unwrap();

        assert_eq!(outcome.record.score, 7.0);
        assert_eq!(outcome.record.dominant_category, "red_meat");
        assert_eq!(outcome.record.insights, vec!["buy less beef".to_string()]);
        assert_eq!(outcome.band, ScoreBand::High);
        assert_eq!(outcome.model, "gemini-test");
        assert!(outcome.raw_response.is_some());
    }

    #[tokio::test]
    async fn unparseable_reply_surfaces_extraction_failure() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok("I could not read the receipt.".to_string()) }));

        let result = service_with(llm).analyze_receipt(input()).await;

        assert!(matches!(result, Err(CoreError::ExtractionFailed { .. })));
    }

    #[tokio::test]
    async fn reply_missing_a_required_field_is_rejected() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok("{\"score\": 4}".to_string()) }));

        let result = service_with(llm).analyze_receipt(input()).await;

        match result {
            Err(CoreError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["dominant_category".to_string()]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn type_mismatched_record_is_an_extraction_failure() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image().times(1).returning(|_, _, _| {
            Box::pin(async { Ok("{\"score\": \"seven\", \"dominant_category\": \"dairy\"}".to_string()) })
        });

        let result = service_with(llm).analyze_receipt(input()).await;

        assert!(matches!(result, Err(CoreError::ExtractionFailed { .. })));
    }

    #[tokio::test]
    async fn empty_image_is_rejected_without_a_provider_call() {
        let llm = MockLlmClient::new();
        let empty = AnalyzeReceiptInput {
            image: ReceiptImage {
                data: Vec::new(),
                mime: ImageMime::Png,
            },
        };

        let result = service_with(llm).analyze_receipt(empty).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn transient_provider_failure_is_retried() {
        let mut seq = mockall::Sequence::new();
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Box::pin(async { Err(CoreError::ProviderUnavailable("timeout".to_string())) }));
        llm.expect_generate_with_image()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Box::pin(async { Ok("{\"score\": 2, \"dominant_category\": \"produce\"}".to_string()) })
            });

        let outcome = service_with(llm).analyze_receipt(input()).await.unwrap();

        assert_eq!(outcome.band, ScoreBand::Low);
    }

    #[tokio::test]
    async fn missing_api_key_is_terminal() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Err(CoreError::ProviderAuthMissing) }));

        let result = service_with(llm).analyze_receipt(input()).await;

        assert!(matches!(result, Err(CoreError::ProviderAuthMissing)));
    }
}
