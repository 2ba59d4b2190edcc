use crate::domain::{common::retry::RetryPolicy, receipt_analysis::ports::LlmClient};

/// Carrier for the domain service implementations.
#[derive(Debug, Clone)]
pub struct Service<L>
where
    L: LlmClient,
{
    pub(crate) llm_client: L,
    pub(crate) model_label: String,
    pub(crate) retry: RetryPolicy,
}

impl<L> Service<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: L, model_label: String, retry: RetryPolicy) -> Self {
        Self {
            llm_client,
            model_label,
            retry,
        }
    }
}
