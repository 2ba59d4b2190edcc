use crate::{
    domain::common::{services::Service, EcoscanConfig, ProviderKind},
    infrastructure::llm::{GeminiLlmClient, LlmProvider, PerplexityLlmClient},
};

pub type EcoscanService = Service<LlmProvider>;

/// Assembles the analysis service from resolved configuration.
pub fn create_service(config: EcoscanConfig) -> Result<EcoscanService, anyhow::Error> {
    let provider: ProviderKind = config.llm.provider.parse()?;

    let api_key = resolve_api_key(config.llm.api_key, provider);
    if api_key.is_none() {
        tracing::warn!(
            "no provider API key configured; analysis requests will be rejected until one is set"
        );
    }

    let model = config
        .llm
        .model
        .unwrap_or_else(|| provider.default_model().to_string());

    let client = match provider {
        ProviderKind::Gemini => LlmProvider::Gemini(GeminiLlmClient::new(api_key, model.clone())),
        ProviderKind::Perplexity => {
            LlmProvider::Perplexity(PerplexityLlmClient::new(api_key, model.clone()))
        }
    };

    Ok(Service::new(client, model, config.retry))
}

/// An explicit value wins, then the provider's conventional environment
/// variable, else absent.
fn resolve_api_key(explicit: Option<String>, provider: ProviderKind) -> Option<String> {
    explicit
        .filter(|key| !key.trim().is_empty())
        .or_else(|| std::env::var(provider.api_key_env()).ok())
        .filter(|key| !key.trim().is_empty())
}
