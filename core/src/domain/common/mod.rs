use std::str::FromStr;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod retry;
pub mod services;

#[derive(Clone, Debug)]
pub struct EcoscanConfig {
    pub llm: LlmConfig,
    pub retry: retry::RetryPolicy,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub provider: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

/// Hosted model providers this service can talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Perplexity,
}

impl ProviderKind {
    /// Conventional environment variable consulted when no explicit key is
    /// configured.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Perplexity => "PERPLEXITY_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-2.0-flash",
            ProviderKind::Perplexity => "sonar",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "perplexity" => Ok(ProviderKind::Perplexity),
            other => Err(CoreError::Invalid(format!("unknown LLM provider: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parses_case_insensitively() {
        assert_eq!(
            "gemini".parse::<ProviderKind>().unwrap(),
            ProviderKind::Gemini
        );
        assert_eq!(
            " Perplexity ".parse::<ProviderKind>().unwrap(),
            ProviderKind::Perplexity
        );
        assert!("claude".parse::<ProviderKind>().is_err());
    }
}
