use clap::Parser;
use ecoscan_core::domain::common::{retry::RetryPolicy, EcoscanConfig, LlmConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "ecoscan-api", about = "Carbon-footprint receipt analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    /// Include the provider's raw reply in analysis responses.
    #[arg(long, env = "ECOSCAN_DEBUG_RAW_RESPONSE", default_value_t = false)]
    pub debug_raw_response: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Hosted model provider: `gemini` or `perplexity`.
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "gemini")]
    pub provider: String,

    /// Provider API key; GEMINI_API_KEY / PERPLEXITY_API_KEY are consulted
    /// when this is not set.
    #[arg(long = "llm-api-key", env = "LLM_API_KEY")]
    pub api_key: Option<String>,

    /// Model override; defaults are fixed per provider.
    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,
}

impl From<Args> for EcoscanConfig {
    fn from(args: Args) -> Self {
        EcoscanConfig {
            llm: LlmConfig {
                provider: args.llm.provider,
                api_key: args.llm.api_key,
                model: args.llm.model,
            },
            retry: RetryPolicy::default(),
        }
    }
}
