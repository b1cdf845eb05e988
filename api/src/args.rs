use std::path::PathBuf;

use clap::Parser;
use symptomatic_core::domain::common::{
    DEFAULT_LLM_API_URL, DEFAULT_LLM_MODEL, LLMConfig, StorageConfig, SymptomaticConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "symptomatic", version, about = "LLM-backed symptom and diagnosis API")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list. Any origin is allowed when empty.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "disable-metrics", env = "DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "GPT_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "llm-api-url", env = "LLM_API_URL", default_value = DEFAULT_LLM_API_URL)]
    pub api_url: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,
}

impl std::fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmArgs")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "storage-path", env = "STORAGE_PATH", default_value = "storage.json")]
    pub path: PathBuf,
}

impl From<Args> for SymptomaticConfig {
    fn from(args: Args) -> Self {
        SymptomaticConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                api_url: args.llm.api_url,
                model: args.llm.model,
            },
            storage: StorageConfig {
                path: args.storage.path,
            },
        }
    }
}
