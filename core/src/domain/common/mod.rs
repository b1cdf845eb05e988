use std::path::PathBuf;

pub mod entities;
pub mod services;

pub const DEFAULT_LLM_API_URL: &str = "https://integrate.api.nvidia.com/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "meta/llama-3.1-70b-instruct";

#[derive(Clone, Debug)]
pub struct SymptomaticConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub path: PathBuf,
}
