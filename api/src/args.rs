use clap::{Args as ClapArgs, Parser};
use smartchef_core::domain::common::{GenerationConfig, LLMConfig, SmartChefConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "smartchef-api", version, about = "SmartChef recipe generation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value_t = String::new())]
    pub root_path: String,

    /// Comma separated list of origins; `*` allows any origin without credentials.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    /// Shared secret expected in the `api-key` header.
    #[arg(long = "api-auth-key", env = "API_AUTH_KEY", hide_env_values = true)]
    pub api_auth_key: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(
        long = "openai-model",
        env = "OPENAI_MODEL",
        default_value = "gpt-4o-mini-2024-07-18"
    )]
    pub openai_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long = "llm-max-retries", env = "LLM_MAX_RETRIES", default_value_t = 1)]
    pub max_retries: u32,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.6)]
    pub temperature: f32,

    #[arg(
        long = "llm-frequency-penalty",
        env = "LLM_FREQUENCY_PENALTY",
        default_value_t = 0.1
    )]
    pub frequency_penalty: f32,

    #[arg(
        long = "llm-presence-penalty",
        env = "LLM_PRESENCE_PENALTY",
        default_value_t = 0.1
    )]
    pub presence_penalty: f32,

    /// Number of recipes requested from the model per call.
    #[arg(long = "recipe-count", env = "RECIPE_COUNT", default_value_t = 5)]
    pub recipe_count: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for SmartChefConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                base_url: args.llm.openai_base_url,
                timeout_secs: args.llm.timeout_secs,
                max_retries: args.llm.max_retries,
            },
            generation: GenerationConfig {
                model: args.llm.openai_model,
                temperature: args.llm.temperature,
                frequency_penalty: args.llm.frequency_penalty,
                presence_penalty: args.llm.presence_penalty,
                recipe_count: args.llm.recipe_count,
            },
        }
    }
}
