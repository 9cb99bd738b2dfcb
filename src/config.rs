use std::env;
use thiserror::Error;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
    pub ai: AiConfig,
}

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            api_key: None,
            api_url: DEFAULT_AI_API_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        Self::get_opt(key).ok_or(ConfigError::Missing(key))
    }

    fn get_opt(key: &str) -> Option<String> {
        env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let port = match Self::get_opt("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => 8080,
        };

        Ok(EnvConfig {
            host: Self::get_opt("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            db_url: Self::get_env("DATABASE_URL")?,
            allowed_origins: Self::get_opt("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            ai: AiConfig {
                api_key: Self::get_opt("AI_API_KEY"),
                api_url: Self::get_opt("AI_API_URL").unwrap_or_else(|| DEFAULT_AI_API_URL.to_string()),
                model: Self::get_opt("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .map(str::to_string)
        .collect()
}
