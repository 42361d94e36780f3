//! Relay configuration -- parsed once at startup from an optional TOML file
//! plus environment variables (`AUTH_TOKEN`, `OPENAI_API_KEY`, ...), then
//! handed to the server state. Nothing reads ambient process state at
//! request time.

use anyhow::{bail, Result};
use serde::Deserialize;

/// Default chat-completions endpoint when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret compared against the `Authorization: Bearer` header
    pub auth_token: String,

    /// API key for the upstream chat-completion provider
    pub openai_api_key: String,

    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub openai_endpoint: String,

    /// Model identifier sent with every upstream request
    pub model: String,

    /// Fixed instructional prompt sent as the system message
    pub system_prompt: String,

    /// Bounds the outbound call duration; no timeout when absent
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from an optional TOML file, with environment
    /// variables taking precedence.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        let cfg: Config = builder
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("auth_token", &self.auth_token),
            ("openai_api_key", &self.openai_api_key),
            ("model", &self.model),
            ("system_prompt", &self.system_prompt),
        ] {
            if value.trim().is_empty() {
                bail!("config field `{field}` must be non-empty");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            host: default_host(),
            port: default_port(),
            auth_token: "secret".to_string(),
            openai_api_key: "sk-test".to_string(),
            openai_endpoint: default_endpoint(),
            model: "gpt-4o".to_string(),
            system_prompt: "You describe images.".to_string(),
            request_timeout_ms: None,
        }
    }

    #[test]
    fn accepts_complete_config() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn rejects_empty_required_fields() {
        let mut cfg = base();
        cfg.auth_token.clear();
        assert!(cfg.validate().is_err());

        let mut cfg = base();
        cfg.system_prompt = "   ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn fills_defaults_from_minimal_toml() {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                auth_token = "secret"
                openai_api_key = "sk-test"
                model = "gpt-4o"
                system_prompt = "You describe images."
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.openai_endpoint, DEFAULT_ENDPOINT);
        assert!(cfg.request_timeout_ms.is_none());
    }
}
