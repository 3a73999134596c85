use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let openai_api_key = std::env::var("OPENAI_KEY").context("OPENAI_KEY is not set")?;
        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let port = parse_port(std::env::var("PORT").ok())?;

        Ok(Self {
            database_url,
            openai_api_key,
            openai_base_url,
            port,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid PORT value: {}", value)),
        None => Ok(DEFAULT_PORT),
    }
}
