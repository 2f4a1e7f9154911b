use std::env;

use crate::error::CodicError;

pub const DEFAULT_BASE_URL: &str = "https://api.codic.jp";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, CodicError> {
        Self::resolve(env::var("CODIC_TOKEN").ok(), env::var("CODIC_BASE_URL").ok())
    }

    fn resolve(token: Option<String>, base_url: Option<String>) -> Result<Self, CodicError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                CodicError::Config("CODIC_TOKEN is not set (get a token at https://codic.jp)".into())
            })?;

        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Config { token, base_url })
    }
}
