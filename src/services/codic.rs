use crate::config::Config;
use crate::error::CodicError;
use crate::model::synonym::SynonymItem;
use crate::model::translation::TranslationResult;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

const TRANSLATE_PATH: &str = "/v1/engine/translate.json";
const LOOKUP_PATH: &str = "/v1/ced/lookup.json";

pub struct CodicClient {
    http: Client,
    config: Config,
}

impl CodicClient {
    pub fn new(config: Config) -> Result<Self, CodicError> {
        // No timeout override: the transport default applies.
        let http = Client::builder().build().map_err(CodicError::Request)?;
        Ok(CodicClient { http, config })
    }

    /// Forward lookup: Japanese phrase to an English identifier name.
    pub fn translate(&self, source: &str) -> Result<Vec<TranslationResult>, CodicError> {
        self.get(TRANSLATE_PATH, &[("text", source)])
    }

    /// Reverse lookup: one English word to its Japanese gloss. Fetches a
    /// single entry per call; synonym mode loops over candidates one
    /// request at a time.
    pub fn lookup(&self, word: &str) -> Result<Vec<SynonymItem>, CodicError> {
        self.get(LOOKUP_PATH, &[("query", word), ("count", "1")])
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CodicError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "codic request");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.config.token)
            .send()?;

        let status = resp.status();
        // Read as text first so a failed decode still has the raw body.
        let body = resp.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "codic response");

        if !status.is_success() {
            return Err(CodicError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Codic reports failures as `{"errors": [{"message": ...}]}`; fall back to
/// a bounded slice of the raw body when that shape is absent.
fn extract_error_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v
            .get("errors")
            .and_then(|e| e.get(0))
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.chars().count() > 400 {
        let snippet: String = trimmed.chars().take(400).collect();
        format!("{snippet}...")
    } else {
        trimmed.to_string()
    }
}
