use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodicError {
    #[error("invalid request: {0}")]
    Request(reqwest::Error),

    #[error("network error: {0}")]
    Transport(reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Translation Failed")]
    TranslationFailed,

    #[error("no synonym found for \"{0}\"")]
    NoSynonymFound(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CodicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            CodicError::Request(err)
        } else {
            CodicError::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_failed_message() {
        assert_eq!(CodicError::TranslationFailed.to_string(), "Translation Failed");
    }

    #[test]
    fn no_synonym_names_the_word() {
        let e = CodicError::NoSynonymFound("fetch".to_string());
        assert_eq!(e.to_string(), "no synonym found for \"fetch\"");
    }

    #[test]
    fn status_carries_code_and_message() {
        let e = CodicError::Status {
            status: 401,
            message: "Bad credentials.".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 401: Bad credentials.");
    }
}
