use serde::{Deserialize, Serialize};

/// One element of the array returned by `/v1/engine/translate.json`,
/// covering a single input sentence.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationResult {
    #[serde(default)]
    pub successful: bool,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub translated_text: String,

    #[serde(default)]
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WordEntry {
    #[serde(default)]
    pub successful: bool,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub translated_text: String,

    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// An alternate English word suggested for one source word.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Candidate {
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_translate_response() {
        let body = r#"[
            {
                "successful": true,
                "text": "取得する",
                "translated_text": "get",
                "words": [
                    {
                        "successful": true,
                        "text": "取得する",
                        "translated_text": "get",
                        "candidates": [
                            { "text": "get" },
                            { "text": "fetch" }
                        ]
                    }
                ]
            }
        ]"#;

        let results: Vec<TranslationResult> = serde_json::from_str(body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].translated_text, "get");
        let candidates: Vec<&str> = results[0].words[0]
            .candidates
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(candidates, ["get", "fetch"]);
    }

    #[test]
    fn decodes_empty_array() {
        let results: Vec<TranslationResult> = serde_json::from_str("[]").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let body = r#"[{ "translated_text": "exists" }]"#;
        let results: Vec<TranslationResult> = serde_json::from_str(body).unwrap();
        assert!(!results[0].successful);
        assert_eq!(results[0].translated_text, "exists");
        assert!(results[0].words.is_empty());
    }

    #[test]
    fn object_body_is_a_decode_error() {
        let body = r#"{ "errors": [{ "message": "Bad credentials." }] }"#;
        assert!(serde_json::from_str::<Vec<TranslationResult>>(body).is_err());
    }
}
