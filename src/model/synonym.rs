use serde::{Deserialize, Serialize};

/// One element of the array returned by `/v1/ced/lookup.json`: an English
/// headword plus a short Japanese digest of its meaning.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SynonymItem {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub digest: String,
}
