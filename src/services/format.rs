use crate::cli::Mode;
use crate::error::CodicError;
use crate::model::synonym::SynonymItem;
use crate::model::translation::TranslationResult;
use crate::services::codic::CodicClient;

use std::fmt::Write as _;
use std::io::{self, Write};

/// Runs one lookup and writes the formatted result to stdout. Mode `n`
/// prints the bare translated name with no trailing newline; mode `s`
/// prints one aligned `title: digest` line per synonym candidate.
pub fn run(client: &CodicClient, mode: Mode, source: &str) -> Result<(), CodicError> {
    let result = first_result(client.translate(source)?)?;

    let out = match mode {
        Mode::Name => result.translated_text,
        Mode::Synonym => {
            let items = fetch_synonyms(client, &result)?;
            render_synonym_table(&items)
        }
    };

    let mut stdout = io::stdout();
    let _ = stdout.write_all(out.as_bytes());
    let _ = stdout.flush();
    Ok(())
}

/// An empty array from the translate endpoint means the phrase could not be
/// translated, not a successful empty result.
fn first_result(mut results: Vec<TranslationResult>) -> Result<TranslationResult, CodicError> {
    if results.is_empty() {
        return Err(CodicError::TranslationFailed);
    }
    Ok(results.swap_remove(0))
}

/// One reverse lookup per candidate of the first word, sequential, in
/// candidate order. A failure at candidate k leaves k+1.. unfetched.
fn fetch_synonyms(
    client: &CodicClient,
    result: &TranslationResult,
) -> Result<Vec<SynonymItem>, CodicError> {
    let candidates = result
        .words
        .first()
        .map(|w| w.candidates.as_slice())
        .unwrap_or(&[]);

    let mut items = Vec::with_capacity(candidates.len());
    for c in candidates {
        items.push(first_item(&c.text, client.lookup(&c.text)?)?);
    }
    Ok(items)
}

fn first_item(word: &str, mut items: Vec<SynonymItem>) -> Result<SynonymItem, CodicError> {
    if items.is_empty() {
        return Err(CodicError::NoSynonymFound(word.to_string()));
    }
    Ok(items.swap_remove(0))
}

/// Two-pass: measure every title first, then pad each one to the widest.
fn render_synonym_table(items: &[SynonymItem]) -> String {
    let width = items
        .iter()
        .map(|i| i.title.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{:<width$}: {}", item.title, item.digest);
    }
    out
}
