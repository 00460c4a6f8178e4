//! Types for communication with the dictionary service.

pub mod response;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Builds the lookup URL for `word` under the dictionary endpoint `base`.
pub fn entry_url(base: &str, word: &str) -> String {
    let base = base.trim_end_matches('/');
    let word = urlencoding::encode(word);
    format!("{base}/{word}")
}
