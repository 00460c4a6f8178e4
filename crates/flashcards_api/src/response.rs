//! Types for responses from the dictionary service.

use serde::{Deserialize, Serialize};

/// A successful lookup is a list of entries for the word.
pub type Entries = Vec<Entry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    /// Senses of the word, one per part of speech.
    #[serde(default)]
    pub meanings: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Body returned alongside a 404 when the word is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFound {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub resolution: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_entries() {
        let json = r#"[
            {
                "word": "hello",
                "phonetics": [{"audio": "https://example.com/hello.mp3"}],
                "meanings": [
                    {
                        "partOfSpeech": "noun",
                        "definitions": [
                            {"definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": []}
                        ],
                        "synonyms": ["greeting"],
                        "antonyms": []
                    }
                ],
                "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
                "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
            }
        ]"#;
        let entries: Entries = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.phonetics[0].text, None);
        let sense = &entry.meanings[0];
        assert_eq!(sense.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(sense.synonyms, ["greeting"]);
        assert_eq!(sense.definitions[0].example, None);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"[{"word": "bare", "meanings": [{"definitions": [{"definition": "naked"}]}]}]"#;
        let entries: Entries = serde_json::from_str(json).unwrap();
        let sense = &entries[0].meanings[0];
        assert!(sense.synonyms.is_empty());
        assert!(sense.antonyms.is_empty());
        assert!(sense.definitions[0].synonyms.is_empty());
    }

    #[test]
    fn parses_not_found() {
        let json = r#"{
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
            "resolution": "You can try the search again at later time or head to the web instead."
        }"#;
        let not_found: NotFound = serde_json::from_str(json).unwrap();
        assert_eq!(not_found.title, "No Definitions Found");
        assert!(not_found.resolution.is_some());
    }
}
