//! Turning dictionary entries into flashcards.

use crate::card::CardDraft;
use flashcards_api::response::{Definition, Entry, Sense};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("the dictionary returned no entries for '{0}'")]
    NoEntries(String),
    #[error("the first entry for '{0}' has no meanings")]
    NoSenses(String),
    #[error("the first meaning of '{0}' has no definitions")]
    MissingDefinition(String),
    #[error("the first meaning of '{0}' has no second definition to take an example from")]
    MissingExample(String),
}

/// Cleans up the word given to the create prompt.
/// Returns `None` if the prompt was cancelled or left empty.
pub fn prompted_word(input: Option<String>) -> Option<String> {
    let input = input?;
    let word = input.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Builds a card for `word` from the first entry's first meaning.
///
/// The meaning is the first definition and the sentence is the example of the second
/// definition, which has to exist. A second definition without an example gives an empty
/// sentence. Synonyms and antonyms come from the meaning itself, or from its first
/// definition if the meaning lists none.
pub fn card_from_entries(word: &str, entries: &[Entry]) -> Result<CardDraft, LookupError> {
    let entry = entries
        .first()
        .ok_or_else(|| LookupError::NoEntries(word.to_string()))?;
    let sense = entry
        .meanings
        .first()
        .ok_or_else(|| LookupError::NoSenses(word.to_string()))?;
    let (first, second) = match sense.definitions.as_slice() {
        [] => return Err(LookupError::MissingDefinition(word.to_string())),
        [_] => return Err(LookupError::MissingExample(word.to_string())),
        [first, second, ..] => (first, second),
    };

    Ok(CardDraft {
        word: word.to_string(),
        meaning: first.definition.clone(),
        synonyms: related_words(sense, first, |s| &s.synonyms, |d| &d.synonyms),
        antonyms: related_words(sense, first, |s| &s.antonyms, |d| &d.antonyms),
        sentence: second.example.clone().unwrap_or_default(),
    })
}

fn related_words(
    sense: &Sense,
    definition: &Definition,
    from_sense: impl Fn(&Sense) -> &Vec<String>,
    from_definition: impl Fn(&Definition) -> &Vec<String>,
) -> Vec<String> {
    let words = from_sense(sense);
    if words.is_empty() {
        from_definition(definition).clone()
    } else {
        words.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flashcards_api::response::Entries;

    fn entries(json: &str) -> Entries {
        serde_json::from_str(json).unwrap()
    }

    const HELLO: &str = r#"[
        {
            "word": "hello",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {"definition": "\"Hello!\" or an equivalent greeting."},
                        {"definition": "A greeting.", "example": "She said her hellos and left."}
                    ],
                    "synonyms": ["greeting"],
                    "antonyms": ["goodbye"]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [{"definition": "To greet with \"hello\"."}]
                }
            ]
        },
        {"word": "hello", "meanings": []}
    ]"#;

    #[test]
    fn maps_first_meaning() {
        let card = card_from_entries("hello", &entries(HELLO)).unwrap();
        assert_eq!(card.word, "hello");
        assert_eq!(card.meaning, "\"Hello!\" or an equivalent greeting.");
        assert_eq!(card.sentence, "She said her hellos and left.");
        assert_eq!(card.synonyms, ["greeting"]);
        assert_eq!(card.antonyms, ["goodbye"]);
    }

    #[test]
    fn keeps_the_users_word() {
        let card = card_from_entries("Hello", &entries(HELLO)).unwrap();
        assert_eq!(card.word, "Hello");
    }

    #[test]
    fn second_definition_without_example_gives_empty_sentence() {
        let json = r#"[{"word": "run", "meanings": [{"definitions": [
            {"definition": "To move swiftly."},
            {"definition": "To flee."}
        ]}]}]"#;
        let card = card_from_entries("run", &entries(json)).unwrap();
        assert_eq!(card.meaning, "To move swiftly.");
        assert!(card.sentence.is_empty());
    }

    #[test]
    fn falls_back_to_definition_word_lists() {
        let json = r#"[{"word": "big", "meanings": [{"definitions": [
            {"definition": "Of great size.", "synonyms": ["large"], "antonyms": ["small"]},
            {"definition": "Important.", "example": "a big day"}
        ]}]}]"#;
        let card = card_from_entries("big", &entries(json)).unwrap();
        assert_eq!(card.synonyms, ["large"]);
        assert_eq!(card.antonyms, ["small"]);
    }

    #[test]
    fn no_word_lists_gives_empty() {
        let json = r#"[{"word": "the", "meanings": [{"definitions": [
            {"definition": "Definite article."},
            {"definition": "Used before a noun.", "example": "the cat"}
        ]}]}]"#;
        let card = card_from_entries("the", &entries(json)).unwrap();
        assert!(card.synonyms.is_empty());
        assert!(card.antonyms.is_empty());
    }

    #[test]
    fn single_definition_fails() {
        let json = r#"[{"word": "hello", "meanings": [{"definitions": [
            {"definition": "A greeting.", "example": "hello there"}
        ]}]}]"#;
        let err = card_from_entries("hello", &entries(json)).unwrap_err();
        assert_eq!(err, LookupError::MissingExample("hello".to_string()));
    }

    #[test]
    fn empty_responses_fail() {
        assert_eq!(
            card_from_entries("x", &[]).unwrap_err(),
            LookupError::NoEntries("x".to_string())
        );
        assert_eq!(
            card_from_entries("x", &entries(r#"[{"word": "x"}]"#)).unwrap_err(),
            LookupError::NoSenses("x".to_string())
        );
        assert_eq!(
            card_from_entries("x", &entries(r#"[{"word": "x", "meanings": [{}]}]"#)).unwrap_err(),
            LookupError::MissingDefinition("x".to_string())
        );
    }

    #[test]
    fn cleans_prompted_word() {
        assert_eq!(prompted_word(None), None);
        assert_eq!(prompted_word(Some(String::new())), None);
        assert_eq!(prompted_word(Some("   ".to_string())), None);
        assert_eq!(prompted_word(Some(" hello\n".to_string())), Some("hello".to_string()));
    }
}
