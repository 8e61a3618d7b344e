use serde::Deserialize;
use url::Url;

use crate::dictionary::{Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, RawResponse, REQUEST_TIMEOUT};

pub(crate) const DEFAULT_SOURCES: &[&str] = &[
    "https://api.dictionaryapi.dev/api/v1/entries/en",
    "https://googledictionaryapi.eu-gb.mybluemix.net/api/v1/entries/en",
    "https://googledictionary.herokuapp.com/api/v1/entries/en",
];

pub(crate) async fn get_definitions(
    client: &reqwest::Client,
    sources: &[String],
    word: &str,
) -> Result<Vec<Word>, DictionaryError> {
    let raw = fetch_first_available(client, sources, word).await?;
    parse_payload(&raw)
}

/// Walks the source chain in order and returns the first successful body.
/// There is no retrying within a source, the mirrors are the only redundancy.
async fn fetch_first_available(
    client: &reqwest::Client,
    sources: &[String],
    word: &str,
) -> Result<RawResponse, DictionaryError> {
    for source in sources {
        let Some(url) = entry_url(source, word) else {
            continue;
        };
        let response = match client.get(url).timeout(REQUEST_TIMEOUT).send().await {
            Ok(response) => response,
            Err(_) => continue,
        };
        if !response.status().is_success() {
            continue;
        }
        match response.text().await {
            Ok(body) => {
                return Ok(RawResponse {
                    body,
                    source: source.clone(),
                })
            }
            Err(_) => continue,
        }
    }
    Err(DictionaryError::AllSourcesUnavailable {
        word: word.to_string(),
    })
}

fn entry_url(base: &str, word: &str) -> Option<Url> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut().ok()?.push(word);
    Some(url)
}

/// A word resolves to either a bare entry or a list of entries. Both shapes
/// are normalized to a list before extraction.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Many(Vec<ApiEntry>),
    One(ApiEntry),
}

#[derive(Deserialize)]
struct ApiEntry {
    word: Option<String>,
    phonetic: Option<String>,
    #[serde(default)]
    meaning: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

fn parse_payload(raw: &RawResponse) -> Result<Vec<Word>, DictionaryError> {
    let payload: Payload =
        serde_json::from_str(&raw.body).map_err(|error| DictionaryError::MalformedResponse {
            source: raw.source.clone(),
            reason: error.to_string(),
        })?;
    let entries = match payload {
        Payload::Many(entries) => entries,
        Payload::One(entry) => vec![entry],
    };
    Ok(entries.into_iter().filter_map(convert_entry).collect())
}

fn convert_entry(entry: ApiEntry) -> Option<Word> {
    // entries without a headword are failed lookups and get dropped
    let word = entry.word.filter(|word| !word.is_empty())?;
    let meanings = entry
        .meaning
        .into_iter()
        .filter_map(|(group, entries)| {
            let definitions: Vec<ApiDefinition> = serde_json::from_value(entries).ok()?;
            Some(WordMeaning {
                group,
                definitions: definitions.into_iter().map(convert_definition).collect(),
                synonyms: Vec::new(),
                antonyms: Vec::new(),
            })
        })
        .collect();
    Some(Word {
        word,
        phonetic: entry.phonetic,
        forms: Vec::new(),
        meanings,
    })
}

fn convert_definition(definition: ApiDefinition) -> WordDefinition {
    WordDefinition {
        definition: definition.definition,
        example: definition.example,
        synonyms: definition.synonyms,
        antonyms: definition.antonyms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(body: &str) -> RawResponse {
        RawResponse {
            body: body.to_string(),
            source: "test".to_string(),
        }
    }

    const RUN: &str = r#"{"word":"run","phonetic":"rʌn","meaning":{"verb":[{"definition":"move at a speed faster than a walk","synonyms":["sprint","jog","race","dash","bolt","scamper"]}]}}"#;

    #[test]
    fn an_object_and_a_single_element_list_parse_identically() {
        let object = parse_payload(&raw(RUN)).unwrap();
        let list = parse_payload(&raw(&format!("[{RUN}]"))).unwrap();
        assert_eq!(object, list);
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn extracts_every_field_of_a_full_entry() {
        let words = parse_payload(&raw(RUN)).unwrap();
        let word = &words[0];
        assert_eq!(word.word, "run");
        assert_eq!(word.phonetic.as_deref(), Some("rʌn"));
        assert_eq!(word.meanings.len(), 1);
        let meaning = &word.meanings[0];
        assert_eq!(meaning.group, "verb");
        assert_eq!(
            meaning.definitions[0].definition,
            "move at a speed faster than a walk"
        );
        assert_eq!(meaning.definitions[0].synonyms.len(), 6);
    }

    #[test]
    fn optional_fields_default_independently() {
        let body = r#"{"word":"cat","meaning":{"noun":[{"definition":"a small feline"}]}}"#;
        let words = parse_payload(&raw(body)).unwrap();
        let word = &words[0];
        assert_eq!(word.phonetic, None);
        let definition = &word.meanings[0].definitions[0];
        assert_eq!(definition.example, None);
        assert!(definition.synonyms.is_empty());
        assert!(definition.antonyms.is_empty());
    }

    #[test]
    fn entries_without_a_headword_are_dropped() {
        let body = r#"[{"meaning":{"noun":[{"definition":"lost"}]}},{"word":"dog","meaning":{}}]"#;
        let words = parse_payload(&raw(body)).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "dog");
    }

    #[test]
    fn a_malformed_group_is_skipped_without_failing_the_entry() {
        let body = r#"{"word":"x","meaning":{"noun":"nope","verb":[{"definition":"d"}]}}"#;
        let words = parse_payload(&raw(body)).unwrap();
        assert_eq!(words[0].meanings.len(), 1);
        assert_eq!(words[0].meanings[0].group, "verb");
    }

    #[test]
    fn meaning_groups_keep_payload_order() {
        let body = r#"{"word":"x","meaning":{"verb":[],"noun":[],"adjective":[]}}"#;
        let words = parse_payload(&raw(body)).unwrap();
        let groups: Vec<&str> = words[0]
            .meanings
            .iter()
            .map(|meaning| meaning.group.as_str())
            .collect();
        assert_eq!(groups, ["verb", "noun", "adjective"]);
    }

    #[test]
    fn a_top_level_scalar_is_a_malformed_response() {
        let error = parse_payload(&raw(r#""no such word""#)).unwrap_err();
        assert!(matches!(
            error,
            DictionaryError::MalformedResponse { .. }
        ));
    }

    #[test]
    fn entry_url_embeds_the_encoded_search_term() {
        let url = entry_url("https://api.example.com/api/v1/entries/en", "ice cream").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/api/v1/entries/en/ice%20cream"
        );
    }
}
