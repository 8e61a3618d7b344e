use reqwest::header::USER_AGENT;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::dictionary::{Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, RawResponse, REQUEST_TIMEOUT};

const SEARCH_URL: &str = "https://www.google.com/search";
// google only serves the scrapable markup to old browser user agents
const SEARCH_USER_AGENT: &str = "Firefox 18.3";

pub(crate) async fn get_definitions(
    client: &reqwest::Client,
    word: &str,
) -> Result<Vec<Word>, DictionaryError> {
    let raw = fetch(client, word).await?;
    Ok(parse_results(&raw.body))
}

fn search_url(word: &str) -> Url {
    let mut url = Url::parse(SEARCH_URL).expect("constant search url is valid");
    url.query_pairs_mut()
        .append_pair("q", &format!("define:{word}"));
    url
}

async fn fetch(client: &reqwest::Client, word: &str) -> Result<RawResponse, DictionaryError> {
    let unavailable = || DictionaryError::AllSourcesUnavailable {
        word: word.to_string(),
    };
    let response = client
        .get(search_url(word))
        .header(USER_AGENT, SEARCH_USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|_| unavailable())?;
    if !response.status().is_success() {
        return Err(unavailable());
    }
    let body = response.text().await.map_err(|_| unavailable())?;
    Ok(RawResponse {
        body,
        source: SEARCH_URL.to_string(),
    })
}

/// Extracts interpretations from a `define:` results page. A page without a
/// result block or headword yields an empty list rather than an error, which
/// the caller renders as silent no-result output.
pub(crate) fn parse_results(html: &str) -> Vec<Word> {
    let document = Html::parse_document(html);
    let Some(root) = select_first(document.root_element(), "div#ires") else {
        return Vec::new();
    };
    let Some(headword) = first_text(root, r#"span[data-dobid="hdw"]"#) else {
        return Vec::new();
    };
    let phonetic = first_text(root, "span.lr_dct_ph");
    let forms = forms_blob(root).map(|blob| split_forms(&blob)).unwrap_or_default();
    let sentence = first_text(root, "div.lr_dct_more_blk");
    let definitions = all_texts(root, r#"div[data-dobid="dfn"]"#);
    let (synonyms, antonyms) = thesaurus_lists(root);

    let mut meaning = WordMeaning {
        group: "definitions".to_string(),
        definitions: definitions
            .into_iter()
            .map(|definition| WordDefinition {
                definition,
                example: None,
                synonyms: Vec::new(),
                antonyms: Vec::new(),
            })
            .collect(),
        synonyms,
        antonyms,
    };
    // the page carries a single usage sentence, not one per definition
    if let Some(sentence) = sentence {
        if let Some(first) = meaning.definitions.first_mut() {
            first.example = Some(sentence);
        }
    }
    let meanings = if meaning.definitions.is_empty()
        && meaning.synonyms.is_empty()
        && meaning.antonyms.is_empty()
    {
        Vec::new()
    } else {
        vec![meaning]
    };
    vec![Word {
        word: headword,
        phonetic,
        forms,
        meanings,
    }]
}

fn select_first<'a>(root: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    root.select(&selector).next()
}

fn first_text(root: ElementRef<'_>, selector: &str) -> Option<String> {
    let text = element_text(select_first(root, selector)?);
    (!text.is_empty()).then_some(text)
}

fn all_texts(root: ElementRef<'_>, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    root.select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The forms blob shares its classes with the usage sentence block, so the
/// sentence block has to be excluded explicitly.
fn forms_blob(root: ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("div.xpdxpnd.vk_gy").ok()?;
    let blob = root
        .select(&selector)
        .find(|element| {
            !element
                .value()
                .classes()
                .any(|class| class == "lr_dct_more_blk")
        })
        .map(element_text)?;
    (!blob.is_empty()).then_some(blob)
}

/// Reads the thesaurus tables. A table whose text starts with `synonyms:` or
/// `antonyms:` is assigned by its label; unlabeled tables fall back to the
/// page order, synonyms first.
fn thesaurus_lists(root: ElementRef<'_>) -> (Vec<String>, Vec<String>) {
    let mut synonyms = Vec::new();
    let mut antonyms = Vec::new();
    for text in all_texts(root, "table.vk_tbl.vk_gy") {
        if let Some(terms) = labeled_terms(&text, "synonyms:") {
            synonyms = terms;
        } else if let Some(terms) = labeled_terms(&text, "antonyms:") {
            antonyms = terms;
        } else if synonyms.is_empty() {
            synonyms = split_terms(&text);
        } else if antonyms.is_empty() {
            antonyms = split_terms(&text);
        }
    }
    (synonyms, antonyms)
}

fn labeled_terms(text: &str, label: &str) -> Option<Vec<String>> {
    let trimmed = text.trim_start();
    let head = trimmed.get(..label.len())?;
    head.eq_ignore_ascii_case(label)
        .then(|| split_terms(&trimmed[label.len()..]))
}

fn split_terms(text: &str) -> Vec<String> {
    text.split([';', ','])
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_forms(blob: &str) -> Vec<String> {
    blob.split(';')
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect()
}
