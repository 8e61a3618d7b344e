use console::style;
use dictionary::Word;

const TRUNCATED_DEFINITIONS: usize = 2;
const TRUNCATED_TERMS: usize = 5;
const MORE_HINT: &str = "run with --more to see the full entry";

/// Renders interpretations to a string for the terminal. An empty slice
/// renders as nothing at all, the silent no-result case.
pub fn render(query: &str, words: &[Word], show_more: bool) -> String {
    let mut out = String::new();
    for (index, word) in words.iter().enumerate() {
        if index != 0 {
            out.push('\n');
        }
        render_word(&mut out, query, word, show_more);
    }
    if !out.is_empty() && !show_more {
        out.push_str(&format!("{}\n", style(MORE_HINT).yellow().dim()));
    }
    out
}

fn render_word(out: &mut String, query: &str, word: &Word, show_more: bool) {
    let mut header = format!("{} . {}", query, word.word);
    if let Some(phonetic) = &word.phonetic {
        header.push_str(&format!(" . {phonetic}"));
    }
    out.push_str(&format!("{}\n", style(header).magenta().bold()));

    if !word.forms.is_empty() {
        out.push_str(&format!("{}\n", style("forms:").magenta()));
        let mut forms = word.forms.iter();
        if let Some(primary) = forms.next() {
            out.push_str(&format!(" - {}\n", style(primary).green()));
        }
        for alternate in forms {
            out.push_str(&format!("    - {}\n", style(alternate).green()));
        }
    }

    for meaning in &word.meanings {
        out.push_str(&format!(
            "{}\n",
            style(format!("{}:", meaning.group)).magenta()
        ));
        for definition in truncated(&meaning.definitions, TRUNCATED_DEFINITIONS, show_more) {
            out.push_str(&format!(" - {}\n", style(&definition.definition).green()));
            if let Some(example) = &definition.example {
                out.push_str(&format!("   usage: {}\n", style(example).green()));
            }
            term_line(out, "   synonyms", &definition.synonyms, show_more);
            term_line(out, "   antonyms", &definition.antonyms, show_more);
        }
        term_line(out, " synonyms", &meaning.synonyms, show_more);
        term_line(out, " antonyms", &meaning.antonyms, show_more);
    }
}

/// A synonym/antonym line; absent lists produce no line at all.
fn term_line(out: &mut String, label: &str, terms: &[String], show_more: bool) {
    if terms.is_empty() {
        return;
    }
    let shown = truncated(terms, TRUNCATED_TERMS, show_more);
    out.push_str(&format!(
        "{}: {}\n",
        style(label).magenta(),
        style(shown.join(", ")).green()
    ));
}

// truncation is always a prefix so the source order survives
fn truncated<T>(items: &[T], limit: usize, show_more: bool) -> &[T] {
    if show_more {
        items
    } else {
        &items[..items.len().min(limit)]
    }
}
