//! Body text cleaning

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s.,;:!?()\-'"]"#).expect("valid regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Reduce article markup to plain prose
///
/// Tags are dropped and entities decoded. Characters outside word characters,
/// whitespace and basic punctuation become spaces, then whitespace runs
/// collapse to one space.
///
/// ```
/// use chronicle_extractor::clean_content;
///
/// assert_eq!(clean_content("<p>Lift&nbsp;<b>off</b>!</p>"), "Lift off!");
/// ```
pub fn clean_content(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();
    let filtered = DISALLOWED.replace_all(&text, " ");
    WHITESPACE.replace_all(&filtered, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(clean_content(""), "");
        assert_eq!(clean_content("  \n "), "");
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            clean_content("<div><h1>Title</h1><p>First  para.</p>\n<p>Second.</p></div>"),
            "TitleFirst para. Second."
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(clean_content("Tom &amp; Jerry"), "Tom Jerry");
        assert_eq!(clean_content("&quot;quoted&quot;"), "\"quoted\"");
    }

    #[test]
    fn test_keeps_punctuation_and_dates() {
        assert_eq!(
            clean_content("On 3/5/2024 (local time), it's done: yes!"),
            "On 3 5 2024 (local time), it's done: yes!"
        );
        assert_eq!(clean_content("Filed 2024-03-05."), "Filed 2024-03-05.");
    }

    #[test]
    fn test_removed_symbol_between_spaces() {
        assert_eq!(clean_content("Up 5 % today"), "Up 5 today");
        assert_eq!(clean_content("A & B"), "A B");
    }

    #[test]
    fn test_unicode_words_survive() {
        assert_eq!(clean_content("Café in São Paulo €5"), "Café in São Paulo 5");
    }
}
