use regex::{Regex, RegexBuilder};
use scraper::ElementRef;

/// Text content with whitespace runs collapsed, empty for a missing node
pub fn inner_text(element: Option<ElementRef<'_>>) -> String {
    let Some(element) = element else {
        return String::new();
    };

    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw text content split into trimmed, non-empty lines
pub fn text_lines(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Escape scraped text before it goes into an HTML fragment
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Wraps headword occurrences in `<b>` tags.
///
/// Matches run on the raw text; every piece is escaped on the way out.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Match the headword only as a whole word
    pub fn word_bounded(headword: &str) -> Self {
        Self::build(headword, |escaped| format!(r"\b{escaped}\b"))
    }

    /// Match the headword anywhere, including inside longer words
    pub fn anywhere(headword: &str) -> Self {
        Self::build(headword, |escaped| escaped.to_string())
    }

    fn build(headword: &str, wrap: impl Fn(&str) -> String) -> Self {
        let headword = headword.trim();
        if headword.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&wrap(&regex::escape(headword)))
            .case_insensitive(true)
            .build()
            .map_err(|e| tracing::warn!("Cannot highlight '{}': {}", headword, e))
            .ok();

        Self { pattern }
    }

    /// Escape `text` for HTML, bolding headword matches
    pub fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in pattern.find_iter(text) {
            out.push_str(&escape_html(&text[last..m.start()]));
            out.push_str("<b>");
            out.push_str(&escape_html(m.as_str()));
            out.push_str("</b>");
            last = m.end();
        }
        out.push_str(&escape_html(&text[last..]));
        out
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
        doc.select(&Selector::parse(css).unwrap()).next()
    }

    #[test]
    fn test_inner_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<div>  a <b>big</b>\n\n   dog </div>");
        assert_eq!(inner_text(first(&doc, "div")), "a big dog");
    }

    #[test]
    fn test_inner_text_of_missing_node() {
        assert_eq!(inner_text(None), "");
    }

    #[test]
    fn test_text_lines_drops_blank_lines() {
        let doc = Html::parse_document("<body>\n  first line\n\n  <p>second</p>\n</body>");
        let body = first(&doc, "body").unwrap();
        assert_eq!(text_lines(body), vec!["first line", "second"]);
    }

    #[test]
    fn test_word_bounded_ignores_partial_words() {
        let hl = Highlighter::word_bounded("hus");
        assert_eq!(
            hl.apply("Hus and husband"),
            "<b>Hus</b> and husband"
        );
    }

    #[test]
    fn test_anywhere_matches_inside_words() {
        let hl = Highlighter::anywhere("hus");
        assert_eq!(hl.apply("husband"), "<b>hus</b>band");
    }

    #[test]
    fn test_headword_with_regex_metacharacters() {
        let hl = Highlighter::anywhere("a+b");
        assert_eq!(hl.apply("aab a+b"), "aab <b>a+b</b>");
    }

    #[test]
    fn test_empty_headword_highlights_nothing() {
        assert_eq!(Highlighter::anywhere("  ").apply("text"), "text");
    }

    #[test]
    fn test_escapes_matched_and_unmatched_text() {
        assert_eq!(
            Highlighter::anywhere("salt & peppar").apply("salt & peppar <3"),
            "<b>salt &amp; peppar</b> &lt;3"
        );
        assert_eq!(Highlighter::anywhere("").apply("a < b"), "a &lt; b");
    }

    #[test]
    fn test_never_matches_inside_entities() {
        assert_eq!(
            Highlighter::anywhere("a").apply("salt & pepper"),
            "s<b>a</b>lt &amp; pepper"
        );
        assert_eq!(
            Highlighter::word_bounded("amp").apply("amp & lt > gt"),
            "<b>amp</b> &amp; lt &gt; gt"
        );
        assert_eq!(Highlighter::anywhere("gt").apply("x > y"), "x &gt; y");
    }

    #[test]
    fn test_unicode_word_boundaries() {
        let hl = Highlighter::word_bounded("år");
        assert_eq!(hl.apply("ett år, två åren"), "ett <b>år</b>, två åren");
    }
}
