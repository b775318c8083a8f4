use std::sync::Arc;

use async_trait::async_trait;
use ordbok_core::dictionary::DisplayNames;
use ordbok_core::preprocess::{DefaultPreprocessor, Preprocessor};
use ordbok_core::select::parent_element;
use ordbok_core::text::{escape_html, inner_text, text_lines};
use ordbok_core::{DictionaryOptions, Highlighter, HostApi, Note, OnlineDictionary, SelectorChain};
use scraper::Html;
use url::Url;

use crate::heuristics::{is_likely_english, is_navigation_text};
use crate::style::TYDA_CSS;

const SEARCH_BASE: &str = "https://tyda.se/search/";
const FALLBACK_LIMIT: usize = 3;

const NAMES: DisplayNames = DisplayNames {
    simplified_chinese: "Tyda瑞典语-英语词典",
    traditional_chinese: "Tyda瑞典語-英語詞典",
    english: "Tyda Swedish-English Dictionary",
};

struct Selectors {
    main: SelectorChain,
    headword: SelectorChain,
    pronunciation: SelectorChain,
    translations: SelectorChain,
    pos: SelectorChain,
    example: SelectorChain,
    body: SelectorChain,
    audio: SelectorChain,
}

impl Selectors {
    fn new() -> Self {
        Self {
            main: SelectorChain::new(&["main", ".main-content", "#content"]),
            headword: SelectorChain::new(&["h1", ".word-header", ".entry-word"]),
            pronunciation: SelectorChain::new(&[".pronunciation", ".phonetic", r#"[class*="phon"]"#]),
            translations: SelectorChain::new(&[
                ".translation",
                ".meaning",
                r#"[class*="english"]"#,
                "li",
            ]),
            pos: SelectorChain::new(&[".pos", r#"[class*="type"]"#]),
            example: SelectorChain::new(&[".example"]),
            body: SelectorChain::new(&["body"]),
            audio: SelectorChain::new(&["audio source", r#"[src*=".mp3"]"#]),
        }
    }
}

/// Tyda.se Swedish-English search
pub struct TydaDictionary {
    host: Arc<dyn HostApi>,
    options: DictionaryOptions,
    selectors: Selectors,
}

impl TydaDictionary {
    pub fn new(host: Arc<dyn HostApi>, options: DictionaryOptions) -> Self {
        Self {
            host,
            options,
            selectors: Selectors::new(),
        }
    }

    pub fn search_url(word: &str) -> String {
        format!("{SEARCH_BASE}{}", urlencoding::encode(word))
    }

    /// Extract at most one note from a search result page fetched from `page_url`
    pub fn parse_page(&self, word: &str, page_url: &str, page: &str) -> Vec<Note> {
        let doc = Html::parse_document(page);
        let root = doc.root_element();
        let s = &self.selectors;

        if s.main.first(root).is_none() {
            tracing::debug!("Tyda: no main content for '{}'", word);
            return Vec::new();
        }

        let expression = match inner_text(s.headword.first(root)) {
            headword if headword.is_empty() => word.to_string(),
            headword => headword,
        };
        let reading = inner_text(s.pronunciation.first(root));

        let highlighter = Highlighter::anywhere(&expression);
        let max_examples = self.options.max_examples();
        let mut definitions = Vec::new();

        for block in s.translations.all(root) {
            let translation = inner_text(Some(block));
            if translation.is_empty() || !is_likely_english(&translation) {
                continue;
            }

            let pos = match inner_text(s.pos.first(block)) {
                pos if pos.is_empty() => String::new(),
                pos => format!(r#"<span class="pos">{}</span>"#, escape_html(&pos)),
            };

            let mut definition = format!(
                "{pos}<span class='tran'><span class='eng_tran'>{}</span></span>",
                highlighter.apply(&translation)
            );

            let mut examples = s.example.all(block);
            if examples.is_empty() {
                examples = parent_element(block)
                    .map(|parent| s.example.all(parent))
                    .unwrap_or_default();
            }

            if !examples.is_empty() && max_examples > 0 {
                definition.push_str(r#"<ul class="sents">"#);
                for example in examples.into_iter().take(max_examples) {
                    let sentence = inner_text(Some(example));
                    if !sentence.is_empty() {
                        definition.push_str(&format!(
                            "<li class='sent'><span class='eng_sent'>{}</span></li>",
                            highlighter.apply(&sentence)
                        ));
                    }
                }
                definition.push_str("</ul>");
            }

            definitions.push(definition);
        }

        // No structured translations, scan the page text line by line
        if definitions.is_empty() {
            if let Some(body) = s.body.first(root) {
                definitions = text_lines(body)
                    .into_iter()
                    .filter(|line| {
                        let len = line.chars().count();
                        len > 2 && len < 200 && is_likely_english(line) && !is_navigation_text(line)
                    })
                    .take(FALLBACK_LIMIT)
                    .map(|line| {
                        format!(
                            "<span class='tran'><span class='eng_tran'>{}</span></span>",
                            escape_html(&line)
                        )
                    })
                    .collect();
            }
        }

        let audios: Vec<String> = s
            .audio
            .all(root)
            .into_iter()
            .filter_map(|audio| audio.value().attr("src"))
            .find(|src| !src.is_empty())
            .and_then(|src| resolve(page_url, src))
            .into_iter()
            .collect();

        if definitions.is_empty() {
            return Vec::new();
        }

        vec![Note {
            css: TYDA_CSS.to_string(),
            expression,
            reading,
            extrainfo: String::new(),
            definitions,
            audios,
        }]
    }
}

#[async_trait]
impl OnlineDictionary for TydaDictionary {
    fn id(&self) -> &'static str {
        "tyda"
    }

    async fn display_name(&self) -> String {
        NAMES.for_locale(&self.host.locale().await).to_string()
    }

    fn set_options(&mut self, options: DictionaryOptions) {
        self.options = options;
    }

    async fn find_term(&self, word: &str) -> Vec<Note> {
        let word = DefaultPreprocessor.process(word);
        if word.is_empty() {
            return Vec::new();
        }

        let url = Self::search_url(&word);
        let page = match self.host.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Tyda lookup for '{}' failed: {}", word, e);
                return Vec::new();
            }
        };

        self.parse_page(&word, &url, &page)
    }
}

/// Resolve `src` the way a browser would against the page it came from
fn resolve(page_url: &str, src: &str) -> Option<String> {
    let resolved = Url::parse(page_url).and_then(|base| base.join(src));
    match resolved {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!("Tyda: cannot resolve audio '{}': {}", src, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use ordbok_core::host::StaticHost;

    use super::*;

    const PAGE_URL: &str = "https://tyda.se/search/springa";

    const RESULTS: &str = r#"
    <html><body>
      <main>
        <h1>springa</h1>
        <span class="phonetic">[²spr'ing:a]</span>
        <audio><source src="/audio/springa.mp3"></audio>
        <ul class="list">
          <li class="translation"><span class="pos">verb</span> to run</li>
          <li class="translation">springa (sv)</li>
          <li class="translation">to burst, to crack</li>
          <li class="example">Hon kan springa fort.</li>
          <li class="example"></li>
          <li class="example">Springa ett maraton.</li>
        </ul>
      </main>
    </body></html>
    "#;

    fn dictionary(host: StaticHost, max_examples: usize) -> TydaDictionary {
        TydaDictionary::new(Arc::new(host), DictionaryOptions::with_max_examples(max_examples))
    }

    fn parse(page: &str, max_examples: usize) -> Vec<Note> {
        dictionary(StaticHost::new("en-US"), max_examples).parse_page("springa", PAGE_URL, page)
    }

    #[test]
    fn test_search_url_keeps_case() {
        assert_eq!(TydaDictionary::search_url("Åka"), "https://tyda.se/search/%C3%85ka");
    }

    #[test]
    fn test_parses_translations() {
        let notes = parse(RESULTS, 2);
        assert_eq!(notes.len(), 1);

        let note = &notes[0];
        assert_eq!(note.expression, "springa");
        assert_eq!(note.reading, "[²spr'ing:a]");
        assert_eq!(note.audios, ["https://tyda.se/audio/springa.mp3"]);
        assert_eq!(note.extrainfo, "");
        assert_eq!(note.css, TYDA_CSS);

        // "springa (sv)" has no English function word
        assert_eq!(note.definitions.len(), 2);
        assert_eq!(
            note.definitions[0],
            concat!(
                r#"<span class="pos">verb</span>"#,
                "<span class='tran'><span class='eng_tran'>verb to run</span></span>",
                r#"<ul class="sents">"#,
                "<li class='sent'><span class='eng_sent'>Hon kan <b>springa</b> fort.</span></li>",
                "</ul>",
            )
        );
        assert!(note.definitions[1].starts_with("<span class='tran'><span class='eng_tran'>to burst, to crack</span></span>"));
    }

    #[test]
    fn test_example_cap_counts_empty_entries() {
        let notes = parse(RESULTS, 3);
        let definition = &notes[0].definitions[0];

        assert!(definition.contains("Hon kan"));
        assert!(definition.contains("<b>Springa</b> ett maraton."));
        assert_eq!(definition.matches("<li").count(), 2);
    }

    #[test]
    fn test_falls_back_to_body_lines() {
        let page = r#"
        <html><body>
          <div id="content">
            <p>Sök</p>
            <p>to run at speed</p>
            <p>We use cookies for the best experience</p>
            <p>springa</p>
            <p>löparbana</p>
            <p>to be in a hurry</p>
            <p>to leak, of a boat</p>
          </div>
        </body></html>
        "#;

        let notes = parse(page, 2);
        assert_eq!(
            notes[0].definitions,
            [
                "<span class='tran'><span class='eng_tran'>to run at speed</span></span>",
                "<span class='tran'><span class='eng_tran'>to be in a hurry</span></span>",
                "<span class='tran'><span class='eng_tran'>to leak, of a boat</span></span>",
            ]
        );
        assert!(notes[0].audios.is_empty());
    }

    #[test]
    fn test_short_headword_keeps_entities_intact() {
        let page = "<html><body><main><h1>a</h1><li class=\"translation\">salt &amp; pepper is a</li></main></body></html>";
        let notes = parse(page, 2);

        assert_eq!(
            notes[0].definitions,
            ["<span class='tran'><span class='eng_tran'>s<b>a</b>lt &amp; pepper is <b>a</b></span></span>"]
        );
    }

    #[test]
    fn test_falls_back_to_any_mp3_source() {
        let page = r#"
        <html><body><main>
          <li class="translation">to run</li>
          <a src="https://cdn.tyda.se/x.mp3">play</a>
        </main></body></html>
        "#;

        let notes = parse(page, 2);
        assert_eq!(notes[0].audios, ["https://cdn.tyda.se/x.mp3"]);
    }

    #[test]
    fn test_without_main_content_yields_nothing() {
        assert!(parse("<html><body><li>to run</li></body></html>", 2).is_empty());
    }

    #[test]
    fn test_page_without_english_yields_nothing() {
        let page = "<html><body><main><li>springa</li><li>löpa</li></main></body></html>";
        assert!(parse(page, 2).is_empty());
    }

    #[tokio::test]
    async fn test_find_term_uses_search_url() {
        let host = Arc::new(StaticHost::new("zh-TW").with_page(PAGE_URL, RESULTS));
        let dictionary = TydaDictionary::new(host.clone(), DictionaryOptions::default());

        let notes = dictionary.find_term("springa").await;

        assert_eq!(notes.len(), 1);
        assert_eq!(host.requests(), [PAGE_URL]);
        assert_eq!(dictionary.display_name().await, "Tyda瑞典語-英語詞典");
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_list() {
        assert!(dictionary(StaticHost::new("en-US"), 2).find_term("springa").await.is_empty());
    }
}
