use std::sync::Arc;

use async_trait::async_trait;
use ordbok_core::dictionary::DisplayNames;
use ordbok_core::preprocess::{DefaultPreprocessor, Preprocessor};
use ordbok_core::select::parent_element;
use ordbok_core::text::{escape_html, inner_text};
use ordbok_core::{DictionaryOptions, Highlighter, HostApi, Note, OnlineDictionary, SelectorChain};
use scraper::Html;

use crate::heuristics::{is_likely_definition, is_valid_example};
use crate::style::CAMBRIDGE_CSS;

const SITE: &str = "https://dictionary.cambridge.org";
const SEARCH_BASE: &str = "https://dictionary.cambridge.org/dictionary/swedish-english/";
const FALLBACK_LIMIT: usize = 3;

const NAMES: DisplayNames = DisplayNames {
    simplified_chinese: "Cambridge瑞典语-英语词典",
    traditional_chinese: "Cambridge瑞典語-英語詞典",
    english: "Cambridge Swedish-English Dictionary",
};

struct Selectors {
    entry: SelectorChain,
    headword: SelectorChain,
    pronunciation: SelectorChain,
    audio: SelectorChain,
    senses: SelectorChain,
    pos: SelectorChain,
    part_of_speech: SelectorChain,
    definition: SelectorChain,
    examples: SelectorChain,
    loose_definitions: SelectorChain,
    frequency: SelectorChain,
}

impl Selectors {
    fn new() -> Self {
        Self {
            entry: SelectorChain::new(&[".entry-body", ".dictionary", ".di-body"]),
            headword: SelectorChain::new(&[".headword", ".di-title", "h1"]),
            pronunciation: SelectorChain::new(&[".pron", ".ipa", r#"[class*="pronunciation"]"#]),
            audio: SelectorChain::new(&[r#"source[type="audio/mpeg"]"#, "audio source"]),
            senses: SelectorChain::new(&[".sense-body", ".def-block", ".sense", ".di-body .def"]),
            pos: SelectorChain::new(&[".pos"]),
            part_of_speech: SelectorChain::new(&[".part-of-speech"]),
            definition: SelectorChain::new(&[".def", ".definition"]),
            examples: SelectorChain::new(&[".examp", ".example", ".eg"]),
            loose_definitions: SelectorChain::new(&[".def-body", ".meaning", r#"[class*="def"]"#]),
            frequency: SelectorChain::new(&[".frequency", r#"[class*="freq"]"#]),
        }
    }
}

/// Cambridge Dictionary, Swedish-English section
pub struct CambridgeDictionary {
    host: Arc<dyn HostApi>,
    options: DictionaryOptions,
    selectors: Selectors,
}

impl CambridgeDictionary {
    pub fn new(host: Arc<dyn HostApi>, options: DictionaryOptions) -> Self {
        Self {
            host,
            options,
            selectors: Selectors::new(),
        }
    }

    pub fn search_url(word: &str) -> String {
        format!("{SEARCH_BASE}{}", urlencoding::encode(&word.to_lowercase()))
    }

    /// Extract at most one note from a fetched entry page
    pub fn parse_page(&self, word: &str, page: &str) -> Vec<Note> {
        let doc = Html::parse_document(page);
        let root = doc.root_element();
        let s = &self.selectors;

        if s.entry.first(root).is_none() {
            tracing::debug!("Cambridge: no entry body for '{}'", word);
            return Vec::new();
        }

        let expression = match inner_text(s.headword.first(root)) {
            headword if headword.is_empty() => word.to_string(),
            headword => headword,
        };
        let reading = slash_span(&inner_text(s.pronunciation.first(root)));

        let audios: Vec<String> = s
            .audio
            .all(root)
            .into_iter()
            .filter_map(|source| source.value().attr("src"))
            .find(|src| !src.is_empty())
            .map(absolute_audio_url)
            .into_iter()
            .collect();

        let highlighter = Highlighter::word_bounded(&expression);
        let max_examples = self.options.max_examples();
        let mut definitions = Vec::new();

        for block in s.senses.all(root) {
            let pos = s
                .pos
                .first(block)
                .or_else(|| parent_element(block).and_then(|parent| s.pos.first(parent)))
                .or_else(|| s.part_of_speech.first(block));
            let pos = match inner_text(pos) {
                pos if pos.is_empty() => String::new(),
                pos => format!(r#"<span class="pos">{}</span>"#, escape_html(&pos)),
            };

            let text = inner_text(Some(s.definition.first(block).unwrap_or(block)));
            if text.chars().count() <= 2 {
                continue;
            }

            let mut definition = format!(
                "{pos}<span class='tran'><span class='eng_tran'>{}</span></span>",
                highlighter.apply(&text)
            );

            let examples = s.examples.all(block);
            if !examples.is_empty() && max_examples > 0 {
                definition.push_str(r#"<ul class="sents">"#);
                let sentences = examples
                    .into_iter()
                    .map(|example| inner_text(Some(example)))
                    .filter(|sentence| sentence.chars().count() > 3 && is_valid_example(sentence))
                    .take(max_examples);
                for sentence in sentences {
                    definition.push_str(&format!(
                        "<li class='sent'><span class='eng_sent'>{}</span></li>",
                        highlighter.apply(&sentence)
                    ));
                }
                definition.push_str("</ul>");
            }

            definitions.push(definition);
        }

        // Pages without sense blocks still carry loose definition text
        if definitions.is_empty() {
            definitions = s
                .loose_definitions
                .all(root)
                .into_iter()
                .map(|block| inner_text(Some(block)))
                .filter(|text| text.chars().count() > 5 && is_likely_definition(text))
                .take(FALLBACK_LIMIT)
                .map(|text| {
                    format!(
                        "<span class='tran'><span class='eng_tran'>{}</span></span>",
                        highlighter.apply(&text)
                    )
                })
                .collect();
        }

        let extrainfo = match inner_text(s.frequency.first(root)) {
            frequency if frequency.is_empty() => String::new(),
            frequency => format!(r#"<span class="frequency">{}</span>"#, escape_html(&frequency)),
        };

        if definitions.is_empty() {
            return Vec::new();
        }

        vec![Note {
            css: CAMBRIDGE_CSS.to_string(),
            expression,
            reading,
            extrainfo,
            definitions,
            audios,
        }]
    }
}

#[async_trait]
impl OnlineDictionary for CambridgeDictionary {
    fn id(&self) -> &'static str {
        "cambridge"
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
                tracing::warn!("Cambridge lookup for '{}' failed: {}", word, e);
                return Vec::new();
            }
        };

        self.parse_page(&word, &page)
    }
}

/// Keep only the part between the first and last slash, e.g. "/ˈhɵnd/"
fn slash_span(text: &str) -> String {
    match (text.find('/'), text.rfind('/')) {
        (Some(start), Some(end)) => text[start..=end].trim().to_string(),
        _ => String::new(),
    }
}

fn absolute_audio_url(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{SITE}{src}")
    } else {
        src.to_string()
    }
}

#[cfg(test)]
mod tests {
    use ordbok_core::host::StaticHost;

    use super::*;

    const ENTRY: &str = r#"
    <html><body>
      <div class="entry-body">
        <div class="pos-header">
          <span class="headword">hund</span>
          <span class="pron">UK <span class="ipa">/hɵnd/</span></span>
          <span class="frequency">A1</span>
          <audio><source type="audio/mpeg" src="/media/sv/hund.mp3"></audio>
        </div>
        <div class="entry">
          <span class="pos">noun</span>
          <div class="sense-body">
            <div class="def">a dog, a hund kept as a pet</div>
            <div class="examp">Min hund heter Max.</div>
            <div class="examp">see also</div>
            <div class="examp">Hunden skäller.</div>
            <div class="examp">Vi har en hund.</div>
          </div>
          <div class="sense-body">
            <div class="def">ok</div>
          </div>
        </div>
      </div>
    </body></html>
    "#;

    fn dictionary(host: StaticHost, max_examples: usize) -> CambridgeDictionary {
        CambridgeDictionary::new(
            Arc::new(host),
            DictionaryOptions::with_max_examples(max_examples),
        )
    }

    fn parse(page: &str, max_examples: usize) -> Vec<Note> {
        dictionary(StaticHost::new("en-US"), max_examples).parse_page("hund", page)
    }

    #[test]
    fn test_search_url_lowercases_and_encodes() {
        assert_eq!(
            CambridgeDictionary::search_url("Hund Är"),
            "https://dictionary.cambridge.org/dictionary/swedish-english/hund%20%C3%A4r"
        );
    }

    #[test]
    fn test_parses_full_entry() {
        let notes = parse(ENTRY, 2);
        assert_eq!(notes.len(), 1);

        let note = &notes[0];
        assert_eq!(note.expression, "hund");
        assert_eq!(note.reading, "/hɵnd/");
        assert_eq!(note.audios, ["https://dictionary.cambridge.org/media/sv/hund.mp3"]);
        assert_eq!(note.extrainfo, r#"<span class="frequency">A1</span>"#);
        assert_eq!(note.css, CAMBRIDGE_CSS);

        // The second sense is too short to count
        assert_eq!(note.definitions.len(), 1);
        assert_eq!(
            note.definitions[0],
            concat!(
                r#"<span class="pos">noun</span>"#,
                "<span class='tran'><span class='eng_tran'>a dog, a <b>hund</b> kept as a pet</span></span>",
                r#"<ul class="sents">"#,
                "<li class='sent'><span class='eng_sent'>Min <b>hund</b> heter Max.</span></li>",
                "<li class='sent'><span class='eng_sent'>Hunden skäller.</span></li>",
                "</ul>",
            )
        );
    }

    #[test]
    fn test_zero_examples_omits_sentence_list() {
        let notes = parse(ENTRY, 0);
        assert!(!notes[0].definitions[0].contains("sents"));
    }

    #[test]
    fn test_missing_entry_body_yields_nothing() {
        assert!(parse("<html><body><h1>hund</h1></body></html>", 2).is_empty());
    }

    #[test]
    fn test_falls_back_to_loose_definitions() {
        let page = r#"
        <html><body>
          <div class="dictionary">
            <div class="def-body">Home</div>
            <div class="def-body">a large hund used for herding</div>
            <div class="def-body">one</div>
            <div class="def-body">second loose definition</div>
            <div class="def-body">third loose definition</div>
            <div class="def-body">fourth loose definition</div>
          </div>
        </body></html>
        "#;

        let notes = parse(page, 2);
        let definitions = &notes[0].definitions;

        assert_eq!(definitions.len(), 3);
        assert_eq!(
            definitions[0],
            "<span class='tran'><span class='eng_tran'>a large <b>hund</b> used for herding</span></span>"
        );
        assert_eq!(notes[0].expression, "hund");
        assert!(notes[0].audios.is_empty());
    }

    #[test]
    fn test_protocol_relative_audio() {
        assert_eq!(
            absolute_audio_url("//cdn.example.org/a.mp3"),
            "https://cdn.example.org/a.mp3"
        );
        assert_eq!(
            absolute_audio_url("https://x.org/a.mp3"),
            "https://x.org/a.mp3"
        );
    }

    #[test]
    fn test_slash_span() {
        assert_eq!(slash_span("UK /hɵnd/ US"), "/hɵnd/");
        assert_eq!(slash_span("no slashes"), "");
        assert_eq!(slash_span(""), "");
    }

    #[test]
    fn test_scraped_markup_is_escaped() {
        let page = r#"
        <html><body><div class="entry-body">
          <div class="sense-body"><div class="def">fish &amp; <chips></div></div>
        </div></body></html>
        "#;
        let notes = parse(page, 2);
        assert!(notes[0].definitions[0].contains("fish &amp;"));
    }

    #[tokio::test]
    async fn test_find_term_fetches_lowercased_url() {
        let url = CambridgeDictionary::search_url("hund");
        let host = Arc::new(StaticHost::new("en-US").with_page(&url, ENTRY));
        let dictionary = CambridgeDictionary::new(host.clone(), DictionaryOptions::default());

        let notes = dictionary.find_term("  HUND ").await;

        assert_eq!(notes.len(), 1);
        assert_eq!(host.requests(), [url]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_list() {
        let dictionary = dictionary(StaticHost::new("en-US"), 2);
        assert!(dictionary.find_term("katt").await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_word_skips_fetch() {
        let host = Arc::new(StaticHost::new("en-US"));
        let dictionary = CambridgeDictionary::new(host.clone(), DictionaryOptions::default());

        assert!(dictionary.find_term("").await.is_empty());
        assert!(host.requests().is_empty());
    }

    #[tokio::test]
    async fn test_display_name_follows_locale() {
        assert_eq!(
            dictionary(StaticHost::new("zh-CN"), 2).display_name().await,
            "Cambridge瑞典语-英语词典"
        );
        assert_eq!(
            dictionary(StaticHost::new("en-GB"), 2).display_name().await,
            "Cambridge Swedish-English Dictionary"
        );
    }
}
