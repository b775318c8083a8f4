use std::sync::Arc;

use async_trait::async_trait;
use ordbok_core::dictionary::DisplayNames;
use ordbok_core::preprocess::{DefaultPreprocessor, Preprocessor};
use ordbok_core::text::{escape_html, inner_text};
use ordbok_core::{DictionaryOptions, Highlighter, HostApi, Note, OnlineDictionary, SelectorChain};
use scraper::Html;

use crate::style::GLOSBE_CSS;

const SEARCH_BASE: &str = "https://glosbe.com/sv/en/";
const AUDIO_BASE: &str = "https://glosbe.com/fb_aud/mp3/";

const NAMES: DisplayNames = DisplayNames {
    simplified_chinese: "Glosbe 瑞典语-英语词典",
    traditional_chinese: "Glosbe 瑞典語-英語詞典",
    english: "Glosbe Swedish-English Dictionary",
};

struct Selectors {
    body: SelectorChain,
    audio_button: SelectorChain,
    phrases: SelectorChain,
    examples: SelectorChain,
    swedish_sentence: SelectorChain,
    paragraphs: SelectorChain,
}

impl Selectors {
    fn new() -> Self {
        Self {
            body: SelectorChain::new(&["body"]),
            audio_button: SelectorChain::new(&["button[data-file]"]),
            phrases: SelectorChain::new(&["h3.translation__item__pharse"]),
            examples: SelectorChain::new(&["div.translation__example"]),
            swedish_sentence: SelectorChain::new(&[r#"p[lang="sv"]"#]),
            paragraphs: SelectorChain::new(&["p"]),
        }
    }
}

/// Glosbe Swedish-English translation memory
pub struct GlosbeDictionary {
    host: Arc<dyn HostApi>,
    options: DictionaryOptions,
    selectors: Selectors,
}

impl GlosbeDictionary {
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

    pub fn parse_page(&self, word: &str, page: &str) -> Vec<Note> {
        let doc = Html::parse_document(page);
        let root = doc.root_element();
        let s = &self.selectors;

        if s.body.first(root).is_none() {
            return Vec::new();
        }

        let audios: Vec<String> = s
            .audio_button
            .first(root)
            .and_then(|button| button.value().attr("data-file"))
            .filter(|file| !file.is_empty())
            .map(|file| format!("{AUDIO_BASE}{file}"))
            .into_iter()
            .collect();

        let highlighter = Highlighter::anywhere(word);
        let show_examples = self.options.max_examples() > 0;
        let examples = s.examples.all(root);
        let mut definitions = Vec::new();

        // Phrases and example blocks are paired by position on the page
        for (i, phrase) in s.phrases.all(root).into_iter().enumerate() {
            let text = inner_text(Some(phrase));
            if text.is_empty() {
                continue;
            }

            let mut definition = format!(
                r#"<span class="tran"><span class="eng_tran">{}</span></span>"#,
                highlighter.apply(&text)
            );

            if let Some(&example) = examples.get(i).filter(|_| show_examples) {
                let swedish = inner_text(s.swedish_sentence.first(example));
                let paragraphs = s.paragraphs.all(example);
                let english = if paragraphs.len() > 1 {
                    inner_text(paragraphs.last().copied())
                } else {
                    String::new()
                };

                if !swedish.is_empty() && !english.is_empty() {
                    definition.push_str(&format!(
                        concat!(
                            r#"<ul class="sents"><li class="sent">"#,
                            r#"<span class="sv_sent">{}</span><br>"#,
                            r#"<span class="eng_sent">{}</span>"#,
                            "</li></ul>",
                        ),
                        highlighter.apply(&swedish),
                        escape_html(&english)
                    ));
                }
            }

            definitions.push(definition);
        }

        if definitions.is_empty() {
            tracing::debug!("Glosbe: no translations for '{}'", word);
            return Vec::new();
        }

        vec![Note {
            css: GLOSBE_CSS.to_string(),
            expression: word.to_string(),
            reading: String::new(),
            extrainfo: String::new(),
            definitions,
            audios,
        }]
    }
}

#[async_trait]
impl OnlineDictionary for GlosbeDictionary {
    fn id(&self) -> &'static str {
        "glosbe"
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
                tracing::warn!("Glosbe lookup for '{}' failed: {}", word, e);
                return Vec::new();
            }
        };

        self.parse_page(&word, &page)
    }
}
