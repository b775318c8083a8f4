use futures::future::join_all;

use crate::note::Note;

pub const DEFAULT_MAX_EXAMPLES: usize = 2;

/// An online dictionary that scrapes one website
#[async_trait::async_trait]
pub trait OnlineDictionary: Send + Sync {
    /// Stable short identifier, e.g. "cambridge"
    fn id(&self) -> &'static str;

    /// Name shown to the user, localized through the host
    async fn display_name(&self) -> String;

    /// Replace lookup options
    fn set_options(&mut self, options: DictionaryOptions);

    /// Look up a word. Failures are logged and yield no notes.
    async fn find_term(&self, word: &str) -> Vec<Note>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryOptions {
    pub maxexample: Option<usize>,
}

impl DictionaryOptions {
    pub fn with_max_examples(maxexample: usize) -> Self {
        Self {
            maxexample: Some(maxexample),
        }
    }

    pub fn max_examples(&self) -> usize {
        self.maxexample.unwrap_or(DEFAULT_MAX_EXAMPLES)
    }
}

/// Localized display names of one dictionary
#[derive(Debug, Clone, Copy)]
pub struct DisplayNames {
    pub simplified_chinese: &'static str,
    pub traditional_chinese: &'static str,
    pub english: &'static str,
}

impl DisplayNames {
    pub fn for_locale(&self, locale: &str) -> &'static str {
        if locale.contains("CN") {
            self.simplified_chinese
        } else if locale.contains("TW") {
            self.traditional_chinese
        } else {
            self.english
        }
    }
}

/// Run every dictionary on `word` concurrently, keeping dictionary order
pub async fn lookup_all(dictionaries: &[Box<dyn OnlineDictionary>], word: &str) -> Vec<Note> {
    let lookups = dictionaries.iter().map(|dictionary| async move {
        let notes = dictionary.find_term(word).await;
        tracing::debug!("{}: {} notes for '{}'", dictionary.id(), notes.len(), word);
        notes
    });

    join_all(lookups).await.into_iter().flatten().collect()
}
