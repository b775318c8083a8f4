use serde::{Deserialize, Serialize};

/// Normalized lookup result handed back to the host for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Inline `<style>` block for rendering
    pub css: String,
    /// Resolved headword
    pub expression: String,
    /// Pronunciation, may be empty
    pub reading: String,
    /// Optional HTML fragment such as a frequency tag
    pub extrainfo: String,
    /// HTML fragments, one per sense or translation
    pub definitions: Vec<String>,
    /// Absolute audio URLs
    pub audios: Vec<String>,
}
