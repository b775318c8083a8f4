use serde::{Deserialize, Serialize};

fn default_maxexample() -> usize {
    2
}

pub fn default_sources() -> Vec<String> {
    ["cambridge", "tyda", "glosbe"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Examples rendered per definition, 0 disables them
    #[serde(default = "default_maxexample")]
    pub maxexample: usize,
    /// Dictionary ids queried when none are given explicitly
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            maxexample: default_maxexample(),
            sources: default_sources(),
        }
    }
}
