use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;

pub mod dictionary;
pub mod network;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,

    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let log_json = env::var("ORDBOK_LOG_JSON")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Config {
            network: NetworkConfig::new(),
            dictionary: DictionaryConfig::default(),
            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            dictionary: DictionaryConfig::default(),
            log_json: false,
        }
    }
}
