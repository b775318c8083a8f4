use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_locale() -> String {
    "en-US".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Locale reported to dictionaries for their display names
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let user_agent = env::var("ORDBOK_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let timeout_seconds = env::var("ORDBOK_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let locale = env::var("ORDBOK_LOCALE")
            .ok()
            .or_else(|| env::var("LANG").ok().map(|lang| locale_from_lang(&lang)))
            .filter(|l| !l.is_empty())
            .unwrap_or_else(default_locale);

        Self {
            user_agent,
            timeout_seconds,
            locale,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            locale: default_locale(),
        }
    }
}

/// "zh_CN.UTF-8" -> "zh-CN"
fn locale_from_lang(lang: &str) -> String {
    let base = lang.split('.').next().unwrap_or_default();
    if base == "C" || base == "POSIX" {
        return String::new();
    }
    base.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_lang() {
        assert_eq!(locale_from_lang("zh_CN.UTF-8"), "zh-CN");
        assert_eq!(locale_from_lang("sv_SE"), "sv-SE");
        assert_eq!(locale_from_lang("C.UTF-8"), "");
    }
}
