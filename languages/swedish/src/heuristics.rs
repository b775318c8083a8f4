//! Text filters that tell real dictionary content apart from page chrome.

use std::sync::LazyLock;

use regex::Regex;

static PUNCTUATION_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[.,:;!?"\-\s]+$"#).unwrap());

static EXAMPLE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(see also|more examples|translation|pronunciation)$").unwrap()
});

static ENGLISH_NAVIGATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(dictionary|home|about|help|search|sign in|log in|menu|navigation|copyright|privacy|terms)$",
    )
    .unwrap()
});

static DEFINITION_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(is|are|means|refers to|used to|a type of|a kind of)\b").unwrap()
});

static ENGLISH_FUNCTION_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(the|and|or|to|of|in|for|with|on|at|by|from|as|is|are|was|were|be|been|have|has|had|do|does|did|will|would|could|should|may|might|can|must)\b",
    )
    .unwrap()
});

static SITE_NAVIGATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(hem|sök|kontakt|om|hjälp|login|logga in|registrera|search|home|about|help|contact|menu|nav|footer|header)$",
    )
    .unwrap()
});

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Example sentence worth showing
pub fn is_valid_example(text: &str) -> bool {
    if char_len(text) < 5 {
        return false;
    }
    if PUNCTUATION_ONLY.is_match(text) {
        return false;
    }
    !EXAMPLE_LABEL.is_match(text.trim())
}

/// Text that reads like a definition rather than a menu entry or page blurb
pub fn is_likely_definition(text: &str) -> bool {
    if ENGLISH_NAVIGATION.is_match(text.trim()) {
        return false;
    }

    let len = char_len(text);
    if len > 500 {
        return false;
    }

    DEFINITION_CUE.is_match(text) || len < 200
}

pub fn is_likely_english(text: &str) -> bool {
    let len = char_len(text);
    ENGLISH_FUNCTION_WORD.is_match(text) && len > 1 && len < 300
}

pub fn is_navigation_text(text: &str) -> bool {
    SITE_NAVIGATION.is_match(text.trim()) || text.contains('©') || text.contains("cookie")
}
