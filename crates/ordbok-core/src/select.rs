//! Ordered CSS selector strategies.
//!
//! Dictionary pages change markup often, so every lookup names several
//! selectors in order of preference. A chain tries them one after another and
//! stops at the first that matches something.

use scraper::{ElementRef, Selector};

pub struct SelectorChain {
    strategies: Vec<(String, Selector)>,
}

impl SelectorChain {
    /// Parse each pattern once. Patterns that fail to parse are dropped.
    pub fn new(patterns: &[&str]) -> Self {
        let strategies = patterns
            .iter()
            .filter_map(|pattern| match Selector::parse(pattern) {
                Ok(selector) => Some((pattern.to_string(), selector)),
                Err(e) => {
                    tracing::warn!("Skipping invalid selector '{}': {:?}", pattern, e);
                    None
                }
            })
            .collect();

        Self { strategies }
    }

    /// First element matched by the first strategy that matches anything
    pub fn first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.strategies.iter().find_map(|(pattern, selector)| {
            let found = scope.select(selector).next();
            if found.is_some() {
                tracing::trace!("Selector '{}' matched", pattern);
            }
            found
        })
    }

    /// All elements of the first strategy yielding a non-empty list
    pub fn all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for (pattern, selector) in &self.strategies {
            let found: Vec<ElementRef<'a>> = scope.select(selector).collect();
            if !found.is_empty() {
                tracing::trace!("Selector '{}' matched {} elements", pattern, found.len());
                return found;
            }
        }
        Vec::new()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// Parent node of `element` if it is an element
pub fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}
