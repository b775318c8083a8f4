use std::sync::Arc;

use anyhow::Context;
use ordbok_config::Config;
use ordbok_core::{DictionaryOptions, HostApi, OnlineDictionary, lookup_all};
use ordbok_http::HttpHost;
use ordbok_lang_swedish::{DICTIONARY_IDS, dictionary_by_id};

use crate::cli::ProfileAction;
use crate::output::{render_json, render_text};
use crate::profile;

/// Build dictionaries for `ids`, skipping unknown ones
pub fn build_dictionaries(
    ids: &[String],
    host: Arc<dyn HostApi>,
    options: DictionaryOptions,
) -> Vec<Box<dyn OnlineDictionary>> {
    ids.iter()
        .filter_map(|id| {
            let dictionary = dictionary_by_id(id, host.clone(), options);
            if dictionary.is_none() {
                tracing::warn!("Unknown dictionary '{}', known: {}", id, DICTIONARY_IDS.join(", "));
            }
            dictionary
        })
        .collect()
}

fn http_host(config: &Config) -> anyhow::Result<Arc<dyn HostApi>> {
    let host = HttpHost::new(&config.network).context("Failed to build HTTP client")?;
    Ok(Arc::new(host))
}

pub async fn handle_lookup(
    config: &Config,
    word: &str,
    sources: Vec<String>,
    max_examples: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let ids = if sources.is_empty() {
        config.dictionary.sources.clone()
    } else {
        sources
    };
    let options =
        DictionaryOptions::with_max_examples(max_examples.unwrap_or(config.dictionary.maxexample));

    let dictionaries = build_dictionaries(&ids, http_host(config)?, options);
    tracing::info!("Looking up '{}' in {} dictionaries", word, dictionaries.len());

    let notes = lookup_all(&dictionaries, word).await;
    tracing::debug!("Lookup returned {} notes", notes.len());

    if json {
        println!("{}", render_json(&notes)?);
    } else if notes.is_empty() {
        eprintln!("No results for '{word}'");
    } else {
        print!("{}", render_text(&notes));
    }

    Ok(())
}

pub async fn handle_sources(config: &Config) -> anyhow::Result<()> {
    let ids: Vec<String> = DICTIONARY_IDS.iter().map(|id| id.to_string()).collect();
    let dictionaries = build_dictionaries(&ids, http_host(config)?, DictionaryOptions::default());

    for dictionary in &dictionaries {
        let enabled = config.dictionary.sources.iter().any(|s| s == dictionary.id());
        println!(
            "{:<10} {}{}",
            dictionary.id(),
            dictionary.display_name().await,
            if enabled { "" } else { " (disabled)" }
        );
    }

    Ok(())
}

pub fn handle_profile(action: ProfileAction) -> anyhow::Result<()> {
    let root = profile::ordbok_root()?;

    let path = match action {
        ProfileAction::Init => profile::init_user_config(&root)?,
        ProfileAction::Add { name } => profile::add_profile_from_default(&root, &name)?,
    };
    println!("{}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use ordbok_core::host::StaticHost;

    use super::*;

    #[test]
    fn test_build_dictionaries_skips_unknown_ids() {
        let host: Arc<dyn HostApi> = Arc::new(StaticHost::new("en-US"));
        let ids = vec!["glosbe".to_string(), "lexin".to_string(), "cambridge".to_string()];

        let dictionaries = build_dictionaries(&ids, host, DictionaryOptions::default());
        let built: Vec<&str> = dictionaries.iter().map(|d| d.id()).collect();

        assert_eq!(built, ["glosbe", "cambridge"]);
    }
}
