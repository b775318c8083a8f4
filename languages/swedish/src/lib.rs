pub mod cambridge;
pub mod glosbe;
pub mod heuristics;
pub mod style;
pub mod tyda;

use std::sync::Arc;

use ordbok_core::{DictionaryOptions, HostApi, OnlineDictionary};

pub use cambridge::CambridgeDictionary;
pub use glosbe::GlosbeDictionary;
pub use tyda::TydaDictionary;

/// Ids of every Swedish-English dictionary, in lookup order
pub const DICTIONARY_IDS: [&str; 3] = ["cambridge", "tyda", "glosbe"];

/// Build the dictionary registered under `id`
pub fn dictionary_by_id(
    id: &str,
    host: Arc<dyn HostApi>,
    options: DictionaryOptions,
) -> Option<Box<dyn OnlineDictionary>> {
    let dictionary: Box<dyn OnlineDictionary> = match id {
        "cambridge" => Box::new(CambridgeDictionary::new(host, options)),
        "tyda" => Box::new(TydaDictionary::new(host, options)),
        "glosbe" => Box::new(GlosbeDictionary::new(host, options)),
        _ => return None,
    };
    Some(dictionary)
}
