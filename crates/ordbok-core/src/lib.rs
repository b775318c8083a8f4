pub mod dictionary;
pub mod error;
pub mod host;
pub mod note;
pub mod preprocess;
pub mod select;
pub mod text;

pub use dictionary::{DictionaryOptions, OnlineDictionary, lookup_all};
pub use error::FetchError;
pub use host::HostApi;
pub use note::Note;
pub use select::SelectorChain;
pub use text::Highlighter;
