use serde::{Serialize, Deserialize};

/// A word list document, loadable from JSON.
///
/// Only `lexicon` is required; the rest is descriptive metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub brief: String,
    pub lexicon: Vec<String>
}
