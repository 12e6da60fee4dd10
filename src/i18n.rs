//! Translation lookup keyed by string identifiers

use std::collections::HashMap;
use tracing::debug;

/// Languages the app ships strings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Sinhala
    Si,
    /// Tamil
    Ta,
}

impl Language {
    /// Converts the enum to its language code
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Si => "si",
            Language::Ta => "ta",
        }
    }

    /// Converts a language code to a Language enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Language::En),
            "si" => Some(Language::Si),
            "ta" => Some(Language::Ta),
            _ => None,
        }
    }
}

/// String table lookup with English fallback
///
/// Unknown keys come back verbatim, so a missing translation shows up as
/// its identifier instead of breaking a screen.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Language,
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Translator {
    /// Creates a translator with no tables, in English
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the language (driven from the language screen)
    pub fn set_language(&mut self, language: Language) {
        debug!(language = language.as_str(), "language changed");
        self.language = language;
    }

    /// Inserts a single translation
    pub fn insert(&mut self, language: Language, key: &str, value: &str) {
        self.tables
            .entry(language)
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Merges a whole table for one language
    pub fn load_table(&mut self, language: Language, table: HashMap<String, String>) {
        self.tables.entry(language).or_default().extend(table);
    }

    /// Looks up a key: current language, then English, then the key itself
    pub fn translate(&self, key: &str) -> String {
        self.lookup(self.language, key)
            .or_else(|| self.lookup(Language::En, key))
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, language: Language, key: &str) -> Option<String> {
        self.tables.get(&language)?.get(key).cloned()
    }
}
