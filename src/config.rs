//! Configuration for assembling an [`App`](crate::api::App)

use crate::i18n::Language;
use std::path::PathBuf;

/// App-level settings
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Where the persisted flags live; `None` keeps them in memory only
    pub storage_path: Option<PathBuf>,
    /// Language selected at startup
    pub language: Language,
}

impl AppConfig {
    /// Creates a config with in-memory storage and English strings
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file the persisted flags are kept in
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Sets the startup language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = AppConfig::new()
            .with_storage_path("/tmp/quickbite.json")
            .with_language(Language::Ta);

        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/quickbite.json")));
        assert_eq!(config.language, Language::Ta);
    }
}
