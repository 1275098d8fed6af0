//! Message catalog translator
//!
//! Catalogs use the host's language file shape, grouped by plugin:
//!
//! ```json
//! { "CurrentLocalTimeWidget": { "LocalLabel": "Your local time" } }
//! ```
//!
//! and are looked up by `Plugin_Key` (`CurrentLocalTimeWidget_LocalLabel`).

use crate::error::SettingsError;
use sitetime_core::port::Translator;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const ENGLISH: &str = include_str!("../lang/en.json");

#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    /// Built-in English catalog
    pub fn english() -> Result<Self, SettingsError> {
        let mut translator = Self::default();
        translator.merge_json(ENGLISH)?;
        Ok(translator)
    }

    /// English catalog with `path` laid over it
    pub fn with_catalog_file(path: &Path) -> Result<Self, SettingsError> {
        let mut translator = Self::english()?;
        let json = std::fs::read_to_string(path)?;
        translator.merge_json(&json)?;
        debug!(path = %path.display(), messages = translator.len(), "Catalog loaded");
        Ok(translator)
    }

    /// Add (or replace) every message in `json`
    pub fn merge_json(&mut self, json: &str) -> Result<(), SettingsError> {
        let groups: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        for (plugin, messages) in groups {
            for (key, text) in messages {
                self.messages.insert(format!("{plugin}_{key}"), text);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(text) => text.clone(),
            None => key.to_string(),
        }
    }
}
