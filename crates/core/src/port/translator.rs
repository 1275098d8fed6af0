// Translator Port

/// Message key lookup for the current locale
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    /// Localized text for `key`; unknown keys come back unchanged
    fn translate(&self, key: &str) -> String;
}
