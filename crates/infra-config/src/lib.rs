// Sitetime Infrastructure - Settings-backed Adapters
// Implements: SiteDirectory, PreferenceStore, Translator, PresentationSink

pub mod error;
pub mod preference_store;
pub mod settings;
pub mod site_directory;
pub mod sink;
pub mod translator;

pub use error::SettingsError;
pub use preference_store::ConfigPreferenceStore;
pub use settings::{SiteEntry, WidgetOverrides, WidgetSettings};
pub use site_directory::ConfigSiteDirectory;
pub use sink::{JsonPresentationSink, TextPresentationSink};
pub use translator::CatalogTranslator;
