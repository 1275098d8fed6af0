// Port Layer - Interfaces for host platform collaborators

pub mod preference_store;
pub mod presentation_sink;
pub mod site_directory;
pub mod time_provider; // For deterministic testing
pub mod translator;

// Re-exports
pub use preference_store::PreferenceStore;
pub use presentation_sink::PresentationSink;
pub use site_directory::SiteDirectory;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use translator::Translator;
