// Domain Layer - Pure values and entities

pub mod payload;
pub mod site;
pub mod timestamp;
pub mod widget;

// Re-exports
pub use payload::PresentationPayload;
pub use site::{SiteId, TimezoneName};
pub use timestamp::{LocalTimestamp, TIMESTAMP_FORMAT};
pub use widget::{message, WidgetConfig, TEMPLATE_ID};
