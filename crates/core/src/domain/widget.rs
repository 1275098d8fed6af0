// Widget Registration Metadata

use serde::{Deserialize, Serialize};

/// Template rendered by the widget
pub const TEMPLATE_ID: &str = "currentLocalTime";

/// Message keys (host translation catalog)
pub mod message {
    pub const WIDGET_NAME: &str = "CurrentLocalTimeWidget_CurrentLocalTime";
    pub const LOCAL_LABEL: &str = "CurrentLocalTimeWidget_LocalLabel";
    pub const SITE_LABEL: &str = "CurrentLocalTimeWidget_SiteLabel";
}

pub const DEFAULT_CATEGORY: &str = "General_Visitors";
pub const DEFAULT_SUBCATEGORY: &str = "General_Overview";
pub const DEFAULT_ORDER: i32 = 1;

/// How the host lists the widget (category, name, ordering, availability)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub category_id: String,
    /// Shown in the UI only when set
    pub subcategory_id: Option<String>,
    pub name: String,
    /// Lower values are listed earlier within a category
    pub order: i32,
    pub enabled: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            category_id: DEFAULT_CATEGORY.to_string(),
            subcategory_id: Some(DEFAULT_SUBCATEGORY.to_string()),
            name: message::WIDGET_NAME.to_string(),
            order: DEFAULT_ORDER,
            enabled: true,
        }
    }
}

impl WidgetConfig {
    pub fn with_subcategory(mut self, subcategory_id: Option<String>) -> Self {
        self.subcategory_id = subcategory_id;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Listed in the UI (enabled and placed in a subcategory)
    pub fn is_visible(&self) -> bool {
        self.enabled && self.subcategory_id.is_some()
    }
}
