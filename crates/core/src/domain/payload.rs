// Presentation Payload

use serde::Serialize;

/// Values handed to the `currentLocalTime` template.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationPayload {
    /// Raw zone name, sent along so the client can recompute the offset
    pub site_time_zone: String,
    pub site_date_time: String,
    pub local_label: String,
    pub site_label: String,
}
