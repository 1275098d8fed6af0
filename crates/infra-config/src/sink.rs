// Presentation sinks for command-line output

use chrono::{LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;
use sitetime_core::domain::{PresentationPayload, TEMPLATE_ID, TIMESTAMP_FORMAT};
use sitetime_core::error::{AppError, Result};
use sitetime_core::port::PresentationSink;

fn ensure_known(template: &str) -> Result<()> {
    if template == TEMPLATE_ID {
        Ok(())
    } else {
        Err(AppError::Render(format!("unknown template: {template}")))
    }
}

#[derive(Serialize)]
struct Rendered<'a> {
    template: &'a str,
    data: &'a PresentationPayload,
}

/// `{"template": ..., "data": {...}}`, pretty-printed
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresentationSink;

impl PresentationSink for JsonPresentationSink {
    fn render(&self, template: &str, payload: &PresentationPayload) -> Result<String> {
        ensure_known(template)?;
        serde_json::to_string_pretty(&Rendered {
            template,
            data: payload,
        })
        .map_err(|e| AppError::Render(e.to_string()))
    }
}

/// Two-line text panel.
///
/// The viewer line is recomputed from the site zone and timestamp, which is
/// what the browser does with the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresentationSink {
    viewer: Option<Tz>,
}

impl TextPresentationSink {
    pub fn new(viewer: Option<Tz>) -> Self {
        Self { viewer }
    }
}

impl PresentationSink for TextPresentationSink {
    fn render(&self, template: &str, payload: &PresentationPayload) -> Result<String> {
        ensure_known(template)?;
        let mut out = format!(
            "{}: {} ({})",
            payload.site_label, payload.site_date_time, payload.site_time_zone
        );
        if let Some(viewer) = self.viewer {
            if let Some(local) = viewer_time(payload, viewer)? {
                out.push_str(&format!(
                    "\n{}: {} ({})",
                    payload.local_label,
                    local,
                    viewer.name()
                ));
            }
        }
        Ok(out)
    }
}

/// Viewer-zone wall clock for the site timestamp.
///
/// `None` when the site time falls in a repeated (fall-back) hour: the
/// payload carries no offset, so the instant cannot be told apart.
fn viewer_time(payload: &PresentationPayload, viewer: Tz) -> Result<Option<String>> {
    let site_tz: Tz = payload
        .site_time_zone
        .parse()
        .map_err(|_| AppError::InvalidTimezone(payload.site_time_zone.clone()))?;
    let naive = NaiveDateTime::parse_from_str(&payload.site_date_time, TIMESTAMP_FORMAT)
        .map_err(|e| AppError::Render(format!("bad site timestamp: {e}")))?;
    let site_time = match site_tz.from_local_datetime(&naive) {
        LocalResult::Single(site_time) => site_time,
        LocalResult::Ambiguous(_, _) => return Ok(None),
        LocalResult::None => {
            return Err(AppError::Render(format!("nonexistent local time: {naive}")))
        }
    };
    Ok(Some(
        site_time
            .with_timezone(&viewer)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    ))
}
