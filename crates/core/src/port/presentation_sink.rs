// Presentation Sink Port

use crate::domain::PresentationPayload;
use crate::error::Result;

/// Template rendering side of the host
#[cfg_attr(test, mockall::automock)]
pub trait PresentationSink: Send + Sync {
    fn render(&self, template: &str, payload: &PresentationPayload) -> Result<String>;
}
