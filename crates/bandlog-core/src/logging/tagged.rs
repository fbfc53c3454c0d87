//! Logger bound to one tag

use super::traits::Logger;
use crate::detail::ErrorDetail;
use crate::dispatcher::Dispatcher;
use crate::level::Severity;

/// A `Logger` that sends every call through a dispatcher under a fixed tag
#[derive(Debug, Clone)]
pub struct TaggedLogger<'d> {
    dispatcher: &'d Dispatcher,
    tag: String,
}

impl<'d> TaggedLogger<'d> {
    pub fn new(dispatcher: &'d Dispatcher, tag: impl Into<String>) -> Self {
        Self {
            dispatcher,
            tag: tag.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Same dispatcher, different tag
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        Self::new(self.dispatcher, tag)
    }

    /// Log an error using its own message
    pub fn error(&self, severity: Severity, detail: &ErrorDetail) {
        self.dispatcher.log_error(severity, &self.tag, detail);
    }
}

impl Logger for TaggedLogger<'_> {
    fn log(&self, severity: Severity, message: &str) {
        self.dispatcher.log(severity, &self.tag, message);
    }

    fn log_detail(&self, severity: Severity, message: &str, detail: &ErrorDetail) {
        self.dispatcher.log_with_error(severity, &self.tag, message, detail);
    }
}
