//! Log capture for asserting on diagnostic output
//!
//! Install a [`LogCapture`] as the thread's default subscriber, run the code
//! under test, then inspect what was logged.
//!
//! ```
//! use primer_testing::LogCapture;
//! use tracing::Level;
//!
//! let capture = LogCapture::new();
//! tracing::subscriber::with_default(capture.subscriber(), || {
//!     tracing::error!("fetch failed");
//! });
//!
//! assert_eq!(capture.count_at(Level::ERROR), 1);
//! assert_eq!(capture.records()[0].message, "fetch failed");
//! ```
//!
//! Under `#[tokio::test]` the runtime is single threaded, so tasks spawned by
//! a store are polled on the test thread and their events are captured too
//! when the subscriber is installed with [`tracing::subscriber::set_default`].

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

/// A single captured event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    /// Event level
    pub level: Level,
    /// Event target (module path unless overridden)
    pub target: String,
    /// Formatted `message` field
    pub message: String,
    /// Remaining fields, formatted as `name=value`
    pub fields: Vec<String>,
}

/// Tracing layer that records every event it sees
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<CapturedLog>>>,
}

impl LogCapture {
    /// Create an empty capture
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber that forwards every event to this capture
    #[must_use]
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        Registry::default().with(self.clone())
    }

    /// Everything captured so far, in emission order
    #[must_use]
    pub fn records(&self) -> Vec<CapturedLog> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of events captured at exactly `level`
    #[must_use]
    pub fn count_at(&self, level: Level) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|record| record.level == level)
            .count()
    }

    /// Whether any captured message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|record| record.message.contains(needle))
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedLog {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message: visitor.message,
                fields: visitor.fields,
            });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_level_message_and_fields() {
        let capture = LogCapture::new();
        tracing::subscriber::with_default(capture.subscriber(), || {
            tracing::warn!(attempt = 2, "slow response");
            tracing::debug!("reduced");
        });

        let records = capture.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::WARN);
        assert_eq!(records[0].message, "slow response");
        assert_eq!(records[0].fields, vec!["attempt=2".to_string()]);
        assert_eq!(capture.count_at(Level::DEBUG), 1);
        assert!(capture.contains("reduced"));
    }

    #[test]
    fn separate_captures_do_not_share_records() {
        let first = LogCapture::new();
        let second = LogCapture::new();

        tracing::subscriber::with_default(first.subscriber(), || {
            tracing::error!("only in first");
        });

        assert_eq!(first.count_at(Level::ERROR), 1);
        assert!(second.records().is_empty());
    }
}
