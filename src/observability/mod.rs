//! Observability for provmap
//!
//! Structured logging through `tracing`. Lifecycle events carry an
//! `event` field drawn from [`Event`] so they can be filtered by name.
//!
//! # Usage
//!
//! ```ignore
//! use provmap::observability::{self, Event, LogFormat};
//!
//! observability::init(LogFormat::Json);
//! observability::log_event(Event::BootStart);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init, LogFormat};

/// Log a lifecycle event.
///
/// Failure events are logged at ERROR, everything else at INFO.
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::error!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}
