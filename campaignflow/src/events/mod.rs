//! Event sink system for stage transitions.
//!
//! The stage engine stays pure; this module layers change detection on top
//! of it and hands the resulting events to a pluggable sink.

mod sink;
mod transitions;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
pub use transitions::{diff_stages, StageTracker, StageTransition, TransitionKind};

use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL_EVENT_SINK: RwLock<Option<Arc<dyn EventSink>>> = RwLock::new(None);

/// Sets the current global event sink.
pub fn set_event_sink(sink: Arc<dyn EventSink>) {
    *GLOBAL_EVENT_SINK.write() = Some(sink);
}

/// Clears the current global event sink.
pub fn clear_event_sink() {
    *GLOBAL_EVENT_SINK.write() = None;
}

/// Gets the current global event sink.
///
/// Returns a `NoOpEventSink` if no sink is set.
pub fn get_event_sink() -> Arc<dyn EventSink> {
    GLOBAL_EVENT_SINK
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(NoOpEventSink))
}

/// Installs the sink selected by the configuration.
///
/// With events disabled the global slot is cleared, so trackers built from
/// the global sink discard everything.
pub fn install_from_config(config: &crate::config::EngineConfig) {
    if config.emit_events {
        set_event_sink(Arc::new(LoggingEventSink::default()));
    } else {
        clear_event_sink();
    }
}
