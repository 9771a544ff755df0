use crate::logging::{LogEvent, LogFields, LogLevel};
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

/// Counters accumulated over an editing session.
#[derive(Debug, Default, Clone)]
pub struct EditorMetrics {
    pointer_events: u64,
    areas_created: u64,
    placements_rejected: u64,
    drags_cancelled: u64,
    areas_removed: u64,
    resets: u64,
    generations: u64,
}

impl EditorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pointer_event(&mut self) {
        self.pointer_events = self.pointer_events.saturating_add(1);
    }

    pub fn record_created(&mut self) {
        self.areas_created = self.areas_created.saturating_add(1);
    }

    pub fn record_rejected(&mut self) {
        self.placements_rejected = self.placements_rejected.saturating_add(1);
    }

    pub fn record_cancelled(&mut self) {
        self.drags_cancelled = self.drags_cancelled.saturating_add(1);
    }

    pub fn record_removed(&mut self) {
        self.areas_removed = self.areas_removed.saturating_add(1);
    }

    pub fn record_reset(&mut self) {
        self.resets = self.resets.saturating_add(1);
    }

    pub fn record_generation(&mut self) {
        self.generations = self.generations.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            pointer_events: self.pointer_events,
            areas_created: self.areas_created,
            placements_rejected: self.placements_rejected,
            drags_cancelled: self.drags_cancelled,
            areas_removed: self.areas_removed,
            resets: self.resets,
            generations: self.generations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub pointer_events: u64,
    pub areas_created: u64,
    pub placements_rejected: u64,
    pub drags_cancelled: u64,
    pub areas_removed: u64,
    pub resets: u64,
    pub generations: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "editor_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        match json!(self) {
            serde_json::Value::Object(map) => map,
            _ => LogFields::new(),
        }
    }
}
