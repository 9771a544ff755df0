//! Editing session: owns the grid config, the area registry and the selection
//! controller, and keeps the generated code in step with them.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use blake3::Hash;
use serde_json::json;

use crate::codegen::{self, LayoutCode, MarkupFlavor};
use crate::config::{Axis, Breakpoint, GridConfig};
use crate::error::Result;
use crate::geometry::Cell;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{EditorMetrics, MetricSnapshot};
use crate::registry::{Area, AreaId, AreaRegistry, Placement};
use crate::render::{CellPaint, paint_cell};
use crate::selection::{PointerEvent, SelectionController, SelectionOutcome};

const LOG_TARGET: &str = "gridcraft::editor";

/// Configuration knobs for an editing session.
#[derive(Clone, Debug)]
pub struct EditorSettings {
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Shared metrics accumulator; `None` disables counting.
    pub metrics: Option<Arc<Mutex<EditorMetrics>>>,
    /// Target used when emitting metrics snapshots.
    pub metrics_target: String,
    /// Markup dialect of generated code.
    pub flavor: MarkupFlavor,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            metrics_target: "gridcraft::editor.metrics".to_string(),
            flavor: MarkupFlavor::Html,
        }
    }
}

impl EditorSettings {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(EditorMetrics::new())));
        }
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<EditorMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Single-threaded editing session.
pub struct GridEditor {
    config: GridConfig,
    registry: AreaRegistry,
    selection: SelectionController,
    settings: EditorSettings,
    code: LayoutCode,
    fingerprint: Option<Hash>,
    code_stale: bool,
    started: Instant,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridEditor {
    pub fn new(config: GridConfig) -> Self {
        let registry = AreaRegistry::new(config.rows(), config.columns());
        Self {
            config,
            registry,
            selection: SelectionController::new(),
            settings: EditorSettings::default(),
            code: LayoutCode::empty(),
            fingerprint: None,
            code_stale: true,
            started: Instant::now(),
        }
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self.code_stale = true;
        self
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        self.code_stale = true;
        &mut self.settings
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn registry(&self) -> &AreaRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Change the grid extent. A real change discards every area.
    pub fn set_dimensions(&mut self, rows: i64, columns: i64) -> bool {
        let changed = self.config.resize(rows, columns);
        if changed {
            self.discard_areas("dimensions_changed");
        }
        changed
    }

    /// Discard every area and restart naming at `div1`.
    pub fn reset(&mut self) {
        self.discard_areas("grid_reset");
    }

    pub fn set_gap(&mut self, axis: Axis, pixels: i64) {
        self.config.set_gap(axis, pixels);
        self.code_stale = true;
    }

    pub fn set_responsive(&mut self, responsive: bool) {
        self.config.set_responsive(responsive);
        self.code_stale = true;
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint, enabled: bool) {
        self.config.set_breakpoint(breakpoint, enabled);
        self.code_stale = true;
    }

    pub fn set_flavor(&mut self, flavor: MarkupFlavor) {
        self.settings.flavor = flavor;
        self.code_stale = true;
    }

    /// Feed one pointer event through the selection state machine.
    pub fn pointer(&mut self, event: PointerEvent) -> SelectionOutcome {
        self.with_metrics(EditorMetrics::record_pointer_event);
        let outcome = self
            .selection
            .handle(event, &self.config, &mut self.registry);

        match &outcome {
            SelectionOutcome::Created(area) => {
                self.code_stale = true;
                self.with_metrics(EditorMetrics::record_created);
                self.log(
                    LogLevel::Info,
                    "area_created",
                    [
                        json_kv("id", area.id),
                        json_kv("name", area.name.as_str()),
                        json_kv("bounds", json!(area.bounds)),
                    ],
                );
            }
            SelectionOutcome::Rejected(placement) => {
                self.with_metrics(EditorMetrics::record_rejected);
                let reason = match placement {
                    Placement::Overlaps(id) => json!({ "overlaps": id }),
                    _ => json!("out_of_bounds"),
                };
                self.log(LogLevel::Debug, "placement_rejected", [json_kv("reason", reason)]);
            }
            SelectionOutcome::Cancelled => {
                self.with_metrics(EditorMetrics::record_cancelled);
                self.log(LogLevel::Debug, "drag_cancelled", std::iter::empty());
            }
            SelectionOutcome::Selected(id) => {
                self.log(LogLevel::Debug, "area_selected", [json_kv("id", *id)]);
            }
            SelectionOutcome::DragStarted(_)
            | SelectionOutcome::PreviewUpdated(_)
            | SelectionOutcome::Ignored => {}
        }

        outcome
    }

    pub fn select(&mut self, id: AreaId) -> Result<()> {
        self.registry.select(id)
    }

    pub fn deselect(&mut self) {
        self.registry.deselect();
    }

    pub fn remove_area(&mut self, id: AreaId) -> Result<Area> {
        let area = self.registry.remove(id)?;
        self.after_removal(&area);
        Ok(area)
    }

    pub fn remove_selected(&mut self) -> Option<Area> {
        let area = self.registry.remove_selected()?;
        self.after_removal(&area);
        Some(area)
    }

    /// How the cell should be drawn right now.
    pub fn paint(&self, cell: Cell) -> CellPaint {
        paint_cell(&self.registry, self.selection.preview(), cell)
    }

    /// Current generated code, regenerated first if anything changed.
    pub fn code(&mut self) -> &LayoutCode {
        if self.code_stale {
            self.regenerate();
        }
        &self.code
    }

    /// Regenerate unconditionally. Returns whether the output differs from the
    /// previous generation.
    pub fn regenerate(&mut self) -> bool {
        let areas = self.registry.snapshot();
        let code = codegen::generate_with(&self.config, &areas, self.settings.flavor);
        let fingerprint = code.fingerprint();
        let changed = self.fingerprint != Some(fingerprint);

        self.code = code;
        self.fingerprint = Some(fingerprint);
        self.code_stale = false;
        self.with_metrics(EditorMetrics::record_generation);
        self.log(
            LogLevel::Trace,
            "code_generated",
            [
                json_kv("areas", areas.len()),
                json_kv("changed", changed),
                json_kv("fingerprint", fingerprint.to_hex().as_str()),
            ],
        );
        changed
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.settings.metrics.as_ref()?;
        let guard = metrics.lock().ok()?;
        Some(guard.snapshot(self.started.elapsed()))
    }

    /// Push a metrics snapshot to the logger, if both are configured.
    pub fn emit_metrics(&self) {
        if let (Some(logger), Some(snapshot)) =
            (self.settings.logger.as_ref(), self.metrics_snapshot())
        {
            let _ = logger.log_event(snapshot.to_log_event(&self.settings.metrics_target));
        }
    }

    fn discard_areas(&mut self, reason: &str) {
        let cancelled = self.selection.cancel();
        let discarded = self.registry.len();
        self.registry
            .reset_extent(self.config.rows(), self.config.columns());
        self.code_stale = true;
        self.with_metrics(EditorMetrics::record_reset);
        self.log(
            LogLevel::Info,
            reason,
            [
                json_kv("rows", self.config.rows()),
                json_kv("columns", self.config.columns()),
                json_kv("discarded", discarded),
                json_kv("drag_cancelled", cancelled),
            ],
        );
    }

    fn after_removal(&mut self, area: &Area) {
        self.code_stale = true;
        self.with_metrics(EditorMetrics::record_removed);
        self.log(
            LogLevel::Info,
            "area_removed",
            [json_kv("id", area.id), json_kv("name", area.name.as_str())],
        );
    }

    fn with_metrics(&self, record: impl FnOnce(&mut EditorMetrics)) {
        if let Some(metrics) = self.settings.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut *guard);
            }
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.settings.logger.as_ref() {
            if logger.enabled(level) {
                let event = event_with_fields(level, LOG_TARGET, message, fields);
                let _ = logger.log_event(event);
            }
        }
    }
}
