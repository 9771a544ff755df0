use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::Result;
use crate::geometry::Cell;

/// Smallest allowed row/column count.
pub const MIN_TRACKS: u16 = 1;
/// Largest allowed row/column count.
pub const MAX_TRACKS: u16 = 12;

const DEFAULT_TRACKS: u16 = 8;

/// Gap axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal spacing between columns.
    Column,
    /// Vertical spacing between rows.
    Row,
}

/// Named responsive threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Fixed emission order used everywhere breakpoints are iterated.
    pub const ALL: [Breakpoint; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Xl];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Per-breakpoint enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub sm: bool,
    pub md: bool,
    pub lg: bool,
    pub xl: bool,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::all()
    }
}

impl Breakpoints {
    pub const fn all() -> Self {
        Self {
            sm: true,
            md: true,
            lg: true,
            xl: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            sm: false,
            md: false,
            lg: false,
            xl: false,
        }
    }

    pub fn is_enabled(&self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    pub fn set(&mut self, breakpoint: Breakpoint, enabled: bool) {
        let flag = match breakpoint {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        };
        *flag = enabled;
    }

    /// Enabled breakpoints in sm, md, lg, xl order.
    pub fn enabled(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter(move |bp| self.is_enabled(*bp))
    }
}

/// Grid extent, gaps and responsive settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GridConfigDocument")]
pub struct GridConfig {
    rows: u16,
    columns: u16,
    column_gap: u32,
    row_gap: u32,
    responsive: bool,
    breakpoints: Breakpoints,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKS, DEFAULT_TRACKS)
    }
}

impl GridConfig {
    /// Create a config with the given extent, clamped to `[MIN_TRACKS, MAX_TRACKS]`.
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows: clamp_tracks(rows as i64),
            columns: clamp_tracks(columns as i64),
            column_gap: 0,
            row_gap: 0,
            responsive: true,
            breakpoints: Breakpoints::all(),
        }
    }

    /// Parse a JSON document, sanitising every numeric field.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn gap(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Column => self.column_gap,
            Axis::Row => self.row_gap,
        }
    }

    pub fn column_gap(&self) -> u32 {
        self.column_gap
    }

    pub fn row_gap(&self) -> u32 {
        self.row_gap
    }

    pub fn responsive(&self) -> bool {
        self.responsive
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Change the extent. Returns `true` when either dimension actually
    /// changed, in which case every existing area must be discarded.
    pub fn resize(&mut self, rows: i64, columns: i64) -> bool {
        let rows = clamp_tracks(rows);
        let columns = clamp_tracks(columns);
        let changed = rows != self.rows || columns != self.columns;
        self.rows = rows;
        self.columns = columns;
        changed
    }

    /// Set a gap in pixels; negative input is clamped to zero.
    pub fn set_gap(&mut self, axis: Axis, pixels: i64) {
        let pixels = clamp_gap(pixels);
        match axis {
            Axis::Column => self.column_gap = pixels,
            Axis::Row => self.row_gap = pixels,
        }
    }

    pub fn set_responsive(&mut self, responsive: bool) {
        self.responsive = responsive;
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint, enabled: bool) {
        self.breakpoints.set(breakpoint, enabled);
    }

    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.breakpoints = breakpoints;
    }

    /// Breakpoints that participate in generation. Empty when not responsive.
    pub fn active_breakpoints(&self) -> Vec<Breakpoint> {
        if !self.responsive {
            return Vec::new();
        }
        self.breakpoints.enabled().collect()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.columns
    }

    /// Clamp arbitrary (possibly negative) coordinates into the grid extent.
    pub fn clamp_cell(&self, row: i64, col: i64) -> Cell {
        let row = row.clamp(0, self.rows as i64 - 1) as u16;
        let col = col.clamp(0, self.columns as i64 - 1) as u16;
        Cell::new(row, col)
    }
}

fn clamp_tracks(value: i64) -> u16 {
    value.clamp(MIN_TRACKS as i64, MAX_TRACKS as i64) as u16
}

fn clamp_gap(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// Wire shape accepted on load. Numeric fields take any JSON number so
/// fractional or out-of-range values are clamped instead of rejected.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct GridConfigDocument {
    rows: Number,
    columns: Number,
    column_gap: Number,
    row_gap: Number,
    responsive: bool,
    breakpoints: Breakpoints,
}

impl Default for GridConfigDocument {
    fn default() -> Self {
        Self {
            rows: Number::from(DEFAULT_TRACKS),
            columns: Number::from(DEFAULT_TRACKS),
            column_gap: Number::from(0),
            row_gap: Number::from(0),
            responsive: true,
            breakpoints: Breakpoints::all(),
        }
    }
}

/// Truncate toward zero and saturate at the `i64` range.
fn saturating_integer(number: &Number) -> i64 {
    if let Some(value) = number.as_i64() {
        value
    } else if number.as_u64().is_some() {
        i64::MAX
    } else {
        number.as_f64().map_or(0, |value| value as i64)
    }
}

impl From<GridConfigDocument> for GridConfig {
    fn from(doc: GridConfigDocument) -> Self {
        Self {
            rows: clamp_tracks(saturating_integer(&doc.rows)),
            columns: clamp_tracks(saturating_integer(&doc.columns)),
            column_gap: clamp_gap(saturating_integer(&doc.column_gap)),
            row_gap: clamp_gap(saturating_integer(&doc.row_gap)),
            responsive: doc.responsive,
            breakpoints: doc.breakpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn default_matches_editor_start_state() {
        let config = GridConfig::default();
        assert_eq!(config.rows(), 8);
        assert_eq!(config.columns(), 8);
        assert_eq!(config.column_gap(), 0);
        assert!(config.responsive());
        assert_eq!(config.breakpoints(), Breakpoints::all());
    }

    #[test]
    fn new_clamps_extent() {
        let config = GridConfig::new(0, 40);
        assert_eq!(config.rows(), MIN_TRACKS);
        assert_eq!(config.columns(), MAX_TRACKS);
    }

    #[test]
    fn resize_reports_change_only_when_dimensions_move() {
        let mut config = GridConfig::default();
        assert!(!config.resize(8, 8));
        assert!(config.resize(4, 8));
        assert_eq!(config.rows(), 4);
        assert!(config.resize(-3, 99));
        assert_eq!((config.rows(), config.columns()), (1, 12));
        assert!(!config.resize(0, 13));
    }

    #[test]
    fn negative_gaps_clamp_to_zero() {
        let mut config = GridConfig::default();
        config.set_gap(Axis::Column, -4);
        config.set_gap(Axis::Row, 10);
        assert_eq!(config.gap(Axis::Column), 0);
        assert_eq!(config.gap(Axis::Row), 10);
    }

    #[test]
    fn active_breakpoints_follow_fixed_order_and_responsive_flag() {
        let mut config = GridConfig::default();
        config.set_breakpoint(Breakpoint::Md, false);
        assert_eq!(
            config.active_breakpoints(),
            vec![Breakpoint::Sm, Breakpoint::Lg, Breakpoint::Xl]
        );
        config.set_responsive(false);
        assert!(config.active_breakpoints().is_empty());
    }

    #[test]
    fn clamp_cell_pins_coordinates_into_extent() {
        let config = GridConfig::new(3, 4);
        assert_eq!(config.clamp_cell(-1, 9), Cell::new(0, 3));
        assert_eq!(config.clamp_cell(7, 2), Cell::new(2, 2));
        assert!(config.contains(Cell::new(2, 3)));
        assert!(!config.contains(Cell::new(3, 0)));
    }

    #[test]
    fn json_load_sanitises_values() {
        let config = GridConfig::from_json(
            r#"{"rows": 30, "columns": 0, "column_gap": -5, "row_gap": 6,
                "breakpoints": {"sm": false}}"#,
        )
        .unwrap();
        assert_eq!(config.rows(), 12);
        assert_eq!(config.columns(), 1);
        assert_eq!(config.column_gap(), 0);
        assert_eq!(config.row_gap(), 6);
        assert!(config.responsive());
        assert!(!config.breakpoints().sm);
        assert!(config.breakpoints().xl);
    }

    #[test]
    fn json_load_clamps_fractional_and_huge_numbers() {
        let config = GridConfig::from_json(
            r#"{"rows": 4.0, "columns": 1e30, "column_gap": 6.9, "row_gap": -1e300}"#,
        )
        .unwrap();
        assert_eq!(config.rows(), 4);
        assert_eq!(config.columns(), 12);
        assert_eq!(config.column_gap(), 6);
        assert_eq!(config.row_gap(), 0);

        let config = GridConfig::from_json(r#"{"rows": 18446744073709551616, "columns": 2.7}"#)
            .unwrap();
        assert_eq!(config.rows(), 12);
        assert_eq!(config.columns(), 2);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let mut config = GridConfig::new(5, 6);
        config.set_gap(Axis::Row, 12);
        config.set_responsive(false);
        let text = config.to_json().unwrap();
        assert_eq!(GridConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = GridConfig::from_json("{rows: }").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }
}
