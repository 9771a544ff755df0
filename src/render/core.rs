use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::geometry::{Bounds, Cell};
use crate::registry::{Area, AreaId, AreaRegistry};

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `h` in degrees, `s` and `l` in `0.0..=1.0`.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = (h.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

const DRAFT_COLOR: Rgb = Rgb::new(100, 200, 255);
const SELECTED_HUE: f32 = 120.0;

/// How a single cell should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellPaint {
    Empty,
    /// Inside the live drag rectangle and not covered by an area.
    Draft,
    Area {
        id: AreaId,
        selected: bool,
        /// `.divN`, present only on the area's top-left cell.
        label: Option<String>,
    },
}

impl CellPaint {
    pub fn background(&self) -> Option<Rgb> {
        match self {
            Self::Empty => None,
            Self::Draft => Some(DRAFT_COLOR),
            Self::Area { id, selected, .. } => Some(area_color(*id, *selected)),
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::Area {
                label: Some(label), ..
            } => label,
            Self::Empty => ".",
            _ => "",
        }
    }
}

/// Distinct hue per id, spread 40 degrees apart; selected areas share a green hue.
fn area_color(id: AreaId, selected: bool) -> Rgb {
    let hue = if selected {
        SELECTED_HUE
    } else {
        ((id as u64 * 40) % 360) as f32
    };
    let lightness = (20 + (id as u64 * 10) % 30) as f32 / 100.0;
    Rgb::from_hsl(hue, 0.6, lightness)
}

/// Classify `cell`. Areas win over the drag preview.
pub fn paint_cell(registry: &AreaRegistry, preview: Option<Bounds>, cell: Cell) -> CellPaint {
    if let Some(area) = registry.find_at_cell(cell) {
        return area_paint(registry, area, cell);
    }
    match preview {
        Some(bounds) if bounds.contains(cell) => CellPaint::Draft,
        _ => CellPaint::Empty,
    }
}

fn area_paint(registry: &AreaRegistry, area: &Area, cell: Cell) -> CellPaint {
    CellPaint::Area {
        id: area.id,
        selected: registry.selected() == Some(area.id),
        label: (area.bounds.top_left() == cell).then(|| format!(".{}", area.name)),
    }
}

/// Terminal width of `text` once ANSI escapes are stripped.
pub fn display_width(text: &str) -> usize {
    let plain = strip_ansi_escapes::strip(text);
    unicode_width::UnicodeWidthStr::width(&*String::from_utf8_lossy(&plain))
}

/// Placement of grid cells on the terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            cell_width: 8,
            cell_height: 2,
        }
    }
}

impl CellGeometry {
    /// Grid cell under the terminal position, if it falls inside a `rows` x `cols` grid.
    pub fn cell_at(&self, column: u16, row: u16, rows: u16, cols: u16) -> Option<Cell> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        let dx = column.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;
        let cell = Cell::new(dy / self.cell_height, dx / self.cell_width);
        (cell.row < rows && cell.col < cols).then_some(cell)
    }
}

/// Draws the grid as coloured blocks with area labels.
#[derive(Debug, Clone, Default)]
pub struct GridPreview {
    geometry: CellGeometry,
}

impl GridPreview {
    pub fn new(geometry: CellGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    pub fn render(
        &self,
        writer: &mut impl Write,
        registry: &AreaRegistry,
        preview: Option<Bounds>,
    ) -> Result<()> {
        let (rows, cols) = registry.extent();
        let CellGeometry {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
        } = self.geometry;
        if origin_x == u16::MAX {
            return Ok(());
        }

        'rows: for row in 0..rows {
            for line in 0..cell_height {
                let Some(y) = terminal_row(origin_y, row, cell_height, line) else {
                    break 'rows;
                };
                queue!(writer, MoveTo(origin_x, y))?;
                for col in 0..cols {
                    let paint = paint_cell(registry, preview, Cell::new(row, col));
                    let text = if line == 0 { paint.label() } else { "" };
                    let padded = fit_to_width(text, cell_width as usize);
                    match paint.background() {
                        Some(Rgb { r, g, b }) => queue!(
                            writer,
                            SetBackgroundColor(Color::Rgb { r, g, b }),
                            Print(padded),
                            ResetColor
                        )?,
                        None => queue!(writer, Print(padded))?,
                    }
                }
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// Terminal row of `line` within grid `row`, or `None` once it falls past the
/// last addressable row.
fn terminal_row(origin_y: u16, row: u16, cell_height: u16, line: u16) -> Option<u16> {
    row.checked_mul(cell_height)?
        .checked_add(origin_y)?
        .checked_add(line)
        .filter(|y| *y < u16::MAX)
}

/// Truncate or pad `text` to exactly `width` terminal columns.
fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    while display_width(&out) < width {
        out.push(' ');
    }
    out
}
