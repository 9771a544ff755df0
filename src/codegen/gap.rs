//! Pixel gap to spacing-scale quantisation.

use crate::config::GridConfig;

/// Upper-bound pixel thresholds and the spacing-scale step they snap to.
const GAP_SCALE: [(u32, &str); 10] = [
    (1, "px"),
    (2, "0.5"),
    (4, "1"),
    (6, "1.5"),
    (8, "2"),
    (12, "3"),
    (16, "4"),
    (20, "5"),
    (24, "6"),
    (32, "8"),
];

const COARSEST_STEP: &str = "10";

/// Spacing-scale step for a pixel gap, `None` for a zero gap.
pub fn gap_scale(pixels: u32) -> Option<&'static str> {
    if pixels == 0 {
        return None;
    }
    let step = GAP_SCALE
        .iter()
        .find(|(limit, _)| pixels <= *limit)
        .map(|(_, step)| *step)
        .unwrap_or(COARSEST_STEP);
    Some(step)
}

/// Gap tokens for the container: one `gap-*` when both axes land on the same
/// step, otherwise `gap-x-*` / `gap-y-*` for each non-zero axis.
pub fn gap_classes(config: &GridConfig) -> Vec<String> {
    let column = gap_scale(config.column_gap());
    let row = gap_scale(config.row_gap());

    match (column, row) {
        (Some(x), Some(y)) if x == y => vec![format!("gap-{x}")],
        _ => column
            .map(|x| format!("gap-x-{x}"))
            .into_iter()
            .chain(row.map(|y| format!("gap-y-{y}")))
            .collect(),
    }
}
