//! Shared layout helpers: core grid, table scrolling, overlay placement.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{GAUGE_HEIGHT, MIN_TABLE_HEIGHT, OVERLAY_X_INDENT};

/// Screen regions of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    /// One cell per core, ascending core index, row-major.
    pub cores: Vec<Rect>,
    pub memory: Rect,
    pub table: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect, core_count: usize, cores_per_row: usize) -> Self {
        let per_row = cores_per_row.max(1);
        let grid_rows = core_count.div_ceil(per_row) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(grid_rows * GAUGE_HEIGHT), // Core grid
                Constraint::Length(GAUGE_HEIGHT),             // Memory gauge
                Constraint::Min(MIN_TABLE_HEIGHT),            // Process table
            ])
            .split(area);

        Self {
            cores: core_grid(chunks[0], core_count, per_row),
            memory: chunks[1],
            table: chunks[2],
        }
    }
}

/// Split `area` into `count` gauge cells, `per_row` to a row.
pub fn core_grid(area: Rect, count: usize, per_row: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let per_row = per_row.max(1);
    let rows = count.div_ceil(per_row);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(GAUGE_HEIGHT); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// First visible row of a list so that `selected` is on screen.
pub fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || selected < visible_rows {
        0
    } else {
        selected + 1 - visible_rows
    }
}

/// Content area of a bordered block.
pub fn bordered_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Screen row of table row `anchor_row`, clamped to the visible rows.
pub fn anchor_screen_row(table: Rect, anchor_row: usize, offset: usize) -> u16 {
    let inner = bordered_inner(table);
    let visible = inner.height.max(1) as usize;
    let index = anchor_row.saturating_sub(offset).min(visible - 1);
    inner.y + index as u16
}

/// Place the overlay with its top at `anchor_y`, shifted up by exactly the
/// number of rows it would otherwise hang below `region`.
pub fn overlay_rect(region: Rect, anchor_y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(region.width);
    let height = height.min(region.height);
    let bottom = region.y + region.height;

    let x = region.x + OVERLAY_X_INDENT.min(region.width - width);
    let top = anchor_y.clamp(region.y, bottom.saturating_sub(1).max(region.y));
    let overflow = (top + height).saturating_sub(bottom);

    Rect {
        x,
        y: top - overflow,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── overlay_rect ──────────────────────────────────────────────

    #[test]
    fn overlay_fits_below_anchor_unshifted() {
        let region = Rect::new(0, 10, 80, 20);
        let r = overlay_rect(region, 12, 40, 12);
        assert_eq!(r.y, 12);
        assert_eq!(r.height, 12);
        assert_eq!(r.width, 40);
        assert_eq!(r.x, OVERLAY_X_INDENT);
    }

    #[test]
    fn overlay_shifted_up_by_overflow() {
        // bottom = 30; naive 25..37 overflows by 7
        let region = Rect::new(0, 10, 80, 20);
        let r = overlay_rect(region, 25, 40, 12);
        assert_eq!(r.y, 18);
        assert_eq!(r.y + r.height, 30);
    }

    #[test]
    fn overlay_touching_bottom_is_not_shifted() {
        let region = Rect::new(0, 10, 80, 20);
        let r = overlay_rect(region, 18, 40, 12);
        assert_eq!(r.y, 18);
    }

    #[test]
    fn overlay_taller_than_region_is_capped() {
        let region = Rect::new(0, 10, 80, 6);
        let r = overlay_rect(region, 14, 40, 12);
        assert_eq!(r.height, 6);
        assert_eq!(r.y, 10);
    }

    #[test]
    fn overlay_narrow_region() {
        let region = Rect::new(5, 0, 30, 20);
        let r = overlay_rect(region, 2, 44, 12);
        assert_eq!(r.width, 30);
        assert_eq!(r.x, 5);
    }

    // ── scroll_offset / anchor ────────────────────────────────────

    #[test]
    fn scroll_offset_first_page() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
    }

    #[test]
    fn scroll_offset_keeps_selection_on_last_line() {
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
    }

    #[test]
    fn scroll_offset_zero_height() {
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn anchor_row_maps_inside_border() {
        let table = Rect::new(0, 10, 80, 12); // inner rows 11..=20
        assert_eq!(anchor_screen_row(table, 0, 0), 11);
        assert_eq!(anchor_screen_row(table, 3, 0), 14);
        assert_eq!(anchor_screen_row(table, 15, 6), 20);
    }

    #[test]
    fn anchor_row_clamped_when_scrolled_away() {
        let table = Rect::new(0, 10, 80, 12);
        assert_eq!(anchor_screen_row(table, 50, 0), 20);
        assert_eq!(anchor_screen_row(table, 2, 8), 11);
    }

    // ── layout ────────────────────────────────────────────────────

    #[test]
    fn core_grid_fills_rows() {
        let cells = core_grid(Rect::new(0, 0, 80, 6), 6, 4);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].y, 0);
        assert_eq!(cells[3].y, 0);
        assert_eq!(cells[4].y, 3);
        assert_eq!(cells[4].x, 0);
        assert!(cells.iter().all(|c| c.height == GAUGE_HEIGHT));
    }

    #[test]
    fn core_grid_empty() {
        assert!(core_grid(Rect::new(0, 0, 80, 6), 0, 4).is_empty());
    }

    #[test]
    fn layout_stacks_grid_memory_table() {
        let layout = DashboardLayout::compute(Rect::new(0, 0, 100, 40), 8, 4);
        assert_eq!(layout.cores.len(), 8);
        assert_eq!(layout.memory.y, 6);
        assert_eq!(layout.memory.height, GAUGE_HEIGHT);
        assert_eq!(layout.table.y, 9);
        assert_eq!(layout.table.height, 31);
    }

    #[test]
    fn bordered_inner_shrinks_by_one() {
        let inner = bordered_inner(Rect::new(2, 3, 10, 5));
        assert_eq!(inner, Rect::new(3, 4, 8, 3));
    }
}
