use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::constants::{OVERLAY_BORDER_ROWS, OVERLAY_WIDTH};
use crate::ui::coordinator::OverlaySpec;
use crate::ui::theme::Theme;

use super::helpers::{anchor_screen_row, overlay_rect};

/// Signal picker anchored to its row of the process table.
pub fn render_signal_overlay(
    frame: &mut Frame,
    table: Rect,
    table_offset: usize,
    spec: &OverlaySpec,
    t: &Theme,
) {
    let anchor_y = anchor_screen_row(table, spec.anchor_row, table_offset);
    let height = (spec.items.len() as u16).saturating_add(OVERLAY_BORDER_ROWS);
    let popup_area = overlay_rect(table, anchor_y, OVERLAY_WIDTH, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", spec.title), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style());

    let items: Vec<ListItem> = spec
        .items
        .iter()
        .map(|item| ListItem::new(item.as_str()).style(t.table_row_normal()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(t.table_row_selected())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(spec.selected));
    frame.render_stateful_widget(list, popup_area, &mut state);
}
