use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::ui::coordinator::ProcessListSpec;
use crate::ui::theme::Theme;

use super::helpers::{bordered_inner, scroll_offset};

/// Paint the process table and return the first visible row.
pub fn render_process_table(
    frame: &mut Frame,
    area: Rect,
    spec: &ProcessListSpec,
    t: &Theme,
) -> usize {
    let mut block = Block::default()
        .title(Span::styled(spec.title.clone(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_style());
    if let Some(footer) = &spec.footer {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", footer),
            t.status_style(),
        )));
    }

    let visible = bordered_inner(area).height as usize;
    let offset = spec
        .selected
        .map(|selected| scroll_offset(selected, visible))
        .unwrap_or(0);

    let items: Vec<ListItem> = spec
        .rows
        .iter()
        .map(|row| ListItem::new(row.as_str()).style(t.table_row_normal()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(t.table_row_selected());

    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(spec.selected);
    frame.render_stateful_widget(list, area, &mut state);

    offset
}
