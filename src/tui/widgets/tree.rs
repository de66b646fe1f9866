//! Tree widget for the project structure panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Widget},
};

use crate::tree::{indent, Icons, TreeRow};

/// Renders visible tree rows, keeping the selected row on screen.
pub struct TreeWidget<'a> {
    rows: &'a [TreeRow],
    selected: Option<usize>,
    icons: Icons,
    block: Option<Block<'a>>,
}

impl<'a> TreeWidget<'a> {
    pub fn new(rows: &'a [TreeRow]) -> Self {
        Self {
            rows,
            selected: None,
            icons: Icons::default(),
            block: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for TreeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        let height = inner.height as usize;
        let offset = calculate_scroll_offset(self.selected.unwrap_or(0), height, self.rows.len());

        for (i, row) in self.rows.iter().skip(offset).take(height).enumerate() {
            let y = inner.y + i as u16;
            let is_selected = self.selected == Some(offset + i);
            render_row(row, &self.icons, is_selected, Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}

fn render_row(row: &TreeRow, icons: &Icons, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let (name_style, icon_style) = if row.is_folder() {
        (
            Style::default().fg(Color::White).bold(),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::Blue),
        )
    };

    let spans = vec![
        Span::raw(indent(row.depth)),
        Span::styled(
            format!("{} ", icons.marker(row.disclosure())),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("{} ", icons.kind(row.is_folder())), icon_style),
        Span::styled(row.name.clone(), name_style),
    ];

    let mut line = Line::from(spans);
    if is_selected {
        line = line.style(Style::default().bg(Color::DarkGray));
    }

    Paragraph::new(line).render(area, buf);
}

/// First row to draw so that `selected` stays visible with a little padding.
pub fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected
            .saturating_sub(padding)
            .min(total.saturating_sub(visible_height))
    }
}
