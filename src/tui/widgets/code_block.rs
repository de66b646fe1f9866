//! Preformatted snippet panel with an optional title bar.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::content::Snippet;

/// A snippet rendered as a title bar (when titled) followed by its code.
///
/// The language tag only shows inside a title bar.
#[derive(Debug, Clone, Copy)]
pub struct CodeBlock<'a> {
    snippet: &'a Snippet,
}

impl<'a> CodeBlock<'a> {
    pub fn new(snippet: &'a Snippet) -> Self {
        Self { snippet }
    }

    pub fn title_line(&self) -> Option<Line<'static>> {
        let title = self.snippet.title?;
        let mut spans = vec![Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White).bg(Color::DarkGray).bold(),
        )];
        if let Some(language) = self.snippet.language {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", language),
                Style::default().fg(Color::Gray).bg(Color::Black),
            ));
        }
        Some(Line::from(spans))
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let code_style = Style::default().fg(Color::Green);
        self.title_line()
            .into_iter()
            .chain(
                self.snippet
                    .code
                    .lines()
                    .map(|l| Line::from(Span::styled(format!("  {}", l), code_style))),
            )
            .collect()
    }

    /// Rows needed to draw the block without clipping.
    pub fn height(&self) -> usize {
        usize::from(self.snippet.title.is_some()) + self.snippet.code.lines().count()
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
