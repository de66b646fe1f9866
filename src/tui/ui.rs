//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::content::{self, page, page::GuideBody, TabContent};
use crate::router::Route;

use super::app::{App, Focus, Mode, Section};
use super::widgets::{tabs::render_tab_bar, CodeBlock, TreeWidget};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Page
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    match &app.route {
        Route::Index => render_index(app, frame, chunks[1]),
        Route::NotFound { .. } => render_not_found(frame, chunks[1]),
    }
    render_footer(app, frame, chunks[2]);

    if app.mode == Mode::Help && !app.route.is_not_found() {
        render_help_overlay(frame);
    }
}

fn focus_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::Gray
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", page::HEADER_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let line = Line::from(vec![
        Span::styled(format!(" {}", app.route), Style::default().fg(Color::White)),
        Span::raw("  │  "),
        Span::styled(
            format!("{}: {}", page::GITHUB_LABEL, page::GITHUB_URL),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_index(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hero
            Constraint::Length(6), // Feature cards
            Constraint::Min(1),    // Section
        ])
        .split(area);

    render_hero(frame, chunks[0]);
    render_feature_cards(frame, chunks[1]);

    match app.section {
        Section::Overview => render_overview(app, frame, chunks[2]),
        Section::Guide => render_guide(app, frame, chunks[2]),
    }
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            page::HERO_TITLE,
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(Span::styled(
            page::HERO_SUBTITLE,
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_feature_cards(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (card, column) in page::FEATURE_CARDS.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", card.title),
                Style::default().fg(Color::Green).bold(),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                card.description,
                Style::default().fg(Color::Gray).italic(),
            )),
            Line::from(card.body),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, *column);
    }
}

fn render_overview(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let heading = Paragraph::new(Span::styled(page::OVERVIEW_TITLE, Style::default().bold()))
        .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(rows[1]);

    let tree_block = Block::default()
        .title(format!(" {} ", page::STRUCTURE_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(focus_color(app.focus == Focus::Tree)));

    let tree = TreeWidget::new(&app.rows)
        .selected(Some(app.selected))
        .icons(app.icons)
        .block(tree_block);
    frame.render_widget(tree, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(columns[1]);

    let tabs_focused = app.focus == Focus::Tabs;
    render_tab_bar(&app.tabs, tabs_focused, frame, right[0]);
    render_tab_card(app, tabs_focused, frame, right[1]);
}

fn render_tab_card(app: &App, focused: bool, frame: &mut Frame, area: Rect) {
    let Some(tab) = content::tab(app.tabs.selected().id) else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", tab.title),
            Style::default().bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(focus_color(focused)));

    let paragraph = Paragraph::new(tab_card_lines(tab))
        .block(block)
        .scroll((app.code_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_guide(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", page::GUIDE_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(guide_lines())
        .block(block)
        .scroll((app.guide_scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Content of a tab card: description, then each snippet followed by a blank.
pub fn tab_card_lines(tab: &TabContent) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            tab.description,
            Style::default().fg(Color::Gray).italic(),
        )),
        Line::default(),
    ];
    for snippet in tab.snippets {
        lines.extend(CodeBlock::new(snippet).lines());
        lines.push(Line::default());
    }
    lines
}

/// Content of the Getting Started section.
pub fn guide_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for step in &page::GUIDE_STEPS {
        lines.push(Line::from(Span::styled(step.title, Style::default().bold())));
        match &step.body {
            GuideBody::List(items) => {
                lines.extend(items.iter().map(|item| Line::from(format!("  • {}", item))));
            }
            GuideBody::Code(snippet) => lines.extend(CodeBlock::new(snippet).lines()),
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", page::GUIDE_ACTION),
        Style::default().fg(Color::Black).bg(Color::Green),
    )));
    lines
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let width = 64u16.min(area.width);
    let height = 11u16.min(area.height);
    let dialog = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            page::not_found::CODE,
            Style::default().fg(Color::Green).bold(),
        )),
        Line::default(),
        Line::from(Span::styled(page::not_found::TITLE, Style::default().bold())),
        Line::default(),
        Line::from(Span::styled(
            page::not_found::MESSAGE,
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("[ {} ]", page::not_found::ACTION),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, dialog);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = if app.route.is_not_found() {
        "[Enter] Back to Home  [q] Quit"
    } else {
        match (app.mode, app.section, app.focus) {
            (Mode::Help, _, _) => "[Esc] Close",
            (_, Section::Guide, _) => "[↑↓] Scroll  [1] Overview  [?] Help  [q] Quit",
            (_, Section::Overview, Focus::Tree) => {
                "[↑↓] Navigate  [Enter] Toggle  [Tab] Code  [2] Getting Started  [?] Help  [q] Quit"
            }
            (_, Section::Overview, Focus::Tabs) => {
                "[←→] Switch tab  [↑↓] Scroll  [Tab] Tree  [2] Getting Started  [?] Help  [q] Quit"
            }
        }
    };

    let text = app.status_message.as_deref().unwrap_or(hints);
    let legal = format!(
        "{}  ·  {}",
        page::FOOTER_COPYRIGHT,
        page::FOOTER_LINKS.join("  ")
    );

    let paragraph = Paragraph::new(vec![Line::from(text), Line::from(legal)])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 60u16.min(area.width.saturating_sub(8));
    let help_height = 24u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 PROJECT STRUCTURE
 ─────────────────────────────────
 ↑/k ↓/j      Move selection
 Enter/Space  Expand / collapse folder
 e            Expand all
 c            Collapse all
 g / G        Go to top / bottom

 CODE TABS
 ─────────────────────────────────
 ←/h →/l      Previous / next tab
 ↑/k ↓/j      Scroll code

 PAGE
 ─────────────────────────────────
 Tab          Switch focus
 1 / 2        Overview / Getting Started
 ?            Toggle this help
 q/Esc        Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
