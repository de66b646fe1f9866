//! Single-selection tab group.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::content::{self, TabContent};
use crate::error::{Result, ShowcaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<&TabContent> for Tab {
    fn from(content: &TabContent) -> Self {
        Self {
            id: content.id,
            label: content.label,
        }
    }
}

/// N named tabs, exactly one of which is selected at any time.
#[derive(Debug, Clone)]
pub struct TabGroup {
    tabs: Vec<Tab>,
    selected: usize,
}

impl TabGroup {
    /// The Technical Overview tabs, selecting `default_id`, or the first tab
    /// when the id is unknown.
    pub fn overview(default_id: &str) -> Self {
        let tabs: Vec<Tab> = content::tabs().iter().map(Tab::from).collect();
        let selected = match tabs.iter().position(|t| t.id == default_id) {
            Some(index) => index,
            None => {
                tracing::warn!(tab = default_id, "Unknown default tab, using first");
                0
            }
        };
        Self { tabs, selected }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected(&self) -> &Tab {
        &self.tabs[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        let index = self
            .tabs
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ShowcaseError::UnknownTab(id.to_string()))?;
        self.selected = index;
        Ok(())
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.tabs.len();
    }

    pub fn previous(&mut self) {
        self.selected = (self.selected + self.tabs.len() - 1) % self.tabs.len();
    }
}

/// Draw the tab bar.
pub fn render_tab_bar(group: &TabGroup, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { Color::Cyan } else { Color::Gray };
    let titles: Vec<Line> = group.tabs().iter().map(|t| Line::from(t.label)).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .select(group.selected_index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Green).bold().underlined())
        .divider("│");

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(default_id: &str) -> TabGroup {
        TabGroup::overview(default_id)
    }

    #[test]
    fn test_default_selection() {
        assert_eq!(group("application").selected().id, "application");
        assert_eq!(group("pact").selected().id, "pact");
    }

    #[test]
    fn test_unknown_default_falls_back_to_first() {
        assert_eq!(group("nope").selected_index(), 0);
    }

    #[test]
    fn test_select_unknown_is_error() {
        let mut tabs = group("application");
        assert!(matches!(
            tabs.select("docker"),
            Err(ShowcaseError::UnknownTab(_))
        ));
        assert_eq!(tabs.selected().id, "application");
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut tabs = group("config");
        tabs.next();
        assert_eq!(tabs.selected().id, "application");
        tabs.previous();
        assert_eq!(tabs.selected().id, "config");
        tabs.previous();
        assert_eq!(tabs.selected().id, "pact");
    }
}
