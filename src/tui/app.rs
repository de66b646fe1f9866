//! Application state for the TUI.

use crate::config::Config;
use crate::content;
use crate::router::Route;
use crate::tree::{Icons, TreeRow, TreeView};

use super::ui;
use super::widgets::TabGroup;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal page interaction.
    Normal,
    /// Help overlay mode.
    Help,
}

/// Which panel of the overview receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tree,
    Tabs,
}

/// Section of the documentation page shown below the feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Project structure and code tabs.
    #[default]
    Overview,
    /// Prerequisites and commands.
    Guide,
}

/// Main application state for the TUI.
pub struct App {
    /// Current route.
    pub route: Route,

    /// Project structure with its expansion state.
    pub tree: TreeView,

    /// Visible rows of `tree`, rebuilt after every toggle.
    pub rows: Vec<TreeRow>,

    /// Currently selected index in `rows`.
    pub selected: usize,

    /// Technical Overview tabs.
    pub tabs: TabGroup,

    /// Vertical scroll of the active tab's code panel.
    pub code_scroll: u16,

    /// Vertical scroll of the Getting Started section.
    pub guide_scroll: u16,

    pub focus: Focus,
    pub section: Section,
    pub mode: Mode,
    pub icons: Icons,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App on the documentation page.
    pub fn new(config: &Config) -> Self {
        let tree = TreeView::with_expand_depth(
            content::project_structure(),
            config.tree.expand_depth,
        );
        let rows = tree.rows();

        Self {
            route: Route::home(),
            tree,
            rows,
            selected: 0,
            tabs: TabGroup::overview(&config.view.default_tab),
            code_scroll: 0,
            guide_scroll: 0,
            focus: Focus::default(),
            section: Section::default(),
            mode: Mode::Normal,
            icons: Icons::new(config.view.ascii_icons),
            should_quit: false,
            status_message: None,
        }
    }

    /// Get the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected)
    }

    pub fn navigate(&mut self, path: &str) {
        self.route = Route::resolve(path);
        self.status_message = None;
        tracing::info!(route = %self.route, "Navigated");
    }

    pub fn go_home(&mut self) {
        self.navigate(crate::router::ROOT);
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Toggle the selected folder. Files are left alone.
    pub fn toggle_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if !row.is_folder() {
            return;
        }
        let path = row.path.clone();
        if self.tree.toggle(&path) {
            self.rebuild_rows();
        }
    }

    pub fn expand_all(&mut self) {
        self.tree.expand_all();
        self.rebuild_rows();
        self.status_message = Some("Expanded all folders".to_string());
    }

    pub fn collapse_all(&mut self) {
        self.tree.collapse_all();
        self.rebuild_rows();
        self.status_message = Some("Collapsed all folders".to_string());
    }

    /// Recompute visible rows, keeping the selection on the same node when
    /// it is still visible.
    pub fn rebuild_rows(&mut self) {
        let previous = self.selected_row().map(|r| r.path.clone());
        self.rows = self.tree.rows();

        self.selected = previous
            .and_then(|p| self.rows.iter().position(|r| r.path == p))
            .unwrap_or(0)
            .min(self.rows.len().saturating_sub(1));
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
        self.code_scroll = 0;
    }

    pub fn previous_tab(&mut self) {
        self.tabs.previous();
        self.code_scroll = 0;
    }

    /// Scroll the active section, keeping at least its last line in view.
    pub fn scroll(&mut self, delta: i16) {
        let limit = self.scroll_limit();
        let target = match self.section {
            Section::Overview => &mut self.code_scroll,
            Section::Guide => &mut self.guide_scroll,
        };
        *target = target.saturating_add_signed(delta).min(limit);
    }

    /// Largest scroll offset for the active section's content.
    pub fn scroll_limit(&self) -> u16 {
        let height = match self.section {
            Section::Overview => content::tab(self.tabs.selected().id)
                .map(|tab| ui::tab_card_lines(tab).len())
                .unwrap_or(0),
            Section::Guide => ui::guide_lines().len(),
        };
        u16::try_from(height.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tree => Focus::Tabs,
            Focus::Tabs => Focus::Tree,
        };
    }

    pub fn show_section(&mut self, section: Section) {
        self.section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert_eq!(app.route, Route::Index);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.focus, Focus::Tree);
        assert_eq!(app.section, Section::Overview);
        assert_eq!(app.selected, 0);
        assert_eq!(app.tabs.selected().id, "application");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_initial_rows_show_top_level_only() {
        let names: Vec<_> = app().rows.iter().map(|r| r.name.clone()).collect();
        assert_eq!(
            names,
            vec!["spring-kafka-pact-demo", "src", "pom.xml", "README.md"]
        );
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = app();
        app.move_selection(-5);
        assert_eq!(app.selected, 0);
        app.move_selection(100);
        assert_eq!(app.selected, app.rows.len() - 1);
    }

    #[test]
    fn test_toggle_file_does_nothing() {
        let mut app = app();
        app.selected = 2; // pom.xml
        let before = app.rows.clone();
        app.toggle_selected();
        assert_eq!(app.rows, before);
    }

    #[test]
    fn test_collapse_root_keeps_selection_valid() {
        let mut app = app();
        app.selected = 3;
        app.collapse_all();
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_rebuild_keeps_selected_node() {
        let mut app = app();
        app.selected = 1; // src
        app.toggle_selected();
        assert_eq!(app.selected_row().unwrap().name, "src");
        app.move_selection(1);
        assert_eq!(app.selected_row().unwrap().name, "main");
    }

    #[test]
    fn test_switch_tab_resets_scroll() {
        let mut app = app();
        app.scroll(10);
        assert_eq!(app.code_scroll, 10);
        app.next_tab();
        assert_eq!(app.tabs.selected().id, "kafka");
        assert_eq!(app.code_scroll, 0);
    }

    #[test]
    fn test_code_scroll_stops_at_last_line() {
        let mut app = app();
        let limit = app.scroll_limit();
        assert!(limit > 10);

        app.scroll(i16::MAX);
        assert_eq!(app.code_scroll, limit);
        app.scroll(20);
        assert_eq!(app.code_scroll, limit);
        app.scroll(-1);
        assert_eq!(app.code_scroll, limit - 1);
    }

    #[test]
    fn test_guide_scroll_stops_at_last_line() {
        let mut app = app();
        app.show_section(Section::Guide);
        let limit = app.scroll_limit();
        assert_eq!(usize::from(limit), ui::guide_lines().len() - 1);

        app.scroll(i16::MAX);
        assert_eq!(app.guide_scroll, limit);
        assert_eq!(app.code_scroll, 0);
    }

    #[test]
    fn test_scroll_never_negative() {
        let mut app = app();
        app.scroll(-3);
        assert_eq!(app.code_scroll, 0);
    }
}
