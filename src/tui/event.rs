//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus, Mode, Section};

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode and on any page)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.route.is_not_found() {
        handle_not_found(app, key);
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

/// The fallback page has exactly one action: back to the root route.
fn handle_not_found(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.go_home(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        KeyCode::Char('1') => app.show_section(Section::Overview),
        KeyCode::Char('2') => app.show_section(Section::Guide),

        KeyCode::Tab | KeyCode::BackTab => {
            app.cycle_focus();
        }

        _ => match app.section {
            Section::Overview => match app.focus {
                Focus::Tree => handle_tree_keys(app, key),
                Focus::Tabs => handle_tab_keys(app, key),
            },
            Section::Guide => handle_guide_keys(app, key),
        },
    }
}

fn handle_tree_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.selected = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected = app.rows.len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('e') => app.expand_all(),
        KeyCode::Char('c') => app.collapse_all(),
        _ => {}
    }
}

fn handle_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll(1),
        KeyCode::PageUp => app.scroll(-20),
        KeyCode::PageDown => app.scroll(20),
        KeyCode::Home | KeyCode::Char('g') => app.code_scroll = 0,
        _ => {}
    }
}

fn handle_guide_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll(1),
        KeyCode::PageUp => app.scroll(-20),
        KeyCode::PageDown => app.scroll(20),
        KeyCode::Home | KeyCode::Char('g') => app.guide_scroll = 0,
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::router::Route;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_and_exit_help() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.mode, Mode::Help);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_key_cycles_focus() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Tabs);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Tree);
    }

    #[test]
    fn test_arrows_switch_tabs_when_focused() {
        let mut app = app();
        app.focus = Focus::Tabs;
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.tabs.selected().id, "kafka");
        handle_key_event(&mut app, key(KeyCode::Left));
        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.tabs.selected().id, "config");
    }

    #[test]
    fn test_section_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.section, Section::Guide);
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.guide_scroll, 1);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.section, Section::Overview);
    }

    #[test]
    fn test_status_message_clears_on_next_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        assert!(app.status_message.is_some());

        handle_key_event(&mut app, key(KeyCode::Down));
        assert!(app.status_message.is_none());
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_not_found_enter_goes_home() {
        let mut app = app();
        app.navigate("/unknown");
        assert!(app.route.is_not_found());

        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert!(app.route.is_not_found());

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.route, Route::Index);
    }
}
