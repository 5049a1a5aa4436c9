//! Event handling for the application

use super::core::App;
use super::state::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, None to keep running.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(true);
        }

        // Outside the YAML view Esc only dismisses a status message
        if self.ui_state.status_message.is_some()
            && key.code == KeyCode::Esc
            && self.view_state.current_view != View::ResourceYaml
        {
            self.clear_status_message();
            return None;
        }

        match self.view_state.current_view {
            View::ImportInput => self.handle_input_key(key),
            View::ImportResults => self.handle_results_key(key),
            View::ResourceYaml => self.handle_yaml_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('q') => return Some(true),
            KeyCode::Enter => {
                self.start_import();
            }
            KeyCode::Char('r') => {
                self.reload_sources();
            }
            _ => self.handle_navigation_key(key),
        }
        None
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('q') => return Some(true),
            KeyCode::Enter => {
                self.open_selected_result();
            }
            KeyCode::Char('R') => {
                self.retry_failed_from_page();
            }
            KeyCode::Char('i') => {
                self.import_more();
            }
            _ => self.handle_navigation_key(key),
        }
        None
    }

    fn handle_yaml_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Esc => {
                self.clear_status_message();
                self.view_state.yaml_index = None;
                self.view_state.yaml_scroll_offset = 0;
                self.set_view(View::ImportResults);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                // Clamped against the document length while rendering
                self.view_state.yaml_scroll_offset =
                    self.view_state.yaml_scroll_offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.view_state.yaml_scroll_offset =
                    self.view_state.yaml_scroll_offset.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.view_state.yaml_scroll_offset =
                    self.view_state.yaml_scroll_offset.saturating_add(10);
            }
            KeyCode::PageUp => {
                self.view_state.yaml_scroll_offset =
                    self.view_state.yaml_scroll_offset.saturating_sub(10);
            }
            KeyCode::Char('g') => self.view_state.yaml_scroll_offset = 0,
            _ => {}
        }
        None
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let last = count - 1;
        let selected = &mut self.view_state.selected_index;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => *selected = (*selected + 1).min(last),
            KeyCode::Char('k') | KeyCode::Up => *selected = selected.saturating_sub(1),
            KeyCode::Char('g') | KeyCode::Home => *selected = 0,
            KeyCode::Char('G') | KeyCode::End => *selected = last,
            _ => {}
        }
    }
}
