//! Rendering logic for the application

use super::core::App;
use super::state::View;
use crate::tui::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::tui::views::*;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        let no_icons = self.config.ui.no_icons;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        render_header(
            f,
            chunks[0],
            &self.context,
            &self.namespace,
            self.config.dry_run,
            &self.theme,
            no_icons,
        );

        match self.view_state.current_view {
            View::ImportInput => render_import_input(
                f,
                chunks[1],
                &self.import_state.resources,
                &self.import_state.sources,
                self.import_state.load_error.as_deref(),
                self.view_state.selected_index,
                &mut self.view_state.scroll_offset,
                &self.theme,
            ),
            View::ImportResults => match self.import_state.results.as_ref() {
                Some(results) => render_import_results(
                    f,
                    chunks[1],
                    results,
                    self.view_state.selected_index,
                    &mut self.view_state.scroll_offset,
                    self.ui_state.tick,
                    &self.theme,
                    no_icons,
                ),
                None => helpers::render_empty_state(
                    f,
                    chunks[1],
                    "Import YAML Results",
                    "No import has been started",
                    "Press q to quit",
                    &self.theme,
                ),
            },
            View::ResourceYaml => {
                let resource = self
                    .view_state
                    .yaml_index
                    .and_then(|i| self.import_state.results.as_ref()?.linked_result(i));
                render_resource_yaml(
                    f,
                    chunks[1],
                    resource,
                    &mut self.view_state.yaml_scroll_offset,
                    &self.theme,
                );
            }
        }

        let hints = self.key_hints();
        render_footer(f, chunks[2], &hints, self.status_message(), &self.theme);
    }
}
