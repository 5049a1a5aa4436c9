//! Theme and styling definitions
//!
//! Central place for every color and style the TUI uses.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
pub struct Theme {
    // Header colors
    pub header_context: Color,
    pub header_namespace: Color,
    pub header_dry_run: Color,

    // Status colors
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,
    pub status_pending: Color,

    // Table colors
    pub table_header: Color,
    pub table_selected: Color,
    pub table_selected_bg: Color,
    pub table_normal: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_label: Color,
    pub text_link: Color,

    // Action colors
    pub action_primary: Color,
    pub action_link: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Header colors
            header_context: Color::Yellow,
            header_namespace: Color::Yellow,
            header_dry_run: Color::Magenta,

            // Status colors
            status_success: Color::Green,
            status_warning: Color::Yellow,
            status_error: Color::Red,
            status_pending: Color::Cyan,

            // Table colors
            table_header: Color::Cyan,
            table_selected: Color::Blue,
            table_selected_bg: Color::DarkGray,
            table_normal: Color::White,

            // Text colors
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_label: Color::Cyan,
            text_link: Color::LightBlue,

            // Action colors
            action_primary: Color::Green,
            action_link: Color::LightBlue,

            // Footer colors
            footer_key: Color::Yellow,
            footer_text: Color::White,
        }
    }
}

impl Theme {
    pub fn header_context_style(&self) -> Style {
        Style::default()
            .fg(self.header_context)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.table_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected_style(&self) -> Style {
        Style::default()
            .fg(self.table_selected)
            .bg(self.table_selected_bg)
    }

    /// Style for a resource name that links somewhere
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.text_link)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn status_success_style(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_warning_style(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_error_style(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_pending_style(&self) -> Style {
        Style::default().fg(self.status_pending)
    }
}
