//! Common helper functions for view rendering
//!
//! This module provides reusable functions to reduce duplication across views.

use crate::tui::constants::{ASCII_SPINNER_FRAMES, SPINNER_FRAMES};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Update scroll offset based on selected index and visible area
///
/// Keeps the selected item visible with a buffer zone.
pub fn update_scroll_offset(
    selected_index: usize,
    visible_height: usize,
    scroll_offset: &mut usize,
    scroll_buffer: usize,
) {
    // When selected row is near bottom, scroll to keep buffer
    if selected_index >= *scroll_offset + visible_height.saturating_sub(scroll_buffer) {
        *scroll_offset =
            selected_index.saturating_sub(visible_height.saturating_sub(scroll_buffer + 1));
    }
    // When selected row is above visible area, scroll to show it with buffer
    if selected_index < *scroll_offset + scroll_buffer {
        *scroll_offset = selected_index.saturating_sub(scroll_buffer);
    }
}

/// Render an empty state message
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    instructions: &str,
    theme: &Theme,
) {
    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from(instructions),
    ];
    let paragraph = Paragraph::new(text)
        .block(create_themed_block(title, theme))
        .style(Style::default().fg(theme.text_secondary));
    f.render_widget(paragraph, area);
}

/// Create a block with title and borders using theme
pub fn create_themed_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_label))
}

/// Spinner frame for the given tick
pub fn spinner_frame(tick: usize, no_icons: bool) -> &'static str {
    let frames = if no_icons {
        ASCII_SPINNER_FRAMES
    } else {
        SPINNER_FRAMES
    };
    frames[tick % frames.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_follows_selection_down() {
        let mut offset = 0;
        update_scroll_offset(9, 10, &mut offset, 2);
        assert_eq!(offset, 2);
    }

    #[test]
    fn test_scroll_follows_selection_up() {
        let mut offset = 10;
        update_scroll_offset(3, 10, &mut offset, 2);
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0, true), "|");
        assert_eq!(spinner_frame(4, true), "|");
        assert_eq!(spinner_frame(SPINNER_FRAMES.len(), false), SPINNER_FRAMES[0]);
    }
}
