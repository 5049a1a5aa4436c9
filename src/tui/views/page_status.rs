//! Results page banner

use crate::import::PageStatus;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::spinner_frame;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Banner lines: icon, then title
pub fn page_status_lines(
    status: PageStatus,
    tick: usize,
    theme: &Theme,
    no_icons: bool,
) -> Vec<Line<'static>> {
    let (icon, style) = match status {
        PageStatus::InProgress => (spinner_frame(tick, no_icons), theme.status_pending_style()),
        PageStatus::Succeeded => (
            if no_icons { "OK" } else { "✓" },
            theme.status_success_style(),
        ),
        PageStatus::Failed => (
            if no_icons { "!" } else { "⚠" },
            theme.status_warning_style(),
        ),
    };

    vec![
        Line::from(Span::styled(icon, style)),
        Line::from(Span::styled(status.title(), style)),
    ]
}

/// Render the banner for the given flags
pub fn render_page_status(
    f: &mut Frame,
    area: Rect,
    errors: bool,
    in_flight: bool,
    tick: usize,
    theme: &Theme,
    no_icons: bool,
) {
    let status = PageStatus::from_flags(errors, in_flight);
    let block = Block::default()
        .title("Import YAML Results")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_label));
    let paragraph = Paragraph::new(page_status_lines(status, tick, theme, no_icons))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
