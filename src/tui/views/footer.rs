//! Footer view rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the footer: the status message when there is one, key hints otherwise
pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    status_message: Option<(&str, bool)>,
    theme: &Theme,
) {
    let line = match status_message {
        Some((msg, is_error)) => Line::from(Span::styled(
            msg.to_string(),
            if is_error {
                theme.status_error_style()
            } else {
                Style::default()
                    .fg(theme.status_success)
                    .add_modifier(Modifier::BOLD)
            },
        )),
        None => hint_line(hints, theme),
    };

    let footer = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

/// `key label | key label` hint line
pub fn hint_line(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (key, label)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.footer_text)));
        }
        spans.push(Span::styled(key.to_string(), theme.footer_key_style()));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(theme.footer_text),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_text() {
        let theme = Theme::default();
        let line = hint_line(&[("Enter", "Import"), ("q", "Quit")], &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter Import | q Quit");
    }
}
