//! Per-row creation status: icon plus message

use crate::models::ImportStatus;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::spinner_frame;
use ratatui::text::{Line, Span};

/// Icon for a row status
pub fn status_icon(status: &ImportStatus, tick: usize, theme: &Theme, no_icons: bool) -> Span<'static> {
    match status {
        ImportStatus::Creating => {
            Span::styled(spinner_frame(tick, no_icons), theme.status_pending_style())
        }
        ImportStatus::Failed { .. } => Span::styled(
            if no_icons { "x" } else { "✗" },
            theme.status_error_style(),
        ),
        ImportStatus::Created { .. } => Span::styled(
            if no_icons { "+" } else { "✓" },
            theme.status_success_style(),
        ),
    }
}

/// Icon and message for a row status
pub fn resource_status_line(
    status: &ImportStatus,
    tick: usize,
    theme: &Theme,
    no_icons: bool,
) -> Line<'static> {
    Line::from(vec![
        status_icon(status, tick, theme, no_icons),
        Span::raw(" "),
        Span::raw(status.message().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_lines() {
        let theme = Theme::default();
        let failed = ImportStatus::Failed {
            message: "Error: boom".to_string(),
        };
        assert_eq!(
            line_text(&resource_status_line(&failed, 0, &theme, true)),
            "x Error: boom"
        );
        assert_eq!(
            line_text(&resource_status_line(&ImportStatus::Creating, 1, &theme, true)),
            "/ Creating"
        );
    }

    #[test]
    fn test_icon_colors() {
        let theme = Theme::default();
        let failed = ImportStatus::Failed {
            message: String::new(),
        };
        assert_eq!(
            status_icon(&failed, 0, &theme, false).style.fg,
            Some(theme.status_error)
        );
        assert_eq!(
            status_icon(&ImportStatus::Creating, 0, &theme, false).style.fg,
            Some(theme.status_pending)
        );
    }
}
