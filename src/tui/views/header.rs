//! Header view rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Context, target namespace and the dry-run marker
pub fn header_line(
    context: &str,
    namespace: &str,
    dry_run: bool,
    theme: &Theme,
    no_icons: bool,
) -> Line<'static> {
    let namespace_display = if namespace.is_empty() {
        "default".to_string()
    } else {
        namespace.to_string()
    };

    let mut spans = vec![
        Span::styled("Context: ", Style::default().fg(theme.text_label)),
        Span::styled(context.to_string(), theme.header_context_style()),
        Span::raw("  "),
        Span::styled("Namespace: ", Style::default().fg(theme.text_label)),
        Span::styled(
            namespace_display,
            Style::default().fg(theme.header_namespace),
        ),
    ];

    if dry_run {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            if no_icons { "[DRY RUN]" } else { "◌ DRY RUN" },
            Style::default()
                .fg(theme.header_dry_run)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

/// Render the header
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    context: &str,
    namespace: &str,
    dry_run: bool,
    theme: &Theme,
    no_icons: bool,
) {
    let header = Paragraph::new(header_line(context, namespace, dry_run, theme, no_icons))
        .block(Block::default().borders(Borders::ALL).title("kimport"));
    f.render_widget(header, area);
}
