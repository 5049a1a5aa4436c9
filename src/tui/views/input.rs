//! Manifest input view: the resources that an import would submit

use crate::models::ImportResource;
use crate::tui::constants::SCROLL_BUFFER;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{create_themed_block, render_empty_state, update_scroll_offset};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Wrap},
};
use std::cmp;
use std::path::PathBuf;

/// Human-readable list of manifest sources
pub fn describe_sources(sources: &[PathBuf]) -> String {
    if sources.is_empty() {
        return "(none)".to_string();
    }
    sources
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the input view
#[allow(clippy::too_many_arguments)]
pub fn render_import_input(
    f: &mut Frame,
    area: Rect,
    resources: &[ImportResource],
    sources: &[PathBuf],
    load_error: Option<&str>,
    selected_index: usize,
    scroll_offset: &mut usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let source_line = match load_error {
        Some(err) => Line::from(vec![
            Span::styled("Error: ", theme.status_error_style()),
            Span::styled(err.to_string(), Style::default().fg(theme.status_error)),
        ]),
        None => Line::from(vec![
            Span::styled("Sources: ", Style::default().fg(theme.text_label)),
            Span::raw(describe_sources(sources)),
        ]),
    };
    let sources_paragraph = Paragraph::new(source_line)
        .block(create_themed_block("Import YAML", theme))
        .wrap(Wrap { trim: true });
    f.render_widget(sources_paragraph, chunks[0]);

    let title = format!("Resources ({})", resources.len());
    if resources.is_empty() {
        render_empty_state(
            f,
            chunks[1],
            &title,
            "No resources to import",
            "Press r to reload the manifests or q to quit",
            theme,
        );
        return;
    }

    let visible_height = (chunks[1].height as usize).saturating_sub(3);
    update_scroll_offset(selected_index, visible_height, scroll_offset, SCROLL_BUFFER);
    let valid_selected = cmp::min(selected_index, resources.len().saturating_sub(1));

    let header = Row::new(vec!["KIND", "NAME", "NAMESPACE", "API VERSION"])
        .style(theme.table_header_style());

    let rows: Vec<Row> = resources
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, r)| {
            let style = if idx == valid_selected {
                theme.table_selected_style()
            } else {
                Style::default().fg(theme.table_normal)
            };
            Row::new(vec![
                r.kind.clone(),
                r.display_name(),
                r.namespace().unwrap_or("-").to_string(),
                r.api_version.clone(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(create_themed_block(&title, theme));
    f.render_widget(table, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_sources() {
        assert_eq!(describe_sources(&[]), "(none)");
        assert_eq!(
            describe_sources(&[PathBuf::from("a.yaml"), PathBuf::from("-")]),
            "a.yaml, -"
        );
    }
}
