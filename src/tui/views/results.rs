//! Import results page: banner, table of resources, follow-up actions

use crate::import::{ImportResults, ResultRow};
use crate::tui::constants::{PAGE_STATUS_HEIGHT, SCROLL_BUFFER};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{create_themed_block, render_empty_state, update_scroll_offset};
use crate::tui::views::page_status::render_page_status;
use crate::tui::views::resource_status::resource_status_line;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::cmp;

/// Render the full results page
#[allow(clippy::too_many_arguments)]
pub fn render_import_results(
    f: &mut Frame,
    area: Rect,
    results: &ImportResults,
    selected_index: usize,
    scroll_offset: &mut usize,
    tick: usize,
    theme: &Theme,
    no_icons: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PAGE_STATUS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_page_status(
        f,
        chunks[0],
        results.has_errors(),
        results.in_flight(),
        tick,
        theme,
        no_icons,
    );
    render_results_table(
        f,
        chunks[1],
        results,
        selected_index,
        scroll_offset,
        tick,
        theme,
        no_icons,
    );
    render_actions(f, chunks[2], results, theme);
}

#[allow(clippy::too_many_arguments)]
fn render_results_table(
    f: &mut Frame,
    area: Rect,
    results: &ImportResults,
    selected_index: usize,
    scroll_offset: &mut usize,
    tick: usize,
    theme: &Theme,
    no_icons: bool,
) {
    let title = format!("Resources ({})", results.len());
    if results.is_empty() {
        render_empty_state(
            f,
            area,
            &title,
            "No resources were submitted",
            "Press i to import more YAML",
            theme,
        );
        return;
    }

    // Borders plus the header row
    let visible_height = (area.height as usize).saturating_sub(3);
    update_scroll_offset(selected_index, visible_height, scroll_offset, SCROLL_BUFFER);
    let valid_selected = cmp::min(selected_index, results.len().saturating_sub(1));

    let header = Row::new(vec!["NAME", "NAMESPACE", "CREATION STATUS"])
        .style(theme.table_header_style());

    let rows: Vec<Row> = results
        .rows()
        .into_iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, row)| {
            let style = if idx == valid_selected {
                theme.table_selected_style()
            } else {
                Style::default().fg(theme.table_normal)
            };
            Row::new(vec![
                Cell::from(name_cell(&row, theme)),
                Cell::from(namespace_cell(&row, theme)),
                Cell::from(resource_status_line(row.status, tick, theme, no_icons)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ],
    )
    .header(header)
    .block(create_themed_block(&title, theme));
    f.render_widget(table, area);
}

/// Kind badge followed by the resource name; the name is a link once created
fn name_cell(row: &ResultRow<'_>, theme: &Theme) -> Line<'static> {
    let badge = Span::styled(
        format!("{} ", row.kind_abbr),
        Style::default()
            .fg(theme.text_label)
            .add_modifier(Modifier::BOLD),
    );
    let name_style = if row.linkable {
        theme.link_style()
    } else {
        Style::default()
    };
    Line::from(vec![badge, Span::styled(row.name.clone(), name_style)])
}

fn namespace_cell(row: &ResultRow<'_>, theme: &Theme) -> Line<'static> {
    match &row.namespace {
        Some(ns) => Line::from(Span::styled(ns.clone(), theme.link_style())),
        None => Line::from("-"),
    }
}

/// Actions offered below the table once the batch has settled
pub fn action_spans(results: &ImportResults, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if results.can_retry() {
        spans.push(Span::styled(
            "[R]",
            Style::default()
                .fg(theme.action_primary)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" Retry failed resources"));
    }
    if results.can_import_more() {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            "[i]",
            Style::default().fg(theme.action_link),
        ));
        spans.push(Span::styled(
            " Import more YAML",
            Style::default().fg(theme.action_link),
        ));
    }
    spans
}

fn render_actions(f: &mut Frame, area: Rect, results: &ImportResults, theme: &Theme) {
    let paragraph = Paragraph::new(Line::from(action_spans(results, theme)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
