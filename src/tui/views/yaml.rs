//! YAML view of a created resource

use crate::models::ImportResource;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use serde_json::Value;

/// Drop fields that only clutter the view
fn clean_resource_json(obj: &Value) -> Value {
    match obj {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| key.as_str() != "managedFields")
                .map(|(key, value)| (key.clone(), clean_resource_json(value)))
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.iter().map(clean_resource_json).collect()),
        other => other.clone(),
    }
}

/// YAML text for a resource, without managed fields
pub fn resource_yaml(resource: &ImportResource) -> String {
    let json = match serde_json::to_value(resource) {
        Ok(json) => json,
        Err(e) => return format!("Error serializing resource: {}", e),
    };
    let cleaned = clean_resource_json(&json);
    serde_yaml::to_string(&cleaned).unwrap_or_else(|e| {
        format!(
            "Error converting to YAML: {}\n\nJSON:\n{}",
            e,
            serde_json::to_string_pretty(&cleaned)
                .unwrap_or_else(|_| "Failed to serialize".to_string())
        )
    })
}

/// Render the YAML view
pub fn render_resource_yaml(
    f: &mut Frame,
    area: Rect,
    resource: Option<&ImportResource>,
    scroll_offset: &mut usize,
    theme: &Theme,
) {
    let Some(resource) = resource else {
        let block = Block::default().title("YAML").borders(Borders::ALL);
        let paragraph = Paragraph::new(Line::from("No resource selected"))
            .block(block)
            .style(Style::default().fg(theme.text_secondary));
        f.render_widget(paragraph, area);
        return;
    };

    let yaml_text = resource_yaml(resource);
    let title = format!("YAML - {} - {}", resource.kind, resource.display_name());

    let all_lines: Vec<&str> = yaml_text.lines().collect();
    let visible_height = area.height.saturating_sub(2) as usize;
    let max_scroll = all_lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let visible_lines: Vec<Line> = all_lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| Line::from(*line))
        .collect();

    // trim: false keeps YAML indentation
    let paragraph = Paragraph::new(visible_lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
