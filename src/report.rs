//! Plain-text results report
//!
//! Used by `--no-tui` runs: the same rows the results page shows, printed as
//! an aligned table under the page banner.

use crate::import::ImportResults;

const HEADERS: [&str; 3] = ["NAME", "NAMESPACE", "CREATION STATUS"];

/// Render a results page as plain text
pub fn render_report(results: &ImportResults) -> String {
    let cells: Vec<[String; 3]> = results
        .rows()
        .iter()
        .map(|row| {
            [
                format!("{} {}", row.kind_abbr, row.name),
                row.namespace.clone().unwrap_or_else(|| "-".to_string()),
                row.status.message().to_string(),
            ]
        })
        .collect();

    let width = |column: usize| {
        cells
            .iter()
            .map(|c| c[column].chars().count())
            .chain(std::iter::once(HEADERS[column].len()))
            .max()
            .unwrap_or_default()
    };
    let (name_width, namespace_width) = (width(0), width(1));

    let format_line = |name: &str, namespace: &str, status: &str| {
        format!(
            "{:<name_width$}  {:<namespace_width$}  {}",
            name, namespace, status
        )
        .trim_end()
        .to_string()
    };

    let mut lines = vec![results.page_status().title().to_string(), String::new()];
    lines.push(format_line(HEADERS[0], HEADERS[1], HEADERS[2]));
    for [name, namespace, status] in &cells {
        lines.push(format_line(name, namespace, status));
    }

    let failed = results
        .entries()
        .iter()
        .filter(|e| e.status.error())
        .count();
    let created = results
        .entries()
        .iter()
        .filter(|e| e.status.result().is_some())
        .count();
    lines.push(String::new());
    lines.push(format!(
        "{} resources: {} created, {} failed",
        results.len(),
        created,
        failed
    ));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
