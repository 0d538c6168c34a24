//! HTML Table Renderer - Scored matrix as an HTML table for display and mail.

use std::fmt::Write;

use crate::domain::topsis::ScoredMatrix;

const TABLE_OPEN: &str = r#"<table border="1" cellspacing="0" cellpadding="6" style="border-collapse:collapse;width:100%;text-align:center;">"#;

/// Renders a scored matrix as a self-contained `<table>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTableRenderer;

impl HtmlTableRenderer {
    pub fn render(&self, scored: &ScoredMatrix) -> String {
        let mut html = String::from(TABLE_OPEN);

        html.push_str("<thead><tr>");
        for header in scored.headers() {
            let _ = write!(html, "<th>{}</th>", escape_html(&header));
        }
        html.push_str("</tr></thead><tbody>");

        for alternative in &scored.alternatives {
            html.push_str("<tr>");
            let _ = write!(html, "<td>{}</td>", escape_html(&alternative.label));
            for value in &alternative.values {
                let _ = write!(html, "<td>{}</td>", value);
            }
            let _ = write!(
                html,
                "<td>{}</td><td>{}</td>",
                alternative.closeness, alternative.rank
            );
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }
}

/// Escapes text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
