//! Styled HTML rendering.
//!
//! Produces a self-contained, printable page. Documents are rendered straight
//! from their structure; see [`super::restyle`] for the line-heuristic path
//! used on free text.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{Document, Section};

use super::RenderOptions;

const STYLESHEET: &str = r#"      body {
        font-family: 'Times New Roman', serif;
        line-height: 1.6;
        margin: 40px;
        color: #333;
      }
      h1 {
        color: #2563eb;
        border-bottom: 3px solid #2563eb;
        padding-bottom: 10px;
        margin-bottom: 30px;
      }
      h2 {
        color: #1e40af;
        margin-top: 30px;
        margin-bottom: 15px;
      }
      p {
        margin-bottom: 15px;
        text-align: justify;
      }
      .intro, .conclusion {
        background-color: #f8fafc;
        padding: 20px;
        border-left: 4px solid #3b82f6;
        margin: 20px 0;
      }
      ul {
        margin: 15px 0;
        padding-left: 30px;
      }
      li {
        margin-bottom: 8px;
      }
      .metadata {
        text-align: center;
        color: #64748b;
        font-size: 12px;
        margin-top: 40px;
        padding-top: 20px;
        border-top: 1px solid #e2e8f0;
      }
"#;

/// Convert a document to a styled HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut body = String::new();

    body.push_str(&format!("    <h1>{}</h1>\n", escape_html(doc.title())));
    push_block(&mut body, "intro", doc.introduction());

    for section in doc.sections() {
        render_section(&mut body, section);
    }

    push_block(&mut body, "conclusion", doc.conclusion());

    let timestamp = options
        .footer_timestamp
        .unwrap_or_else(|| doc.generated_at());
    Ok(wrap_page(doc.title(), &body, timestamp, options))
}

fn render_section(body: &mut String, section: &Section) {
    body.push_str(&format!("    <h2>{}</h2>\n", escape_html(&section.heading)));
    for paragraph in &section.paragraphs {
        body.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph)));
    }
    if section.has_bullets() {
        body.push_str("    <ul>\n");
        for point in section.bullets() {
            body.push_str(&format!("      <li>{}</li>\n", escape_html(point)));
        }
        body.push_str("    </ul>\n");
    }
}

fn push_block(body: &mut String, class: &str, text: &str) {
    body.push_str(&format!(
        "    <div class=\"{}\"><p>{}</p></div>\n",
        class,
        escape_html(text)
    ));
}

/// Wrap rendered body markup in the page shell with stylesheet and footer.
pub(crate) fn wrap_page(
    title: &str,
    body: &str,
    timestamp: DateTime<Utc>,
    options: &RenderOptions,
) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
    page.push_str("    <meta charset=\"utf-8\">\n");
    page.push_str(&format!("    <title>{}</title>\n", escape_html(title)));
    page.push_str("    <style>\n");
    page.push_str(STYLESHEET);
    page.push_str("    </style>\n  </head>\n  <body>\n");
    page.push_str(body);

    if options.include_footer {
        page.push_str(&format!(
            "    <div class=\"metadata\">Generated on {} by {}</div>\n",
            format_date(timestamp, &options.date_format),
            escape_html(&options.footer_credit)
        ));
    }

    page.push_str("  </body>\n</html>\n");
    page
}

fn format_date(timestamp: DateTime<Utc>, pattern: &str) -> String {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        log::warn!(
            "Invalid date format {:?}, falling back to ISO date",
            pattern
        );
        return timestamp.format("%Y-%m-%d").to_string();
    }
    timestamp.format(pattern).to_string()
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
