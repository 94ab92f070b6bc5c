//! Heuristic restyling of flattened text into a styled HTML page.
//!
//! Used for plain-text exports that no longer have a [`Document`] behind
//! them. Lines are classified one at a time:
//!
//! - the first line (or the second, after a blank first line) is the title
//! - lines shorter than 100 characters without closing punctuation are headings
//! - lines starting with `•`, `-` or `*` are list items
//! - long lines near the top are the introduction, long lines near the end
//!   that mention a conclusion or summary (or close the text) are the conclusion
//! - everything else is a paragraph
//!
//! The heading test runs before the list test, so short bullet lines without
//! punctuation come out as headings.
//!
//! [`Document`]: crate::model::Document

use chrono::Utc;
use regex::Regex;

use super::html::{escape_html, wrap_page};
use super::RenderOptions;

/// Lines at least this long are never treated as headings.
const HEADING_MAX_CHARS: usize = 100;

/// Lines longer than this may become intro or conclusion blocks.
const BLOCK_MIN_CHARS: usize = 100;

/// Only this many leading lines are intro candidates.
const INTRO_WINDOW: usize = 5;

/// Only this many trailing lines are conclusion candidates.
const CONCLUSION_WINDOW: usize = 10;

const BULLET_PREFIXES: [char; 3] = ['•', '-', '*'];

/// Restyle flattened text into a full HTML page.
///
/// `title` fills the page `<title>`. The footer date comes from
/// [`RenderOptions::footer_timestamp`], falling back to the current time.
pub fn restyle_text(text: &str, title: &str, options: &RenderOptions) -> String {
    let body = LineClassifier::new().classify(text);
    let timestamp = options.footer_timestamp.unwrap_or_else(Utc::now);
    wrap_page(title, &body, timestamp, options)
}

struct LineClassifier {
    terminal_punctuation: Regex,
    body: String,
    in_list: bool,
}

impl LineClassifier {
    fn new() -> Self {
        Self {
            terminal_punctuation: Regex::new(r"[.!?]$").unwrap(),
            body: String::new(),
            in_list: false,
        }
    }

    fn classify(mut self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let total = lines.len();
        let first_blank = lines.first().map_or(true, |l| l.trim().is_empty());

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                self.close_list();
                continue;
            }

            let len = line.chars().count();

            if index == 0 || (index == 1 && first_blank) {
                self.push("h1", line);
            } else if len < HEADING_MAX_CHARS && !self.terminal_punctuation.is_match(line) {
                self.close_list();
                self.push("h2", line);
            } else if line.starts_with(BULLET_PREFIXES) {
                if !self.in_list {
                    self.body.push_str("    <ul>\n");
                    self.in_list = true;
                }
                let item: String = line.chars().skip(1).collect();
                self.body
                    .push_str(&format!("      <li>{}</li>\n", escape_html(item.trim())));
            } else {
                self.close_list();

                let long = len > BLOCK_MIN_CHARS;
                let is_intro = index < INTRO_WINDOW && long;
                let is_conclusion = index + CONCLUSION_WINDOW > total
                    && long
                    && (line.contains("conclusion")
                        || line.contains("summary")
                        || index + 1 == total);

                if is_intro {
                    self.push_block("intro", line);
                } else if is_conclusion {
                    self.push_block("conclusion", line);
                } else {
                    self.push("p", line);
                }
            }
        }

        self.close_list();
        self.body
    }

    fn push(&mut self, tag: &str, line: &str) {
        self.body
            .push_str(&format!("    <{tag}>{}</{tag}>\n", escape_html(line)));
    }

    fn push_block(&mut self, class: &str, line: &str) {
        self.body.push_str(&format!(
            "    <div class=\"{}\"><p>{}</p></div>\n",
            class,
            escape_html(line)
        ));
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.body.push_str("    </ul>\n");
            self.in_list = false;
        }
    }
}
