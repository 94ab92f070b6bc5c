//! JSON rendering for generated documents.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Section};

    fn sample() -> Document {
        let sections = vec![
            Section::new("Overview", vec!["One.".into(), "Two.".into()]),
            Section::new("Key Points", vec!["Three.".into(), "Four.".into()])
                .with_bullets(vec!["A".into(), "B".into(), "C".into()]),
        ];
        Document::new(
            "Budgeting",
            Category::Business,
            "Budgeting 101",
            "Hi.",
            sections,
            "Bye.",
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Budgeting 101\""));
        assert!(json.contains("\"category\": \"business\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_absent_bullets_are_omitted() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sections = value["sections"].as_array().unwrap();
        assert!(sections[0].get("bullet_points").is_none());
        assert_eq!(sections[1]["bullet_points"].as_array().unwrap().len(), 3);
        assert_eq!(value["word_count"], sample().word_count());
    }
}
