//! Plain text rendering for generated documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Layout: title, introduction, then each heading with its paragraphs and
/// bullet lines, then the conclusion, separated by blank lines. There is no
/// trailing newline.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    Ok(doc.plain_text_with_marker(options.text_bullet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Section};

    fn doc_with_bullets() -> Document {
        let section = Section::new("Key Benefits", vec!["Para one.".into(), "Para two.".into()])
            .with_bullets(vec!["Alpha".into(), "Beta".into(), "Gamma".into()]);
        Document::new(
            "Test",
            Category::Lifestyle,
            "Title",
            "Intro.",
            vec![section],
            "Bye.",
        )
    }

    #[test]
    fn test_to_text_bullets() {
        let text = to_text(&doc_with_bullets(), &RenderOptions::default()).unwrap();
        assert_eq!(
            text,
            "Title\n\nIntro.\n\nKey Benefits\n\nPara one.\n\nPara two.\n\n• Alpha\n• Beta\n• Gamma\n\nBye."
        );
    }

    #[test]
    fn test_to_text_custom_bullet() {
        let options = RenderOptions::new().with_text_bullet('-');
        let text = to_text(&doc_with_bullets(), &options).unwrap();
        assert!(text.contains("- Alpha\n- Beta\n"));
        assert!(!text.contains('•'));
    }
}
