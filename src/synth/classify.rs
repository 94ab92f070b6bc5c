//! Topic classification by keyword substring.

use crate::model::Category;

/// Classify a topic into a content category.
///
/// Matching is a case-insensitive substring test, so "Healthy" matches
/// "health" and "Maintain" matches "ai". Categories are tried in priority
/// order and the first hit wins.
pub fn classify(topic: &str) -> Category {
    matched_keyword(topic)
        .map(|(category, _)| category)
        .unwrap_or(Category::Lifestyle)
}

/// Find the category and the keyword that selected it.
///
/// Returns `None` when the topic falls through to lifestyle.
pub fn matched_keyword(topic: &str) -> Option<(Category, &'static str)> {
    let lower = topic.to_lowercase();
    Category::ALL.iter().find_map(|&category| {
        category
            .keywords()
            .iter()
            .find(|keyword| lower.contains(*keyword))
            .map(|keyword| (category, *keyword))
    })
}
