//! Content categories and their static templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed content domains.
///
/// The variant order is the classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Technology topics (highest priority)
    Technology,
    /// Business topics
    Business,
    /// Health topics
    Health,
    /// Fallback when no keyword matches
    Lifestyle,
}

/// Fixed per-category template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    /// Section headings, in document order
    pub headings: &'static [&'static str],

    /// Framing phrase opening the introduction
    pub intro: &'static str,

    /// Framing phrase opening the conclusion
    pub conclusion: &'static str,
}

const TECHNOLOGY: CategoryTemplate = CategoryTemplate {
    headings: &[
        "Introduction",
        "Current State",
        "Key Benefits",
        "Implementation",
        "Future Outlook",
        "Best Practices",
    ],
    intro: "In today's rapidly evolving technological landscape",
    conclusion: "As we move forward, embracing these technological advances",
};

const BUSINESS: CategoryTemplate = CategoryTemplate {
    headings: &[
        "Overview",
        "Market Analysis",
        "Strategic Advantages",
        "Implementation Strategy",
        "ROI Considerations",
        "Action Steps",
    ],
    intro: "In the competitive business environment of today",
    conclusion: "By implementing these strategies, businesses can achieve",
};

const HEALTH: CategoryTemplate = CategoryTemplate {
    headings: &[
        "Introduction",
        "Understanding the Basics",
        "Key Benefits",
        "Scientific Evidence",
        "Practical Applications",
        "Getting Started",
    ],
    intro: "Health and wellness continue to be paramount concerns",
    conclusion: "Taking proactive steps toward better health",
};

const LIFESTYLE: CategoryTemplate = CategoryTemplate {
    headings: &[
        "Setting the Context",
        "Core Principles",
        "Practical Benefits",
        "Real-World Applications",
        "Common Challenges",
        "Moving Forward",
    ],
    intro: "Living a fulfilling and balanced life requires",
    conclusion: "By incorporating these principles into daily life",
};

impl Category {
    /// All categories in classification priority order.
    pub const ALL: [Category; 4] = [
        Category::Technology,
        Category::Business,
        Category::Health,
        Category::Lifestyle,
    ];

    /// Get the static template for this category.
    pub fn template(self) -> &'static CategoryTemplate {
        match self {
            Category::Technology => &TECHNOLOGY,
            Category::Business => &BUSINESS,
            Category::Health => &HEALTH,
            Category::Lifestyle => &LIFESTYLE,
        }
    }

    /// Lower-case keywords that select this category.
    ///
    /// Lifestyle has none; it is only reached as the fallback.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Technology => &["tech", "digital", "ai", "software", "web", "data"],
            Category::Business => &[
                "business",
                "market",
                "strategy",
                "management",
                "entrepreneur",
            ],
            Category::Health => &["health", "wellness", "fitness", "nutrition", "medical"],
            Category::Lifestyle => &[],
        }
    }

    /// Get the lower-case tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Health => "health",
            Category::Lifestyle => "lifestyle",
        }
    }

    /// Number of sections a document in this category will have.
    pub fn section_count(self) -> usize {
        self.template().headings.len()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_six_headings() {
        for category in Category::ALL {
            assert_eq!(category.section_count(), 6, "{}", category);
        }
    }

    #[test]
    fn test_lifestyle_has_no_keywords() {
        assert!(Category::Lifestyle.keywords().is_empty());
        assert!(Category::ALL[..3].iter().all(|c| !c.keywords().is_empty()));
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&Category::Health).unwrap();
        assert_eq!(json, "\"health\"");
        assert_eq!(Category::Business.to_string(), "business");
    }
}
