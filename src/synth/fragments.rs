//! Fixed fragment pools.
//!
//! `{topic}` marks where the raw topic string is interpolated.

pub(crate) const TOPIC_PLACEHOLDER: &str = "{topic}";

pub(crate) const TITLES: [&str; 7] = [
    "The Ultimate Guide to {topic}",
    "Understanding {topic}: A Comprehensive Overview",
    "{topic}: Everything You Need to Know",
    "Mastering {topic}: Key Strategies and Insights",
    "The Complete {topic} Handbook",
    "Unlocking the Power of {topic}",
    "{topic} Explained: From Basics to Advanced Concepts",
];

pub(crate) const SENTENCE_STARTERS: [&str; 8] = [
    "When exploring {topic}, it's essential to understand",
    "The significance of {topic} becomes apparent when",
    "Research has consistently shown that {topic}",
    "Industry experts emphasize that {topic}",
    "One of the key aspects of {topic} involves",
    "Modern approaches to {topic} focus on",
    "The implementation of {topic} strategies",
    "Studies indicate that effective {topic}",
];

pub(crate) const MIDDLE_CLAUSES: [&str; 8] = [
    "provides numerous advantages including enhanced efficiency, improved outcomes, and sustainable growth.",
    "requires careful planning, strategic thinking, and consistent execution to achieve optimal results.",
    "can significantly impact performance, productivity, and overall success in various applications.",
    "involves understanding core principles, best practices, and emerging trends in the field.",
    "demands attention to detail, continuous learning, and adaptation to changing circumstances.",
    "offers opportunities for innovation, improvement, and competitive advantage in the market.",
    "necessitates collaboration, communication, and coordination among stakeholders.",
    "enables organizations to achieve their goals through systematic and methodical approaches.",
];

pub(crate) const CLOSING_SENTENCES: [&str; 4] = [
    "This approach ensures that {topic} initiatives are both effective and sustainable.",
    "By focusing on these fundamentals, organizations can maximize the benefits of {topic}.",
    "The integration of {topic} into existing processes requires thoughtful consideration.",
    "Success in {topic} often depends on understanding these critical factors.",
];

pub(crate) const BULLETS: [&str; 8] = [
    "Enhanced understanding of {topic} fundamentals",
    "Improved implementation strategies and methodologies",
    "Better decision-making capabilities and outcomes",
    "Increased efficiency and productivity measures",
    "Stronger competitive positioning and market presence",
    "More effective resource allocation and utilization",
    "Greater stakeholder engagement and satisfaction",
    "Improved risk management and mitigation strategies",
];

pub(crate) const INTRO_TAIL: [&str; 2] = [
    "This comprehensive guide explores the multifaceted aspects of {topic}, providing valuable insights and actionable strategies.",
    "Whether you're a beginner or looking to deepen your understanding, this article covers essential concepts and practical applications.",
];

pub(crate) const CONCLUSION_TAIL: &str = "significant competitive advantages and sustainable growth. {topic} represents a crucial investment in future success, offering both immediate benefits and long-term value. By understanding these key concepts and implementing the strategies outlined in this guide, you can harness the full potential of {topic} to achieve your objectives and drive meaningful results.";

/// Substitute the topic into a template.
pub(crate) fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_placeholder() {
        assert_eq!(
            fill(CONCLUSION_TAIL, "Rust").matches("Rust").count(),
            2
        );
        assert!(!fill(TITLES[0], "Rust").contains(TOPIC_PLACEHOLDER));
    }

    #[test]
    fn test_topic_is_not_rescanned() {
        assert_eq!(fill("a {topic} b", "{topic}"), "a {topic} b");
    }

    #[test]
    fn test_every_starter_mentions_topic() {
        assert!(SENTENCE_STARTERS.iter().all(|s| s.contains(TOPIC_PLACEHOLDER)));
        assert!(CLOSING_SENTENCES.iter().all(|s| s.contains(TOPIC_PLACEHOLDER)));
        assert!(TITLES.iter().all(|s| s.contains(TOPIC_PLACEHOLDER)));
    }
}
