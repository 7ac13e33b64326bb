//! Rule-based task classification.
//!
//! Deterministic keyword inference used whenever the remote service is
//! unavailable or fails. Pure function of the input text: identical input
//! always yields the identical `(category, priority)` pair.

use crate::models::{Category, ClassificationResult, Priority};

/// An ordered keyword set mapping to a category.
struct CategoryRule {
    category: Category,
    keywords: &'static [&'static str],
}

/// An ordered keyword set mapping to a priority.
struct PriorityRule {
    priority: Priority,
    keywords: &'static [&'static str],
}

// Rule order encodes precedence: the first matching set wins, so a text
// containing both a work and an errands keyword resolves to work, and an
// urgent keyword beats a co-occurring low-priority one.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Work,
        keywords: &[
            "meeting",
            "project",
            "deadline",
            "client",
            "report",
            "presentation",
            "email",
            "call",
        ],
    },
    CategoryRule {
        category: Category::Errands,
        keywords: &[
            "buy",
            "shop",
            "groceries",
            "pickup",
            "appointment",
            "store",
            "bank",
            "pay",
        ],
    },
];

const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        priority: Priority::High,
        keywords: &["urgent", "asap", "important", "critical", "due", "deadline"],
    },
    PriorityRule {
        priority: Priority::Low,
        keywords: &["sometime", "eventually", "when possible", "later"],
    },
];

/// Deterministic keyword classifier.
///
/// Matching is substring containment on the lowercased text, not whole-word
/// matching: "deadline" matches inside "deadlines".
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies task text into a category/priority pair.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text = text.to_lowercase();

        let category = CATEGORY_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
            .map(|rule| rule.category)
            .unwrap_or(Category::Personal);

        let priority = PRIORITY_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
            .map(|rule| rule.priority)
            .unwrap_or(Priority::Medium);

        ClassificationResult { category, priority }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_keywords() {
        let classifier = RuleClassifier::new();

        let texts = vec![
            "Prepare the quarterly report",
            "Schedule a meeting with the team",
            "Email the contract draft",
            "Client presentation on Friday",
        ];

        for text in texts {
            let result = classifier.classify(text);
            assert_eq!(result.category, Category::Work, "Expected work for '{}'", text);
        }
    }

    #[test]
    fn test_errands_keywords() {
        let classifier = RuleClassifier::new();

        let texts = vec![
            "Buy a birthday present",
            "Pickup the dry cleaning",
            "Dentist appointment",
            "Go to the bank",
        ];

        for text in texts {
            let result = classifier.classify(text);
            assert_eq!(
                result.category,
                Category::Errands,
                "Expected errands for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_no_keyword_defaults_to_personal_medium() {
        let classifier = RuleClassifier::new();

        let result = classifier.classify("Water the plants");
        assert_eq!(result.category, Category::Personal);
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn test_work_wins_over_errands() {
        let classifier = RuleClassifier::new();

        // "meeting" (work) and "bank" (errands) both match; work has precedence.
        let result = classifier.classify("Meeting at the bank branch");
        assert_eq!(result.category, Category::Work);
    }

    #[test]
    fn test_urgent_keywords_give_high_priority() {
        let classifier = RuleClassifier::new();

        for text in ["Urgent: renew passport", "Fix this asap", "critical bugfix"] {
            let result = classifier.classify(text);
            assert_eq!(result.priority, Priority::High, "Expected high for '{}'", text);
        }
    }

    #[test]
    fn test_urgent_wins_over_low() {
        let classifier = RuleClassifier::new();

        let result = classifier.classify("Important, but do it later");
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_substring_matching() {
        let classifier = RuleClassifier::new();

        // "deadline" matches inside "deadlines" and also triggers high priority.
        let result = classifier.classify("Track all project deadlines");
        assert_eq!(result.category, Category::Work);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = RuleClassifier::new();

        assert_eq!(
            classifier.classify("BUY GROCERIES"),
            classifier.classify("buy groceries")
        );
    }

    #[test]
    fn test_buy_groceries_sometime() {
        let classifier = RuleClassifier::new();

        let result = classifier.classify("Buy groceries sometime");
        assert_eq!(result.category, Category::Errands);
        assert_eq!(result.priority, Priority::Low);
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let classifier = RuleClassifier::new();

        let first = classifier.classify("Pay the electricity bill, due Monday");
        for _ in 0..5 {
            assert_eq!(classifier.classify("Pay the electricity bill, due Monday"), first);
        }
    }
}
