//! The ATS rule table.
//!
//! Rules are evaluated strictly in slice order, and that order is also the
//! order suggestions reach the user: essential sections first, then
//! formatting penalties, then bonus keywords.

/// Maximum contribution of all bonus-keyword rules combined.
pub const BONUS_CAP: i32 = 10;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

const ACTION_VERB_SUGGESTION: &str = "Use strong action verbs to start bullet points.";
const INDUSTRY_KEYWORD_SUGGESTION: &str = "Incorporate more industry-specific keywords.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleCategory {
    /// Suggestion fires when the keyword is absent.
    EssentialSection,
    /// Weight is negative; suggestion fires when any keyword is present.
    FormattingPenalty,
    /// Weight goes to the capped bonus pool; suggestion fires when present.
    BonusKeyword,
}

/// A single scoring rule: a substring predicate over the normalized text.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Any one of these substrings satisfies the rule. Multiple keywords
    /// still contribute the weight at most once.
    pub keywords: &'static [&'static str],
    pub weight: i32,
    pub suggestion: &'static str,
    pub category: RuleCategory,
}

impl Rule {
    /// `normalized` must already be lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }

    pub fn suggests_when(&self, matched: bool) -> bool {
        match self.category {
            RuleCategory::EssentialSection => !matched,
            RuleCategory::FormattingPenalty | RuleCategory::BonusKeyword => matched,
        }
    }
}

pub const RULES: &[Rule] = &[
    // Essential sections
    Rule {
        keywords: &["contact"],
        weight: 10,
        suggestion: "Add a clear Contact Information section at the top.",
        category: RuleCategory::EssentialSection,
    },
    Rule {
        keywords: &["summary"],
        weight: 15,
        suggestion: "Add a Professional Summary or Objective section.",
        category: RuleCategory::EssentialSection,
    },
    Rule {
        keywords: &["experience"],
        weight: 20,
        suggestion: "Add a Work Experience section highlighting accomplishments.",
        category: RuleCategory::EssentialSection,
    },
    Rule {
        keywords: &["skills"],
        weight: 20,
        suggestion: "Include a dedicated Skills section.",
        category: RuleCategory::EssentialSection,
    },
    Rule {
        keywords: &["education"],
        weight: 10,
        suggestion: "Add an Education section with degree and institution.",
        category: RuleCategory::EssentialSection,
    },
    // Formatting
    Rule {
        keywords: &[".png", ".jpg"],
        weight: -10,
        suggestion: "Remove your photo. Most ATS systems cannot process images and they take up valuable space.",
        category: RuleCategory::FormattingPenalty,
    },
    // Action verbs
    Rule {
        keywords: &["developed"],
        weight: 2,
        suggestion: ACTION_VERB_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
    Rule {
        keywords: &["managed"],
        weight: 2,
        suggestion: ACTION_VERB_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
    Rule {
        keywords: &["created"],
        weight: 2,
        suggestion: ACTION_VERB_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
    // Technologies. "javascript" also satisfies "java".
    Rule {
        keywords: &["javascript"],
        weight: 3,
        suggestion: INDUSTRY_KEYWORD_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
    Rule {
        keywords: &["python"],
        weight: 3,
        suggestion: INDUSTRY_KEYWORD_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
    Rule {
        keywords: &["react"],
        weight: 3,
        suggestion: INDUSTRY_KEYWORD_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
    Rule {
        keywords: &["java"],
        weight: 3,
        suggestion: INDUSTRY_KEYWORD_SUGGESTION,
        category: RuleCategory::BonusKeyword,
    },
];
