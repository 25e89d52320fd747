//! ATS scoring engine: maps resume text to a score and a suggestion list.
//!
//! Pure and total: no I/O, no shared state, no failure path. Any string,
//! including empty or binary-looking text, produces a well-formed result.
//!
//! Algorithm:
//! 1. Lowercase once; every rule is a substring test on that text.
//! 2. Essential-section hits add their weight; misses add a suggestion.
//! 3. The image penalty applies at most once.
//! 4. Bonus-keyword hits accumulate into a pool capped at `BONUS_CAP`.
//! 5. The total is clamped to `[MIN_SCORE, MAX_SCORE]`.

use serde::Serialize;

use crate::analysis::rules::{RuleCategory, BONUS_CAP, MAX_SCORE, MIN_SCORE, RULES};
use crate::analysis::suggestions::SuggestionSet;

/// Shown when an uploaded document could not be turned into text.
pub const EXTRACTION_FAILURE_SUGGESTION: &str =
    "An error occurred while processing the file. Please try a different file format.";

/// Score and suggestions for one resume. Serialized as the response body of
/// both analysis endpoints, with no other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    score: u32,
    suggestions: Vec<String>,
}

impl AnalysisResult {
    fn new(score: i32, suggestions: SuggestionSet) -> Self {
        Self {
            score: score.clamp(MIN_SCORE, MAX_SCORE) as u32,
            suggestions: suggestions.into_vec(),
        }
    }

    /// The degenerate result returned when document extraction fails.
    pub fn extraction_failure() -> Self {
        Self {
            score: 0,
            suggestions: vec![EXTRACTION_FAILURE_SUGGESTION.to_string()],
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

pub fn analyze(text: &str) -> AnalysisResult {
    let normalized = text.to_lowercase();

    let mut score = 0_i32;
    let mut bonus = 0_i32;
    let mut suggestions = SuggestionSet::new();

    for rule in RULES {
        let matched = rule.matches(&normalized);
        if matched {
            match rule.category {
                RuleCategory::EssentialSection | RuleCategory::FormattingPenalty => {
                    score += rule.weight
                }
                RuleCategory::BonusKeyword => bonus += rule.weight,
            }
        }
        if rule.suggests_when(matched) {
            suggestions.insert(rule.suggestion);
        }
    }

    score += bonus.min(BONUS_CAP);

    AnalysisResult::new(score, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SECTIONS: &str = "Contact\nSummary\nExperience\nSkills\nEducation";
    const ACTION_VERBS: &str = "Use strong action verbs to start bullet points.";
    const INDUSTRY: &str = "Incorporate more industry-specific keywords.";
    const PHOTO: &str =
        "Remove your photo. Most ATS systems cannot process images and they take up valuable space.";

    fn missing_section_suggestions() -> Vec<String> {
        RULES
            .iter()
            .filter(|r| r.category == RuleCategory::EssentialSection)
            .map(|r| r.suggestion.to_string())
            .collect()
    }

    fn assert_unique(result: &AnalysisResult) {
        let mut seen = std::collections::HashSet::new();
        for s in result.suggestions() {
            assert!(seen.insert(s), "duplicate suggestion: {s}");
        }
    }

    #[test]
    fn test_empty_text_scores_zero_with_all_missing_sections() {
        let result = analyze("");
        assert_eq!(result.score(), 0);
        assert_eq!(result.suggestions(), missing_section_suggestions().as_slice());
    }

    #[test]
    fn test_all_sections_only_scores_75_without_suggestions() {
        let result = analyze(ALL_SECTIONS);
        assert_eq!(result.score(), 75);
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(analyze("CONTACT SUMMARY EXPERIENCE SKILLS EDUCATION").score(), 75);
    }

    #[test]
    fn test_each_section_weight() {
        for (keyword, weight) in [
            ("contact", 10),
            ("summary", 15),
            ("experience", 20),
            ("skills", 20),
            ("education", 10),
        ] {
            let result = analyze(keyword);
            assert_eq!(result.score(), weight, "{keyword}");
            assert_eq!(result.suggestions().len(), 4, "{keyword}");
        }
    }

    #[test]
    fn test_both_image_formats_penalized_once() {
        let text = format!("{ALL_SECTIONS}\nphoto.png\navatar.jpg");
        let result = analyze(&text);
        assert_eq!(result.score(), 65);
        assert_eq!(result.suggestions(), [PHOTO.to_string()]);
    }

    #[test]
    fn test_penalty_alone_clamps_to_zero() {
        let result = analyze("me.jpg");
        assert_eq!(result.score(), 0);
        assert_eq!(result.suggestions().len(), 6);
        assert_eq!(result.suggestions()[5], PHOTO);
    }

    #[test]
    fn test_three_action_verbs_under_cap() {
        let text = format!("{ALL_SECTIONS}\nDeveloped X. Managed Y. Created Z.");
        let result = analyze(&text);
        assert_eq!(result.score(), 81);
        assert_eq!(result.suggestions(), [ACTION_VERBS.to_string()]);
    }

    #[test]
    fn test_all_bonus_keywords_capped_at_10() {
        let text = format!(
            "{ALL_SECTIONS}\ndeveloped managed created javascript python react java"
        );
        let result = analyze(&text);
        assert_eq!(result.score(), 85);
        assert_eq!(
            result.suggestions(),
            [ACTION_VERBS.to_string(), INDUSTRY.to_string()]
        );
    }

    #[test]
    fn test_javascript_counts_for_java_too() {
        let text = format!("{ALL_SECTIONS}\nJavaScript");
        assert_eq!(analyze(&text).score(), 81);
    }

    #[test]
    fn test_suggestion_order_follows_rule_order() {
        let result = analyze("developed python headshot.png skills");
        let expected: Vec<String> = [
            "Add a clear Contact Information section at the top.",
            "Add a Professional Summary or Objective section.",
            "Add a Work Experience section highlighting accomplishments.",
            "Add an Education section with degree and institution.",
            PHOTO,
            ACTION_VERBS,
            INDUSTRY,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(result.suggestions(), expected.as_slice());
        // skills 20 - 10 + bonus 5
        assert_eq!(result.score(), 15);
        assert_unique(&result);
    }

    #[test]
    fn test_non_ascii_and_binary_looking_input() {
        for text in ["résumé ÉDUCATION", "\u{0}\u{1}\u{fffd}\u{7f}", "ΣΚΙΛΛΣ 技能"] {
            let result = analyze(text);
            assert!(result.score() <= 100);
            assert_unique(&result);
        }
        assert_eq!(analyze("résumé ÉDUCATION").score(), 0);
    }

    #[test]
    fn test_score_bounded_and_suggestions_unique_across_inputs() {
        let inputs = [
            "",
            ALL_SECTIONS,
            "java java java javascript react react python",
            ".png .jpg .png .jpg",
            "contact summary experience skills education developed managed created javascript python react java",
            "photo.jpg developed",
        ];
        for text in inputs {
            let result = analyze(text);
            assert!(result.score() <= 100, "{text}");
            assert_unique(&result);
        }
    }

    #[test]
    fn test_score_monotonic_in_positive_keywords() {
        let positive: Vec<&str> = RULES
            .iter()
            .filter(|r| r.weight > 0)
            .flat_map(|r| r.keywords.iter().copied())
            .collect();
        assert_eq!(positive.len(), 12);

        for penalty in ["", "photo.png"] {
            for mask in 0_u32..(1 << positive.len()) {
                let base: Vec<&str> = positive
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, k)| *k)
                    .collect();
                let base_score = analyze(&format!("{} {penalty}", base.join(" "))).score();

                for (i, keyword) in positive.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        continue;
                    }
                    let extended = format!("{} {keyword} {penalty}", base.join(" "));
                    let extended_score = analyze(&extended).score();
                    assert!(
                        extended_score >= base_score,
                        "adding {keyword} to {base:?} dropped {base_score} -> {extended_score}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Summary: developed react apps. Contact: me@example.com. me.png";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_extraction_failure_result() {
        let result = AnalysisResult::extraction_failure();
        assert_eq!(result.score(), 0);
        assert_eq!(result.suggestions(), [EXTRACTION_FAILURE_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_serializes_to_score_and_suggestions_only() {
        let value = serde_json::to_value(analyze(ALL_SECTIONS)).unwrap();
        assert_eq!(value, serde_json::json!({ "score": 75, "suggestions": [] }));
    }
}
