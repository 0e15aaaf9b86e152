//! Answer checking heuristics.
//!
//! Reference answers are hand-written and often decorate the accepted answer:
//! `"Париж (столица Франции)."`, `"ООН. Организация Объединённых Наций"`.
//! [`is_answer_correct`] accepts the user's answer if any of these holds:
//!
//! 1. its uppercase form equals a run of 3+ uppercase Latin/Cyrillic letters in the reference;
//! 2. it equals (case-insensitively) the trimmed text before the first `.`;
//! 3. it equals (case-insensitively) the trimmed text before the first `(`;
//! 4. it is longer than 2 characters and a case-insensitive prefix of the reference.
//!
//! No typo tolerance: everything else is an exact comparison.

use regex::Regex;
use std::sync::OnceLock;

/// Shortest user answer accepted by the prefix rule is this + 1 characters.
const MIN_PREFIX_LEN: usize = 2;

fn uppercase_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-ZА-ЯЁ]{3,}").expect("uppercase run pattern is valid"))
}

/// Maximal runs of 3 or more uppercase letters, e.g. `"ООН"` in `"ООН — Организация"`.
pub fn uppercase_fragments(reference_answer: &str) -> Vec<&str> {
    uppercase_run()
        .find_iter(reference_answer)
        .map(|m| m.as_str())
        .collect()
}

fn matches_fragment(reference_answer: &str, user_answer: &str) -> bool {
    let upper = user_answer.to_uppercase();
    uppercase_fragments(reference_answer)
        .into_iter()
        .any(|fragment| fragment == upper)
}

fn matches_before(reference_answer: &str, user_answer: &str, delimiter: char) -> bool {
    let head = reference_answer
        .split(delimiter)
        .next()
        .unwrap_or(reference_answer);
    head.trim().to_lowercase() == user_answer.to_lowercase()
}

fn matches_prefix(reference_answer: &str, user_answer: &str) -> bool {
    user_answer.chars().count() > MIN_PREFIX_LEN
        && reference_answer
            .to_lowercase()
            .starts_with(&user_answer.to_lowercase())
}

/// Decides whether `user_answer` is an accepted form of `reference_answer`. Pure and total.
pub fn is_answer_correct(reference_answer: &str, user_answer: &str) -> bool {
    matches_fragment(reference_answer, user_answer)
        || matches_before(reference_answer, user_answer, '.')
        || matches_before(reference_answer, user_answer, '(')
        || matches_prefix(reference_answer, user_answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_fragments() {
        assert_eq!(
            uppercase_fragments("ООН — Организация Объединённых Наций, NATO и СССР"),
            vec!["ООН", "NATO", "СССР"]
        );
        assert!(uppercase_fragments("Ок, ДА").is_empty());
    }

    #[test]
    fn test_fragment_match_any_case() {
        assert!(is_answer_correct("ООН — Организация Объединённых Наций", "ООН"));
        assert!(is_answer_correct("ООН — Организация Объединённых Наций", "оон"));
        assert!(is_answer_correct("Ответ: NASA, космическое агентство", "nasa"));
        // A substring of a run is not a run.
        assert!(!is_answer_correct("Ответ: СССР, страна", "ССС"));
    }

    #[test]
    fn test_text_before_period() {
        assert!(is_answer_correct("ООН. Организация Объединённых Наций", "оон"));
        assert!(is_answer_correct("  Кутузов . Полководец", "КУТУЗОВ"));
        assert!(!is_answer_correct("Кутузов. Полководец", "Полководец"));
    }

    #[test]
    fn test_text_before_parenthesis() {
        assert!(is_answer_correct("Москва (столица России).", "москва"));
        assert!(is_answer_correct("Париж (столица Франции)", "Париж"));
        assert!(!is_answer_correct("Париж (столица Франции)", "Франция"));
    }

    #[test]
    fn test_prefix_needs_more_than_two_chars() {
        assert!(!is_answer_correct("Слон", "сл"));
        assert!(!is_answer_correct("Слон", "с"));
        assert!(is_answer_correct("Слон", "сло"));
        assert!(is_answer_correct("Слон африканский", "слон аф"));
        assert!(!is_answer_correct("Слон", "слоник"));
    }

    #[test]
    fn test_no_delimiter_compares_whole_reference() {
        assert!(is_answer_correct("  Байкал  ", "байкал"));
        assert!(!is_answer_correct("Байкал", "Байкалл"));
    }

    #[test]
    fn test_empty_answer() {
        assert!(!is_answer_correct("Слон", ""));
        assert!(is_answer_correct(". пояснение", ""));
        assert!(is_answer_correct(" (пояснение)", ""));
    }

    #[test]
    fn test_no_typo_tolerance() {
        assert!(!is_answer_correct("Москва (столица России).", "масква"));
    }
}
