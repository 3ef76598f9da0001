//! Answer Comparison
//!
//! Correctness check for free-text meaning recall: trimmed, case-insensitive
//! equality against the reference definition. The scheduler never depends on
//! generated content for scoring — this is the only place definition text is
//! consulted, and only to produce the `was_correct` flag.

/// 判断自由回忆的答案是否正确
///
/// 去除首尾空白后做大小写不敏感的全等比较。
pub fn is_meaning_correct(answer: &str, definition: &str) -> bool {
    normalize(answer) == normalize(definition)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_meaning_correct("短暂的", "短暂的"));
        assert!(is_meaning_correct("fleeting", "fleeting"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert!(is_meaning_correct("  fleeting \n", "fleeting"));
        assert!(is_meaning_correct("fleeting", "  fleeting  "));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_meaning_correct("FLEETING", "fleeting"));
        assert!(is_meaning_correct("FlEeTiNg", "fleeting"));
    }

    #[test]
    fn test_mismatch() {
        assert!(!is_meaning_correct("lasting", "fleeting"));
        assert!(!is_meaning_correct("fleet", "fleeting"));
        // 内部空白不同视为不同答案
        assert!(!is_meaning_correct("flee ting", "fleeting"));
    }

    #[test]
    fn test_empty_definition() {
        // 释义尚未生成时，只有空答案才算"匹配"
        assert!(is_meaning_correct("", ""));
        assert!(!is_meaning_correct("anything", ""));
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_meaning_correct("ÉPHÉMÈRE", "éphémère"));
    }
}
