//! Determiner agreement with the word that follows it.

use alloc::string::{String, ToString};

use scribe_protocol::NumberAgreement;

use crate::suffix::is_vowel;
use crate::tables::MorphTables;

/// Whether `word` takes "an" rather than "a".
pub fn requires_an(word: &str, tables: &MorphTables) -> bool {
    let lower = word.to_lowercase();

    match lower.chars().next() {
        Some(c) if is_vowel(c) => !tables
            .an_exceptions
            .iter()
            .any(|prefix| lower.starts_with(prefix.as_str())),
        // "an 8", "an 80"
        Some('8') => true,
        // "an 11", "an 18,000" but "a 1100" and "a 110"
        Some('1') if lower.starts_with("11") || lower.starts_with("18") => {
            let digits = lower
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == ',')
                .filter(char::is_ascii_digit)
                .count();
            digits % 3 == 2
        }
        _ => false,
    }
}

/// Re-inflects `determiner` for the word that follows it. Demonstratives
/// only change when the phrase's number is known.
pub fn agree(
    determiner: &str,
    following: &str,
    number: Option<NumberAgreement>,
    tables: &MorphTables,
) -> String {
    let plural = number == Some(NumberAgreement::Plural);
    let singular = number == Some(NumberAgreement::Singular);
    match determiner {
        "a" | "an" if plural => "some".to_string(),
        "a" | "an" => {
            if requires_an(following, tables) {
                "an".to_string()
            } else {
                "a".to_string()
            }
        }
        "this" if plural => "these".to_string(),
        "that" if plural => "those".to_string(),
        "these" if singular => "this".to_string(),
        "those" if singular => "that".to_string(),
        other => other.to_string(),
    }
}

/// Corrects a literal ending in " a" when the next word needs "an".
pub fn fix_trailing_article(text: &str, following: &str, tables: &MorphTables) -> Option<String> {
    let fixable = text == "a" || text.ends_with(" a");
    if fixable && requires_an(following, tables) {
        let mut fixed = String::from(text);
        fixed.push('n');
        Some(fixed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_an() {
        let tables = MorphTables::default();
        for word in ["apple", "Egg", "8", "80", "11", "18", "18,000", "11000"] {
            assert!(requires_an(word, &tables), "{word}");
        }
        for word in ["dog", "one", "onerous", "110", "180", "1100", "1"] {
            assert!(!requires_an(word, &tables), "{word}");
        }
    }

    #[test]
    fn test_scaled_numerals_ignore_exception_prefixes() {
        let tables = MorphTables::default();
        for word in ["11000", "18000", "18,000,000"] {
            assert!(requires_an(word, &tables), "{word}");
        }
        assert!(!requires_an("1800", &tables));
        assert!(!requires_an("110,000", &tables));
        assert_eq!(agree("a", "18000", None, &tables), "an");
    }

    #[test]
    fn test_agreement() {
        let tables = MorphTables::default();
        let plural = Some(NumberAgreement::Plural);
        let singular = Some(NumberAgreement::Singular);
        assert_eq!(agree("a", "apple", None, &tables), "an");
        assert_eq!(agree("an", "dog", singular, &tables), "a");
        assert_eq!(agree("a", "dogs", plural, &tables), "some");
        assert_eq!(agree("this", "dogs", plural, &tables), "these");
        assert_eq!(agree("those", "dog", singular, &tables), "that");
        assert_eq!(agree("those", "dogs", None, &tables), "those");
        assert_eq!(agree("the", "dogs", plural, &tables), "the");
    }

    #[test]
    fn test_trailing_article() {
        let tables = MorphTables::default();
        assert_eq!(fix_trailing_article("such a", "apple", &tables).as_deref(), Some("such an"));
        assert_eq!(fix_trailing_article("such a", "dog", &tables), None);
        assert_eq!(fix_trailing_article("banana", "apple", &tables), None);
    }
}
