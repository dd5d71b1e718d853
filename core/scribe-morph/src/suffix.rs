use alloc::string::String;

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `y` preceded by a consonant, as in "fly" or "try" but not "play".
pub(crate) fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some('y'), Some(prev)) => prev.is_ascii_alphabetic() && !is_vowel(prev),
        _ => false,
    }
}

pub(crate) fn ends_with_sibilant(word: &str) -> bool {
    word.ends_with('s')
        || word.ends_with('z')
        || word.ends_with('x')
        || word.ends_with("ch")
        || word.ends_with("sh")
}

/// Replaces `old` at the end of `word` with `new`.
pub(crate) fn replace_suffix(word: &str, old: &str, new: &str) -> String {
    let mut out = String::with_capacity(word.len() + new.len());
    out.push_str(&word[..word.len() - old.len()]);
    out.push_str(new);
    out
}

/// Doubles the final letter before adding `suffix`: "stop" -> "stopped".
pub(crate) fn double_final(word: &str, suffix: &str) -> String {
    let mut out = String::from(word);
    if let Some(last) = word.chars().last() {
        out.push(last);
    }
    out.push_str(suffix);
    out
}

pub(crate) fn append(word: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(word.len() + suffix.len());
    out.push_str(word);
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_y() {
        assert!(ends_with_consonant_y("fly"));
        assert!(ends_with_consonant_y("happy"));
        assert!(!ends_with_consonant_y("play"));
        assert!(!ends_with_consonant_y("y"));
    }

    #[test]
    fn test_suffix_helpers() {
        assert_eq!(replace_suffix("radius", "us", "i"), "radii");
        assert_eq!(double_final("stop", "ed"), "stopped");
        assert!(ends_with_sibilant("church"));
        assert!(!ends_with_sibilant("dog"));
    }
}
