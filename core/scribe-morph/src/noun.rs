//! Noun inflection: plurals and possessives.

use alloc::string::{String, ToString};

use scribe_protocol::Inflection;

use crate::suffix::{append, ends_with_consonant_y, ends_with_sibilant, replace_suffix};
use crate::MorphRequest;

pub fn realise(request: &MorphRequest<'_>) -> String {
    let proper = request.features.is_proper()
        || request.has_flag(scribe_protocol::LexicalFlags::PROPER);

    let mut realised = if request.features.is_plural() && !proper {
        plural(request)
    } else {
        request.base_form().to_string()
    };

    if request.features.is_possessive() {
        add_possessive(&mut realised);
    }
    realised
}

pub fn plural(request: &MorphRequest<'_>) -> String {
    let base = request.base_form();

    if let Some(form) = request.override_form(|f| &f.plural) {
        return form.to_string();
    }
    let pattern = request.pattern();
    if matches!(pattern, Inflection::Uncountable | Inflection::Invariant) {
        return base.to_string();
    }
    if let Some(form) = request.lexicon_form(|f| &f.plural) {
        return form.to_string();
    }

    match pattern {
        Inflection::GrecoLatinRegular => greco_latin_plural(base),
        _ => regular_plural(base),
    }
}

pub fn regular_plural(base: &str) -> String {
    if ends_with_consonant_y(base) {
        replace_suffix(base, "y", "ies")
    } else if ends_with_sibilant(base) {
        append(base, "es")
    } else {
        append(base, "s")
    }
}

// Longer endings come first so "-ma" wins over "-a" and "-sis" over "-is".
const GRECO_LATIN: &[(&str, &str)] = &[
    ("us", "i"),
    ("ma", "mata"),
    ("a", "ae"),
    ("um", "a"),
    ("on", "a"),
    ("sis", "ses"),
    ("is", "ides"),
    ("men", "mina"),
    ("ex", "ices"),
    ("x", "ces"),
];

pub fn greco_latin_plural(base: &str) -> String {
    GRECO_LATIN
        .iter()
        .find(|(singular, _)| base.ends_with(singular))
        .map(|(singular, plural)| replace_suffix(base, singular, plural))
        .unwrap_or_else(|| regular_plural(base))
}

pub fn add_possessive(word: &mut String) {
    if word.ends_with('s') {
        word.push('\'');
    } else {
        word.push_str("'s");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_protocol::{Features, InflectedForms, LexicalCategory, NumberAgreement, WordEntry, WordId};

    fn plural_features() -> Features {
        Features {
            number: Some(NumberAgreement::Plural),
            ..Features::default()
        }
    }

    fn entry(base: &str, inflection: Inflection) -> WordEntry {
        WordEntry::new(WordId::new(1), base, LexicalCategory::Noun).with_inflection(inflection)
    }

    #[test]
    fn test_regular_plurals() {
        let features = plural_features();
        for (base, expected) in [
            ("dog", "dogs"),
            ("fly", "flies"),
            ("box", "boxes"),
            ("church", "churches"),
            ("boy", "boys"),
            ("bus", "buses"),
        ] {
            assert_eq!(realise(&MorphRequest::new(base, &features)), expected);
        }
    }

    #[test]
    fn test_uncountable_is_unchanged() {
        let features = plural_features();
        let rice = entry("rice", Inflection::Uncountable);
        assert_eq!(realise(&MorphRequest::new("rice", &features).with_entry(&rice)), "rice");
        let sheep = entry("sheep", Inflection::Invariant);
        assert_eq!(realise(&MorphRequest::new("sheep", &features).with_entry(&sheep)), "sheep");
    }

    #[test]
    fn test_greco_latin_plurals() {
        for (base, expected) in [
            ("radius", "radii"),
            ("stigma", "stigmata"),
            ("alumna", "alumnae"),
            ("datum", "data"),
            ("criterion", "criteria"),
            ("analysis", "analyses"),
            ("iris", "irides"),
            ("foramen", "foramina"),
            ("index", "indices"),
            ("matrix", "matrices"),
        ] {
            assert_eq!(greco_latin_plural(base), expected, "{base}");
        }
    }

    #[test]
    fn test_stored_forms_win() {
        let features = plural_features();
        let mouse = entry("mouse", Inflection::Irregular).with_forms(InflectedForms {
            plural: Some("mice".into()),
            ..InflectedForms::default()
        });
        assert_eq!(realise(&MorphRequest::new("mouse", &features).with_entry(&mouse)), "mice");

        let mut overriding = plural_features();
        overriding.forms.plural = Some("meeces".into());
        assert_eq!(
            realise(&MorphRequest::new("mouse", &overriding).with_entry(&mouse)),
            "meeces"
        );
    }

    #[test]
    fn test_possessive_and_proper() {
        let mut features = Features {
            possessive: Some(true),
            ..Features::default()
        };
        assert_eq!(realise(&MorphRequest::new("cat", &features)), "cat's");

        features.number = Some(NumberAgreement::Plural);
        assert_eq!(realise(&MorphRequest::new("cat", &features)), "cats'");

        features.possessive = None;
        features.proper = Some(true);
        assert_eq!(realise(&MorphRequest::new("Mary", &features)), "Mary");
    }
}
