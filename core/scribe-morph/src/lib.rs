#![no_std]

extern crate alloc;

pub mod adjective;
pub mod determiner;
pub mod noun;
pub mod pronoun;
pub mod tables;
pub mod verb;

mod suffix;

use alloc::string::{String, ToString};

use scribe_protocol::{
    Features, Gender, InflectedForms, Inflection, LexicalCategory, LexicalFlags, NumberAgreement,
    Person, WordEntry,
};

pub use tables::{MorphTables, PronounCase, PronounTable};

/// One inflection request: the base form, the lexical entry if known, and the
/// features naming the wanted surface form.
#[derive(Debug, Clone, Copy)]
pub struct MorphRequest<'a> {
    pub base: &'a str,
    pub entry: Option<&'a WordEntry>,
    pub features: &'a Features,
}

impl<'a> MorphRequest<'a> {
    pub fn new(base: &'a str, features: &'a Features) -> Self {
        Self { base, entry: None, features }
    }

    pub fn with_entry(mut self, entry: &'a WordEntry) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Spelling the rules start from: the entry's default spelling variant, else the request's base.
    pub fn base_form(&self) -> &'a str {
        match self.entry {
            Some(entry) => entry.spelling_variant(),
            None => self.base,
        }
    }

    pub fn pattern(&self) -> Inflection {
        self.features
            .inflection
            .or(self.entry.map(|entry| entry.inflection))
            .unwrap_or_default()
    }

    /// A form supplied with the request itself.
    pub fn override_form(&self, pick: fn(&InflectedForms) -> &Option<String>) -> Option<&'a str> {
        pick(&self.features.forms).as_deref()
    }

    /// A form stored in the lexicon.
    pub fn lexicon_form(&self, pick: fn(&InflectedForms) -> &Option<String>) -> Option<&'a str> {
        self.entry.and_then(|entry| pick(&entry.forms).as_deref())
    }

    /// Request form first, lexicon form second.
    pub fn stored_form(&self, pick: fn(&InflectedForms) -> &Option<String>) -> Option<&'a str> {
        self.override_form(pick).or_else(|| self.lexicon_form(pick))
    }

    pub fn number(&self) -> Option<NumberAgreement> {
        self.features.number.or(self.entry.and_then(|entry| entry.number))
    }

    pub fn person(&self) -> Option<Person> {
        self.features.person.or(self.entry.and_then(|entry| entry.person))
    }

    pub fn gender(&self) -> Option<Gender> {
        self.features.gender.or(self.entry.and_then(|entry| entry.gender))
    }

    pub fn has_flag(&self, flag: LexicalFlags) -> bool {
        self.entry.map_or(false, |entry| entry.has_flag(flag))
    }
}

/// Produces the surface string for one word. An empty base form yields
/// empty text.
pub fn generate(
    category: LexicalCategory,
    request: &MorphRequest<'_>,
    tables: &MorphTables,
) -> String {
    if category == LexicalCategory::Pronoun {
        return pronoun::realise(request, tables);
    }
    if request.base_form().is_empty() {
        return String::new();
    }

    match category {
        LexicalCategory::Noun => noun::realise(request),
        LexicalCategory::Verb => verb::realise(request),
        LexicalCategory::Adjective | LexicalCategory::Adverb => adjective::realise(request),
        _ => request.base_form().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use proptest::prelude::*;
    use scribe_protocol::{Form, Tense, WordId};

    fn plural() -> Features {
        Features {
            number: Some(NumberAgreement::Plural),
            ..Features::default()
        }
    }

    #[test]
    fn test_empty_base_gives_empty_text() {
        let tables = MorphTables::default();
        let features = plural();
        let request = MorphRequest::new("", &features);
        for category in [LexicalCategory::Verb, LexicalCategory::Noun, LexicalCategory::Modal] {
            assert_eq!(generate(category, &request, &tables), "");
        }
    }

    #[test]
    fn test_dispatch_by_category() {
        let tables = MorphTables::default();
        let features = plural();
        let dog = MorphRequest::new("dog", &features);
        assert_eq!(generate(LexicalCategory::Noun, &dog, &tables), "dogs");
        // Categories without rules keep their base form.
        let the = MorphRequest::new("the", &features);
        assert_eq!(generate(LexicalCategory::Determiner, &the, &tables), "the");
    }

    #[test]
    fn test_spelling_variant_is_the_starting_point() {
        let mut entry = WordEntry::new(WordId::new(4), "colour", LexicalCategory::Noun);
        entry.spelling = Some("color".to_string());
        let features = plural();
        let request = MorphRequest::new("colour", &features).with_entry(&entry);
        assert_eq!(noun::realise(&request), "colors");
    }

    proptest! {
        #[test]
        fn test_regular_plural_shape(stem in "[a-z]{2,12}") {
            let features = plural();
            let request = MorphRequest::new(&stem, &features);
            let realised = noun::realise(&request);
            prop_assert!(realised.ends_with('s'));
            prop_assert!(realised.len() > stem.len());
        }

        #[test]
        fn test_regular_past_shape(stem in "[a-z]{2,12}") {
            prop_assume!(stem != "be");
            let features = Features { tense: Some(Tense::Past), ..Features::default() };
            let request = MorphRequest::new(&stem, &features);
            let realised = verb::realise(&request);
            prop_assert!(realised.ends_with("ed") || realised.ends_with('d'));
        }

        #[test]
        fn test_generation_is_deterministic(stem in "[a-z]{1,12}") {
            let tables = MorphTables::default();
            let features = Features { form: Some(Form::PresentParticiple), ..Features::default() };
            let request = MorphRequest::new(&stem, &features);
            let first = generate(LexicalCategory::Verb, &request, &tables);
            let second = generate(LexicalCategory::Verb, &request, &tables);
            prop_assert_eq!(first, second);
        }
    }
}
