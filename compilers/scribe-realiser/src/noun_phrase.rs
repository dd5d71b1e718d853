use scribe_protocol::{
    DiscourseFunction, Gender, Group, InflectedWord, LexicalCategory, LexicalFlags, Node, Person,
    Phrase, PhraseCategory,
};
use tracing::debug;

use crate::{RealiseError, RealiseResult, Realiser};

// Slots of the pre-modifier order: qualitative < colour < classifying < noun.
const QUALITATIVE: u8 = 1;
const COLOUR: u8 = 2;
const CLASSIFYING: u8 = 3;
const NOUN: u8 = 4;

impl Realiser {
    pub(crate) fn realise_noun_phrase(&self, phrase: &Phrase) -> RealiseResult {
        if phrase.features.is_elided() {
            return Ok(None);
        }
        debug!(pronominal = phrase.features.is_pronominal(), "realising noun phrase");

        let mut out = Group::new();
        if phrase.features.is_pronominal() {
            out.push(self.synthesise_pronoun(phrase).into());
            return Ok(out.into_node());
        }

        self.realise_specifier(&mut out, phrase)?;
        self.realise_noun_pre_modifiers(&mut out, phrase)?;
        self.realise_head_noun(&mut out, phrase)?;
        self.realise_list(&mut out, &phrase.complements, Some(DiscourseFunction::Complement))?;
        self.realise_list(&mut out, &phrase.post_modifiers, Some(DiscourseFunction::PostModifier))?;

        Ok(out.into_node())
    }

    /// Personal pronoun standing in for the whole phrase.
    fn synthesise_pronoun(&self, phrase: &Phrase) -> InflectedWord {
        let features = &phrase.features;
        let base = match (features.person, features.gender) {
            (Some(Person::First), _) => "I",
            (Some(Person::Second), _) => "you",
            (_, Some(Gender::Masculine)) => "he",
            (_, Some(Gender::Feminine)) => "she",
            _ => "it",
        };

        let entry = self.lexicon.lookup_word(base, LexicalCategory::Pronoun);
        InflectedWord::from_entry(entry).with(|f| {
            f.person = features.person;
            f.gender = features.gender;
            f.number = features.number;
            f.possessive = features.possessive;
            f.reflexive = features.reflexive;
            f.passive = features.passive;
            f.discourse_function = features.discourse_function;
        })
    }

    fn realise_specifier(&self, out: &mut Group, phrase: &Phrase) -> Result<(), RealiseError> {
        let Some(specifier) = phrase.specifier.as_deref() else {
            return Ok(());
        };
        if phrase.features.is_raised() || phrase.features.is_elided() {
            return Ok(());
        }

        let mut specifier = specifier.clone();
        let nominal = specifier.is_lexical(LexicalCategory::Pronoun)
            || specifier.is_phrase(&PhraseCategory::NounPhrase);
        if !nominal {
            specifier.features_mut().number = phrase.features.number;
        }

        if let Some(mut realised) = self.realise_syntax(&specifier)? {
            realised.set_discourse_function(DiscourseFunction::Specifier);
            out.push(realised);
        }
        Ok(())
    }

    fn realise_noun_pre_modifiers(&self, out: &mut Group, phrase: &Phrase) -> Result<(), RealiseError> {
        let ordering = phrase
            .features
            .adjective_ordering
            .unwrap_or(self.config.adjective_ordering);

        if ordering && phrase.pre_modifiers.len() > 1 {
            let sorted = self.sort_pre_modifiers(&phrase.pre_modifiers);
            self.realise_list(out, &sorted, Some(DiscourseFunction::PreModifier))
        } else {
            self.realise_list(out, &phrase.pre_modifiers, Some(DiscourseFunction::PreModifier))
        }
    }

    /// Bubble sort on slot ranges: a modifier moves right of its neighbour
    /// whenever its earliest slot is later than the neighbour's latest.
    fn sort_pre_modifiers(&self, modifiers: &[Node]) -> Vec<Node> {
        let mut ordered: Vec<(u8, u8, Node)> = modifiers
            .iter()
            .map(|modifier| {
                let (min, max) = self.modifier_slots(modifier);
                (min, max, modifier.clone())
            })
            .collect();

        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..ordered.len() - 1 {
                if ordered[i].0 > ordered[i + 1].1 {
                    ordered.swap(i, i + 1);
                    changed = true;
                }
            }
        }
        ordered.into_iter().map(|(_, _, modifier)| modifier).collect()
    }

    /// Earliest and latest slot a pre-modifier may occupy.
    fn modifier_slots(&self, modifier: &Node) -> (u8, u8) {
        if modifier.is_lexical(LexicalCategory::Noun) || modifier.is_phrase(&PhraseCategory::NounPhrase) {
            return (NOUN, NOUN);
        }
        let adjectival = modifier.is_lexical(LexicalCategory::Adjective)
            || modifier.is_phrase(&PhraseCategory::AdjectivePhrase);
        if !adjectival {
            return (QUALITATIVE, NOUN);
        }

        let flags = self
            .lexical_entry(modifier)
            .map(|entry| entry.lexical_flags())
            .unwrap_or_default();
        let min = if flags.contains(LexicalFlags::QUALITATIVE) {
            QUALITATIVE
        } else if flags.contains(LexicalFlags::COLOUR) {
            COLOUR
        } else if flags.contains(LexicalFlags::CLASSIFYING) {
            CLASSIFYING
        } else {
            QUALITATIVE
        };
        let max = if flags.contains(LexicalFlags::CLASSIFYING) {
            CLASSIFYING
        } else if flags.contains(LexicalFlags::COLOUR) {
            COLOUR
        } else if flags.contains(LexicalFlags::QUALITATIVE) {
            QUALITATIVE
        } else {
            CLASSIFYING
        };
        (min, max)
    }

    fn realise_head_noun(&self, out: &mut Group, phrase: &Phrase) -> Result<(), RealiseError> {
        let Some(head) = phrase.head.as_deref() else {
            return Ok(());
        };

        let mut head = head.clone();
        copy_features!(phrase.features => head.features_mut(); gender, number, person, possessive, passive, elided, acronym, proper);

        if let Some(mut realised) = self.realise_syntax(&head)? {
            let function = if self.config.head_as_subject {
                Some(DiscourseFunction::Subject)
            } else {
                phrase.features.discourse_function.or(Some(DiscourseFunction::Head))
            };
            realised.features_mut().discourse_function = function;
            out.push(realised);
        }
        Ok(())
    }
}
