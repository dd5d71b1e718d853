//! Pronoun selection by number, case slot and person/gender.

use alloc::string::{String, ToString};

use scribe_protocol::{DiscourseFunction, Features, Gender, LexicalFlags, NumberAgreement, Person};

use crate::tables::{MorphTables, PronounCase};
use crate::MorphRequest;

pub fn realise(request: &MorphRequest<'_>, tables: &MorphTables) -> String {
    let base = request.base_form();
    if tables.is_wh_pronoun(base) {
        return base.to_string();
    }

    let features = request.features;
    let unmarked = features.person.is_none() && features.gender.is_none() && features.number.is_none();
    if unmarked && !base.is_empty() && !tables.pronouns.contains(base) {
        // "everyone", "something": pronouns the table does not model.
        return base.to_string();
    }

    let reflexive = features.is_reflexive() || request.has_flag(LexicalFlags::REFLEXIVE);
    let case = case_slot(features, reflexive);
    let person = request.person().unwrap_or(Person::Third);
    let gender = request.gender().unwrap_or(Gender::Neuter);
    let plural = request.number() == Some(NumberAgreement::Plural);

    tables.pronouns.lookup(plural, case, person, gender).to_string()
}

/// Picks the table row. A passive clause swaps subjective and objective roles;
/// a pronoun with no role at all takes its citation (subjective) form.
pub fn case_slot(features: &Features, reflexive: bool) -> PronounCase {
    let function = features.discourse_function;
    if reflexive {
        return PronounCase::Reflexive;
    }
    if features.is_possessive() {
        return if function == Some(DiscourseFunction::Specifier) {
            PronounCase::PossessiveDeterminer
        } else {
            PronounCase::Possessive
        };
    }

    let passive = features.is_passive();
    let subjective = match function {
        None | Some(DiscourseFunction::Specifier) => true,
        Some(DiscourseFunction::Subject) => !passive,
        Some(DiscourseFunction::Object) | Some(DiscourseFunction::Complement) => passive,
        Some(_) => false,
    };
    if subjective {
        PronounCase::Subjective
    } else {
        PronounCase::Objective
    }
}
