//! Verb inflection. The rule order follows the form first, then tense.

use alloc::string::{String, ToString};

use scribe_protocol::{Form, Inflection, NumberAgreement, Person, Tense};

use crate::suffix::{append, double_final, ends_with_consonant_y, ends_with_sibilant, is_vowel, replace_suffix};
use crate::MorphRequest;

pub fn realise(request: &MorphRequest<'_>) -> String {
    let base = request.base_form();
    let features = request.features;
    let form = features.form_or_normal();

    if features.is_negated() || form == Form::BareInfinitive {
        return base.to_string();
    }

    match form {
        Form::PresentParticiple | Form::Gerund => present_participle(request),
        Form::PastParticiple => past_participle(request),
        _ => match features.tense {
            Some(Tense::Past) => past(request),
            Some(Tense::Present) | None if is_present3s(request) => present3s(request),
            _ if base == "be" => {
                if request.person() == Some(Person::First) && !is_plural(request) {
                    "am".to_string()
                } else {
                    "are".to_string()
                }
            }
            _ => base.to_string(),
        },
    }
}

fn is_plural(request: &MorphRequest<'_>) -> bool {
    request.number() == Some(NumberAgreement::Plural)
}

/// Third person singular present; an unset person counts as third.
fn is_present3s(request: &MorphRequest<'_>) -> bool {
    !is_plural(request) && matches!(request.person(), None | Some(Person::Third))
}

pub fn present_participle(request: &MorphRequest<'_>) -> String {
    let base = request.base_form();
    if let Some(form) = request.stored_form(|f| &f.present_participle) {
        return form.to_string();
    }
    if base == "be" {
        return "being".to_string();
    }
    if request.pattern() == Inflection::RegularDouble {
        return double_final(base, "ing");
    }
    regular_present_participle(base)
}

pub fn regular_present_participle(base: &str) -> String {
    if base.ends_with("ie") {
        return replace_suffix(base, "ie", "ying");
    }
    // "make" -> "making", but "see" -> "seeing" and "dye" -> "dyeing".
    let mut tail = base.chars().rev();
    if let (Some('e'), Some(prev)) = (tail.next(), tail.next()) {
        if !matches!(prev, 'i' | 'y' | 'e' | 'o') {
            return replace_suffix(base, "e", "ing");
        }
    }
    append(base, "ing")
}

pub fn past_participle(request: &MorphRequest<'_>) -> String {
    let base = request.base_form();
    if let Some(form) = request.stored_form(|f| &f.past_participle) {
        return form.to_string();
    }
    if base == "be" {
        return "been".to_string();
    }
    if request.pattern() == Inflection::RegularDouble {
        return double_final(base, "ed");
    }
    regular_past(base)
}

pub fn past(request: &MorphRequest<'_>) -> String {
    let base = request.base_form();
    if base == "be" {
        let were = is_plural(request) || request.person() == Some(Person::Second);
        return if were { "were" } else { "was" }.to_string();
    }
    if let Some(form) = request.stored_form(|f| &f.past) {
        return form.to_string();
    }
    if request.pattern() == Inflection::RegularDouble {
        return double_final(base, "ed");
    }
    regular_past(base)
}

pub fn regular_past(base: &str) -> String {
    if base.ends_with('e') {
        append(base, "d")
    } else if ends_with_consonant_y(base) {
        replace_suffix(base, "y", "ied")
    } else {
        append(base, "ed")
    }
}

pub fn present3s(request: &MorphRequest<'_>) -> String {
    let base = request.base_form();
    if let Some(form) = request.stored_form(|f| &f.present3s) {
        return form.to_string();
    }
    match base {
        "be" => "is".to_string(),
        "have" => "has".to_string(),
        _ => regular_present3s(base),
    }
}

pub fn regular_present3s(base: &str) -> String {
    if ends_with_sibilant(base) {
        append(base, "es")
    } else if ends_with_consonant_y(base) {
        replace_suffix(base, "y", "ies")
    } else if base.len() > 1 && base.ends_with('o') && !base[..base.len() - 1].ends_with(is_vowel) {
        // "go" -> "goes", "do" -> "does"
        append(base, "es")
    } else {
        append(base, "s")
    }
}
