//! Comparative and superlative forms, shared by adjectives and adverbs.

use alloc::string::{String, ToString};

use scribe_protocol::Inflection;

use crate::suffix::{append, double_final, ends_with_consonant_y, replace_suffix};
use crate::MorphRequest;

pub fn realise(request: &MorphRequest<'_>) -> String {
    let features = request.features;
    if features.is_comparative() {
        comparative(request)
    } else if features.is_superlative() {
        superlative(request)
    } else {
        request.base_form().to_string()
    }
}

pub fn comparative(request: &MorphRequest<'_>) -> String {
    if let Some(form) = request.stored_form(|f| &f.comparative) {
        return form.to_string();
    }
    graded(request, "er", "r")
}

pub fn superlative(request: &MorphRequest<'_>) -> String {
    if let Some(form) = request.stored_form(|f| &f.superlative) {
        return form.to_string();
    }
    graded(request, "est", "st")
}

fn graded(request: &MorphRequest<'_>, suffix: &str, after_e: &str) -> String {
    let base = request.base_form();
    if request.pattern() == Inflection::RegularDouble {
        return double_final(base, suffix);
    }
    if ends_with_consonant_y(base) {
        let mut grade = String::from("i");
        grade.push_str(suffix);
        replace_suffix(base, "y", &grade)
    } else if base.ends_with('e') {
        append(base, after_e)
    } else {
        append(base, suffix)
    }
}
