use scribe_protocol::{
    DiscourseFunction, Form, Group, InflectedWord, InterrogativeType, LexicalCategory, Node,
    NumberAgreement, Phrase, Tense,
};
use tracing::{debug, trace};

use crate::{is_copular, RealiseError, RealiseResult, Realiser};

impl Realiser {
    pub(crate) fn realise_verb_phrase(&self, phrase: &Phrase) -> RealiseResult {
        let features = &phrase.features;
        debug!(
            tense = ?features.tense,
            form = ?features.form,
            interrogative = ?features.interrogative_type,
            "realising verb phrase"
        );

        let verb_group = self.build_verb_group(phrase);
        trace!(
            verb_group = ?verb_group.iter().map(|n| n.base_form().unwrap_or("<text>")).collect::<Vec<_>>(),
            "verb group, innermost first"
        );
        let (main, auxiliaries) = split_verb_group(verb_group);

        let mut out = Group::new();
        let pre_modifiers = &phrase.pre_modifiers;
        if features.realises_auxiliary() {
            self.realise_auxiliaries(&mut out, auxiliaries)?;
            self.realise_list(&mut out, pre_modifiers, Some(DiscourseFunction::PreModifier))?;
            self.realise_main_verb(&mut out, phrase, main)?;
        } else if is_copular(phrase.head.as_deref()) {
            self.realise_main_verb(&mut out, phrase, main)?;
            self.realise_list(&mut out, pre_modifiers, Some(DiscourseFunction::PreModifier))?;
        } else {
            self.realise_list(&mut out, pre_modifiers, Some(DiscourseFunction::PreModifier))?;
            self.realise_main_verb(&mut out, phrase, main)?;
        }

        self.realise_verb_complements(&mut out, phrase)?;
        self.realise_list(&mut out, &phrase.post_modifiers, Some(DiscourseFunction::PostModifier))?;
        Ok(out.into_node())
    }

    /// Builds the verb group as a stack, innermost word first. `front` is the
    /// outermost verb not yet placed; each step may push it and replace it
    /// with a new auxiliary.
    fn build_verb_group(&self, phrase: &Phrase) -> Vec<Node> {
        let features = &phrase.features;
        let form = features.form_or_normal();
        let interrogative = features.interrogative_type;
        let tense = match form {
            Form::Gerund | Form::Infinitive => Some(Tense::Present),
            _ => features.tense,
        };

        // An empty modal counts as no modal.
        let explicit_modal = features.modal.clone().filter(|m| !m.is_empty());
        let mut modal_past = false;
        let modal = match form {
            Form::Infinitive => Some("to".to_string()),
            Form::Normal => {
                let coordinated_head = matches!(phrase.head.as_deref(), Some(Node::Coordination(_)));
                if tense == Some(Tense::Future)
                    && explicit_modal.is_none()
                    && (!coordinated_head || interrogative.is_some())
                {
                    Some("will".to_string())
                } else {
                    modal_past = explicit_modal.is_some() && tense == Some(Tense::Past);
                    explicit_modal
                }
            }
            _ => None,
        };

        let mut stack = Vec::new();
        if let Some(particle) = &features.particle {
            stack.push(Node::text(particle.as_str()));
        }

        let mut front = phrase.head.as_deref().map(|head| {
            let mut head = head.clone();
            let f = head.features_mut();
            f.tense = tense;
            if modal.is_some() {
                f.negated = Some(false);
            }
            if matches!(form, Form::Imperative | Form::Infinitive | Form::BareInfinitive) {
                f.non_morph = Some(true);
            }
            head
        });

        if features.is_passive() {
            push_as(&mut stack, front.take(), Form::PastParticiple);
            front = Some(self.verb_word("be"));
        }
        if features.is_progressive() {
            push_as(&mut stack, front.take(), Form::PresentParticiple);
            front = Some(self.verb_word("be"));
        }
        if features.is_perfect() || modal_past {
            push_as(&mut stack, front.take(), Form::PastParticiple);
            front = Some(self.verb_word("have").with(|f| {
                f.tense = tense;
                if modal.is_some() {
                    f.non_morph = Some(true);
                }
            }));
        }
        if modal.is_some() {
            if let Some(verb) = front.take() {
                stack.push(verb.with(|f| f.non_morph = Some(true)));
            }
        }

        let wh_object = interrogative.map_or(false, InterrogativeType::is_object);
        if features.is_negated() {
            if !stack.is_empty() || is_copular(front.as_ref()) {
                stack.push(self.not_word());
            } else {
                if let Some(verb) = front.take() {
                    if modal.is_none() {
                        stack.push(verb.with(|f| f.negated = Some(true)));
                    }
                }
                stack.push(self.not_word());
                // Negated WH-object questions take their "do" at clause level.
                if !wh_object {
                    front = Some(self.verb_word("do"));
                }
            }
        }

        if let Some(verb) = front {
            self.push_front_verb(&mut stack, phrase, verb, form);
        }
        if let Some(modal) = modal {
            stack.push(Node::inflected(modal, LexicalCategory::Modal));
        }
        stack
    }

    fn push_front_verb(&self, stack: &mut Vec<Node>, phrase: &Phrase, mut verb: Node, form: Form) {
        let features = &phrase.features;
        let interrogative = features.interrogative_type;
        match form {
            Form::Gerund | Form::PresentParticiple => {
                verb.features_mut().form = Some(Form::PresentParticiple);
                stack.push(verb);
            }
            Form::PastParticiple => {
                verb.features_mut().form = Some(Form::PastParticiple);
                stack.push(verb);
            }
            _ if (form != Form::Normal || interrogative.is_some())
                && !is_copular(phrase.head.as_deref())
                && stack.is_empty() =>
            {
                // Questions about the subject keep a finite verb.
                let subject_question = interrogative
                    .map_or(false, |q| q.is_subject() || q == InterrogativeType::HowMany);
                if !subject_question {
                    verb.features_mut().non_morph = Some(true);
                }
                stack.push(verb);
            }
            _ => {
                let f = verb.features_mut();
                f.tense = features.tense;
                f.person = features.person;
                f.number = Some(determine_number(phrase));
                stack.push(verb);
            }
        }
    }

    fn realise_auxiliaries(&self, out: &mut Group, auxiliaries: Vec<Node>) -> Result<(), RealiseError> {
        for auxiliary in auxiliaries.into_iter().rev() {
            if let Some(mut realised) = self.realise_syntax(&auxiliary)? {
                realised.set_discourse_function(DiscourseFunction::Auxiliary);
                out.push(realised);
            }
        }
        Ok(())
    }

    fn realise_main_verb(&self, out: &mut Group, phrase: &Phrase, main: Vec<Node>) -> Result<(), RealiseError> {
        for mut verb in main.into_iter().rev() {
            if !matches!(verb, Node::Text(_)) {
                verb.features_mut().interrogative_type = phrase.features.interrogative_type;
            }
            if let Some(realised) = self.realise_syntax(&verb)? {
                out.push(realised);
            }
        }
        Ok(())
    }

    /// Indirect objects, then direct objects, then everything else. Objects
    /// are left out where the clause realises them elsewhere: raised to
    /// subject in the passive, or replaced by the WH-word in a question.
    fn realise_verb_complements(&self, out: &mut Group, phrase: &Phrase) -> Result<(), RealiseError> {
        let interrogative = phrase.features.interrogative_type;
        let mut indirect = Vec::new();
        let mut direct = Vec::new();
        let mut other = Vec::new();

        for complement in &phrase.complements {
            let function = complement.discourse_function();
            let Some(mut realised) = self.realise_syntax(complement)? else {
                continue;
            };
            if realised.discourse_function().is_none() {
                realised.features_mut().discourse_function = function.or(Some(DiscourseFunction::Complement));
            }
            match function {
                Some(DiscourseFunction::IndirectObject) => indirect.push(realised),
                Some(DiscourseFunction::Object) => direct.push(realised),
                _ => other.push(realised),
            }
        }

        if !interrogative.map_or(false, InterrogativeType::is_indirect_object) {
            out.extend(indirect);
        }
        if !phrase.features.is_passive() && !interrogative.map_or(false, InterrogativeType::is_object) {
            out.extend(direct);
        }
        out.extend(other);
        Ok(())
    }

    pub(crate) fn verb_word(&self, base: &str) -> Node {
        InflectedWord::from_entry(self.lexicon.lookup_word(base, LexicalCategory::Verb)).into()
    }

    fn not_word(&self) -> Node {
        InflectedWord::from_entry(self.lexicon.lookup_word("not", LexicalCategory::Adverb)).into()
    }
}

fn push_as(stack: &mut Vec<Node>, verb: Option<Node>, form: Form) {
    if let Some(verb) = verb {
        stack.push(verb.with(|f| f.form = Some(form)));
    }
}

/// Singular unless the phrase says plural. A copula whose agreement follows
/// its complements ("there are dogs") is plural when any complement is.
fn determine_number(phrase: &Phrase) -> NumberAgreement {
    let number = phrase.features.number.unwrap_or(NumberAgreement::Singular);
    if phrase.features.agrees_with_complement() && is_copular(phrase.head.as_deref()) {
        if phrase.complements.iter().any(Node::is_plural) {
            NumberAgreement::Plural
        } else {
            NumberAgreement::Singular
        }
    } else {
        number
    }
}

/// Splits the stack into the main verb (innermost words up to and including
/// the first that is not "not") and the auxiliaries above it.
fn split_verb_group(stack: Vec<Node>) -> (Vec<Node>, Vec<Node>) {
    let mut main = Vec::new();
    let mut auxiliaries = Vec::new();
    let mut main_seen = false;
    for node in stack {
        if main_seen {
            auxiliaries.push(node);
        } else {
            main_seen = node.base_form() != Some("not");
            main.push(node);
        }
    }
    (main, auxiliaries)
}
