use scribe_protocol::{
    ClauseStatus, DiscourseFunction, Features, Form, Group, InterrogativeType, LexicalCategory,
    LexicalFlags, Node, NumberAgreement, Person, Phrase, PhraseCategory, Tense,
};
use tracing::{debug, trace};

use crate::{is_copular, RealiseError, RealiseResult, Realiser};

impl Realiser {
    /// Linearises a clause: complementiser, cue phrase, question opening or
    /// front modifiers, subjects, the verb phrase (with subjects or raised
    /// objects split into it for questions), then the passive "by" phrase.
    pub(crate) fn realise_clause(&self, phrase: &Phrase) -> RealiseResult {
        let mut clause = phrase.clone();
        let has_subjects = !clause.subjects.is_empty();
        adjust_for_discourse_function(&mut clause.features, has_subjects);

        let interrogative = clause.features.interrogative_type;
        debug!(
            interrogative = ?interrogative,
            form = ?clause.features.form,
            passive = clause.features.is_passive(),
            subjects = clause.subjects.len(),
            "realising clause"
        );

        let mut verb = self.prepare_verb(&mut clause);

        let mut out = Group::new();
        self.realise_complementiser(&mut out, &clause)?;
        if let Some(cue) = clause.cue_phrase.as_deref() {
            if let Some(mut realised) = self.realise_syntax(cue)? {
                realised.set_discourse_function(DiscourseFunction::CuePhrase);
                out.push(realised);
            }
        }

        let mut split = None;
        match interrogative {
            Some(question) => {
                out.features.interrogative = Some(true);
                split = self.realise_question_opening(&mut out, &mut clause, verb.as_ref(), question)?;
            }
            None => {
                self.realise_list(&mut out, &clause.front_modifiers, Some(DiscourseFunction::FrontModifier))?;
            }
        }

        let form = clause.features.form_or_normal();
        let passive = clause.features.is_passive();
        if !matches!(form, Form::Infinitive | Form::Imperative) && !passive && split.is_none() {
            if let Some(subjects) = self.realise_subjects(&clause)? {
                out.push(subjects);
            }
        }

        if passive {
            if let Some(verb) = verb.as_mut() {
                self.realise_passive_objects(&mut out, split.as_mut(), verb, interrogative.is_some())?;
            }
        }

        self.realise_split_verb(&mut out, verb.as_ref(), split, interrogative)?;

        if passive && (!clause.subjects.is_empty() || interrogative.is_some()) {
            out.push(Node::inflected("by", LexicalCategory::Preposition));
            for subject in &clause.subjects {
                let subject = subject.clone().with(|f| {
                    f.passive = Some(true);
                    f.discourse_function = Some(DiscourseFunction::Subject);
                });
                if let Some(realised) = self.realise_syntax(&subject)? {
                    out.push(realised);
                }
            }
        }

        if interrogative.is_some() {
            self.realise_list(&mut out, &clause.front_modifiers, Some(DiscourseFunction::FrontModifier))?;
        }
        if interrogative == Some(InterrogativeType::WhoIndirectObject) {
            out.push(Node::inflected("to", LexicalCategory::Preposition));
        }

        Ok(out.into_node())
    }

    /// Takes the verb out of the clause and moves every clause-level verbal
    /// feature and child onto it, so the verb-phrase realiser sees one
    /// complete verb phrase. Bare verbs are wrapped in a verb phrase.
    fn prepare_verb(&self, clause: &mut Phrase) -> Option<Node> {
        let verb = clause.verb_phrase.take().or_else(|| clause.head.take())?;
        let mut verb = match *verb {
            node @ Node::Phrase(_) if node.is_phrase(&PhraseCategory::VerbPhrase) => node,
            Node::Coordination(coordination)
                if coordination
                    .coordinates
                    .iter()
                    .all(|c| c.is_phrase(&PhraseCategory::VerbPhrase)) =>
            {
                Node::Coordination(coordination)
            }
            other => Phrase::verb_phrase().with_head(other).into(),
        };

        if clause.features.has_form(Form::Infinitive) {
            clause.features.suppressed_complementiser = Some(true);
            let front_modifiers = std::mem::take(&mut clause.front_modifiers);
            clause.post_modifiers.extend(front_modifiers);
            verb.features_mut().non_morph = Some(true);
        }
        attach_clause_children(clause, &mut verb);

        let (plural, person) = subject_agreement(&clause.subjects);
        let interrogative = clause.features.interrogative_type;
        let expletive = clause.subjects.first().map_or(false, is_expletive)
            || interrogative.map_or(false, InterrogativeType::is_subject);

        let features = verb.features_mut();
        copy_features!(clause.features => features;
            interrogative_type, form, modal, negated, passive, perfect, progressive,
            tense, gender, particle, realise_auxiliary, complement_agreement);
        if plural {
            features.number = Some(NumberAgreement::Plural);
        } else if clause.features.number.is_some() {
            features.number = clause.features.number;
        }
        if let Some(person) = person.or(clause.features.person) {
            features.person = Some(person);
        }
        if expletive {
            features.complement_agreement = Some(true);
        }
        trace!(number = ?features.number, person = ?features.person, "subject agreement");
        Some(verb)
    }

    fn realise_complementiser(&self, out: &mut Group, clause: &Phrase) -> Result<(), RealiseError> {
        if clause.features.clause_status != Some(ClauseStatus::Subordinate)
            || clause.features.is_complementiser_suppressed()
        {
            return Ok(());
        }
        let complementiser = match clause.complementiser.as_deref() {
            Some(explicit) => explicit.clone(),
            None if self.config.default_complementiser.is_empty() => return Ok(()),
            None => Node::inflected(
                self.config.default_complementiser.as_str(),
                LexicalCategory::Complementiser,
            ),
        };
        if let Some(realised) = self.realise_syntax(&complementiser)? {
            out.push(realised);
        }
        Ok(())
    }

    /// Emits the WH-word or inserted "do". Returns the group that will sit
    /// between the first auxiliary and the rest of the verb group, when the
    /// question inverts subject and auxiliary.
    fn realise_question_opening(
        &self,
        out: &mut Group,
        clause: &mut Phrase,
        verb: Option<&Node>,
        question: InterrogativeType,
    ) -> Result<Option<Group>, RealiseError> {
        let none = Features::default();
        let features = verb.map(Node::features).unwrap_or(&none);
        // A negated WH-object question keeps "not" with the verb and takes "do" here.
        let inverts = has_auxiliary(features, !question.is_object()) || is_copular(verb);
        debug!(?question, inverts, "realising question");

        match question {
            InterrogativeType::WhoSubject | InterrogativeType::WhatSubject => {
                out.push(self.wh_word(question));
                clause.subjects.clear();
                Ok(None)
            }
            InterrogativeType::HowMany => {
                out.push(Node::inflected("how", LexicalCategory::Pronoun));
                out.push(Node::inflected("many", LexicalCategory::Adverb));
                Ok(None)
            }
            InterrogativeType::YesNo if !inverts => {
                out.push(self.do_auxiliary(features));
                Ok(None)
            }
            InterrogativeType::YesNo => self.split_subjects(clause).map(Some),
            _ => {
                out.push(self.wh_word(question));
                if inverts {
                    self.split_subjects(clause).map(Some)
                } else {
                    out.push(self.do_auxiliary(features));
                    Ok(None)
                }
            }
        }
    }

    /// Subjects that go inside the verb group. A passive clause realises its
    /// subjects in the "by" phrase instead, so its split starts empty.
    fn split_subjects(&self, clause: &Phrase) -> Result<Group, RealiseError> {
        let mut split = Group::new();
        if !clause.features.is_passive() {
            if let Some(subjects) = self.realise_subjects(clause)? {
                split.push(subjects);
            }
        }
        Ok(split)
    }

    fn realise_subjects(&self, clause: &Phrase) -> RealiseResult {
        let possessive = clause.features.has_form(Form::Gerund)
            && !clause.features.is_genitive_suppressed_in_gerund();
        let mut subjects = Group::new();
        for subject in &clause.subjects {
            let subject = subject.clone().with(|f| {
                f.discourse_function = Some(DiscourseFunction::Subject);
                if possessive {
                    f.possessive = Some(true);
                }
            });
            if let Some(realised) = self.realise_syntax(&subject)? {
                subjects.push(realised);
            }
        }
        Ok(subjects.into_node())
    }

    /// Direct objects of a passive clause become its surface subjects. The
    /// verb then agrees with them rather than with the demoted subjects.
    fn realise_passive_objects(
        &self,
        out: &mut Group,
        mut split: Option<&mut Group>,
        verb: &mut Node,
        interrogative: bool,
    ) -> Result<(), RealiseError> {
        let Node::Phrase(verb_phrase) = verb else {
            return Ok(());
        };

        let mut number = None;
        let mut person = None;
        for object in &verb_phrase.complements {
            if object.discourse_function() != Some(DiscourseFunction::Object) {
                continue;
            }
            number = match number {
                Some(NumberAgreement::Plural) => number,
                _ if is_plural_subject(object) => Some(NumberAgreement::Plural),
                _ => Some(NumberAgreement::Singular),
            };
            person = subject_person(object).or(person);

            let object = object.clone().with(|f| f.passive = Some(true));
            if let Some(realised) = self.realise_syntax(&object)? {
                match split.as_deref_mut() {
                    Some(split) if interrogative => split.push(realised),
                    _ => out.push(realised),
                }
            }
        }

        if number.is_some() {
            verb_phrase.features.number = number;
        }
        if person.is_some() {
            verb_phrase.features.person = person;
        }
        Ok(())
    }

    /// Realises the verb with the split group after its first element. A
    /// lone verb that is not a phrase takes the split before it, except in
    /// object questions.
    fn realise_split_verb(
        &self,
        out: &mut Group,
        verb: Option<&Node>,
        split: Option<Group>,
        interrogative: Option<InterrogativeType>,
    ) -> Result<(), RealiseError> {
        let realised = match verb {
            Some(verb) => self.realise_syntax(verb)?,
            None => None,
        };
        let split = split.and_then(Group::into_node);

        let (realised, split) = match (realised, split) {
            (None, None) => return Ok(()),
            (None, Some(split)) => {
                out.push(split);
                return Ok(());
            }
            (Some(mut realised), None) => {
                realised.set_discourse_function(DiscourseFunction::VerbPhrase);
                out.push(realised);
                return Ok(());
            }
            (Some(realised), Some(split)) => (realised, split),
        };

        let wh_object = interrogative.map_or(false, InterrogativeType::is_object);
        let from_phrase = verb.map_or(false, |v| v.is_phrase(&PhraseCategory::VerbPhrase));
        let mut group = Group::new();
        match realised {
            Node::Group(verb_group) => {
                let mut children = verb_group.children.into_iter();
                group.extend(children.next());
                group.push(split);
                group.extend(children);
            }
            single if wh_object || from_phrase => {
                group.push(single);
                group.push(split);
            }
            single => {
                group.push(split);
                group.push(single);
            }
        }
        group.features.discourse_function = Some(DiscourseFunction::VerbPhrase);
        out.push(group.into());
        Ok(())
    }

    fn wh_word(&self, question: InterrogativeType) -> Node {
        let keyword = question.keyword().unwrap_or_default();
        Node::inflected(keyword, LexicalCategory::Pronoun)
    }

    fn do_auxiliary(&self, verb: &Features) -> Node {
        self.verb_word("do").with(|f| {
            f.tense = verb.tense;
            f.number = verb.number;
            f.person = verb.person;
            f.discourse_function = Some(DiscourseFunction::Auxiliary);
        })
    }
}

/// A clause's role in its parent changes its form.
fn adjust_for_discourse_function(features: &mut Features, has_subjects: bool) {
    match features.discourse_function {
        Some(DiscourseFunction::Object | DiscourseFunction::IndirectObject) => match features.form {
            Some(Form::Imperative) => {
                features.form = Some(Form::Infinitive);
                features.suppressed_complementiser = Some(true);
            }
            Some(Form::Gerund) if !has_subjects => {
                features.suppressed_complementiser = Some(true);
            }
            _ => {}
        },
        Some(DiscourseFunction::Subject) => {
            features.form = Some(Form::Gerund);
            features.suppressed_complementiser = Some(true);
        }
        _ => {}
    }
}

/// Clause modifiers and complements belong to the verb phrase.
fn attach_clause_children(clause: &mut Phrase, verb: &mut Node) {
    let (pre_modifiers, complements, post_modifiers) = match verb {
        Node::Phrase(phrase) => (
            &mut phrase.pre_modifiers,
            &mut phrase.complements,
            &mut phrase.post_modifiers,
        ),
        Node::Coordination(coordination) => (
            &mut coordination.pre_modifiers,
            &mut coordination.complements,
            &mut coordination.post_modifiers,
        ),
        _ => return,
    };
    pre_modifiers.append(&mut clause.pre_modifiers);
    complements.append(&mut clause.complements);
    for modifier in clause.post_modifiers.drain(..) {
        if !post_modifiers.contains(&modifier) {
            post_modifiers.push(modifier);
        }
    }
}

fn has_auxiliary(features: &Features, count_negation: bool) -> bool {
    features.is_progressive()
        || features.is_perfect()
        || (count_negation && features.is_negated())
        || features.is_passive()
        || features.modal.as_deref().map_or(false, |modal| !modal.is_empty())
        || features.tense == Some(Tense::Future)
}

/// Number and person the verb takes from the subjects.
fn subject_agreement(subjects: &[Node]) -> (bool, Option<Person>) {
    match subjects {
        [] => (false, None),
        [only] => (is_plural_subject(only), subject_person(only)),
        _ => (true, None),
    }
}

fn is_plural_subject(subject: &Node) -> bool {
    match subject {
        Node::Coordination(coordination) => coordination.is_plural(),
        Node::Phrase(phrase) => match phrase.category {
            PhraseCategory::Clause => false,
            PhraseCategory::NounPhrase => {
                phrase.features.is_plural()
                    || phrase
                        .head
                        .as_deref()
                        .map_or(false, |head| head.is_plural() || matches!(head, Node::Group(_)))
            }
            _ => phrase.features.is_plural(),
        },
        other => other.is_plural(),
    }
}

fn subject_person(subject: &Node) -> Option<Person> {
    match subject {
        Node::Phrase(phrase) if phrase.category == PhraseCategory::NounPhrase => phrase
            .features
            .person
            .or_else(|| phrase.head.as_deref().and_then(subject_person)),
        other => other
            .features()
            .person
            .or_else(|| other.word_entry().and_then(|entry| entry.person)),
    }
}

/// "there" as a subject: the copula then agrees with its complement.
fn is_expletive(subject: &Node) -> bool {
    match subject {
        Node::Text(text) => text.text.eq_ignore_ascii_case("there"),
        Node::Phrase(phrase) => {
            phrase.features.is_expletive_subject() || phrase.head.as_deref().map_or(false, is_expletive)
        }
        other => {
            other.features().is_expletive_subject()
                || other
                    .word_entry()
                    .map_or(false, |entry| entry.has_flag(LexicalFlags::EXPLETIVE_SUBJECT))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::RealiserConfig;
    use scribe_protocol::Coordination;

    fn john_eats_an_apple() -> Phrase {
        clause(noun_phrase(None, "John"), "eat", Some(noun_phrase(Some("a"), "apple")))
    }

    fn question(clause: Phrase, question: InterrogativeType) -> Phrase {
        clause.with(|f| f.interrogative_type = Some(question))
    }

    fn past(clause: Phrase) -> Phrase {
        clause.with(|f| f.tense = Some(Tense::Past))
    }

    #[test]
    fn test_declarative() {
        assert_eq!(sentence(john_eats_an_apple()), "John eats an apple");
        assert_eq!(sentence(past(john_eats_an_apple())), "John ate an apple");
        let i_eat = clause(pronoun("I"), "eat", None);
        assert_eq!(sentence(i_eat), "I eat");
    }

    #[test]
    fn test_negated_clause_inserts_do() {
        let negated = past(john_eats_an_apple()).with(|f| f.negated = Some(true));
        assert_eq!(sentence(negated), "John did not eat an apple");
    }

    #[test]
    fn test_plural_subjects_agree() {
        let dogs = noun_phrase(Some("the"), "dog").with(|f| f.number = Some(NumberAgreement::Plural));
        assert_eq!(sentence(clause(dogs, "sleep", None)), "the dogs sleep");

        let both = Coordination::new([noun_phrase(None, "John").into(), noun_phrase(None, "Mary").into()]);
        assert_eq!(sentence(clause(both, "sleep", None)), "John and Mary sleep");

        let two = clause(noun_phrase(None, "John"), "sleep", None).with_subject(noun_phrase(None, "Mary"));
        assert_eq!(sentence(two), "John Mary sleep");
    }

    #[test]
    fn test_passive_swaps_subject_and_object() {
        let active = clause(
            noun_phrase(Some("the"), "cat"),
            "eat",
            Some(noun_phrase(Some("the"), "mouse")),
        );
        let passive = past(active).with(|f| f.passive = Some(true));
        assert_eq!(sentence(passive), "the mouse was eaten by the cat");

        let pronouns = Phrase::clause()
            .with_subject(pronoun("I"))
            .with_verb_phrase(verb_phrase("see").with_object(pronoun("she")))
            .with(|f| {
                f.passive = Some(true);
                f.tense = Some(Tense::Past);
            });
        assert_eq!(sentence(pronouns), "she was seen by me");
    }

    #[test]
    fn test_passive_agrees_with_the_raised_object() {
        let mice = noun_phrase(Some("the"), "mouse").with(|f| f.number = Some(NumberAgreement::Plural));
        let passive = past(clause(noun_phrase(Some("the"), "cat"), "eat", Some(mice))).with(|f| f.passive = Some(true));
        assert_eq!(sentence(passive), "the mice were eaten by the cat");
    }

    #[test]
    fn test_yes_no_questions() {
        let kiss = clause(noun_phrase(None, "John"), "kiss", Some(noun_phrase(None, "Mary")));
        let did = question(past(kiss), InterrogativeType::YesNo);
        assert_eq!(sentence(did.clone()), "did John kiss Mary");

        let progressive = did.with(|f| f.progressive = Some(true));
        assert_eq!(sentence(progressive), "was John kissing Mary");

        let happy = Phrase::clause()
            .with_subject(noun_phrase(None, "John"))
            .with_verb_phrase(verb_phrase("be").with_complement(adjective("happy")));
        assert_eq!(sentence(question(happy, InterrogativeType::YesNo)), "is John happy");

        let future = question(john_eats_an_apple(), InterrogativeType::YesNo).with(|f| f.tense = Some(Tense::Future));
        assert_eq!(sentence(future), "will John eat an apple");
    }

    #[test]
    fn test_questions_are_marked() {
        let kiss = clause(noun_phrase(None, "John"), "kiss", Some(noun_phrase(None, "Mary")));
        let realised = realiser()
            .realise(&question(kiss, InterrogativeType::YesNo).into())
            .unwrap()
            .unwrap();
        assert!(realised.features().is_interrogative());
    }

    #[test]
    fn test_wh_questions() {
        let kiss = || past(clause(noun_phrase(None, "John"), "kiss", Some(noun_phrase(None, "Mary"))));
        assert_eq!(sentence(question(kiss(), InterrogativeType::WhoObject)), "who did John kiss");
        assert_eq!(sentence(question(kiss(), InterrogativeType::WhoSubject)), "who kissed Mary");
        assert_eq!(sentence(question(kiss(), InterrogativeType::Where)), "where did John kiss Mary");

        let eating = question(john_eats_an_apple(), InterrogativeType::WhatObject).with(|f| f.progressive = Some(true));
        assert_eq!(sentence(eating), "what is John eating");

        let give = Phrase::clause()
            .with_subject(noun_phrase(None, "John"))
            .with_verb_phrase(
                verb_phrase("give")
                    .with_object(noun_phrase(Some("a"), "bone"))
                    .with_indirect_object(noun_phrase(Some("the"), "dog")),
            );
        let to_whom = past(question(give, InterrogativeType::WhoIndirectObject));
        assert_eq!(sentence(to_whom), "who did John give a bone to");
    }

    #[test]
    fn test_negated_object_questions_insert_do() {
        let not_eat = question(john_eats_an_apple(), InterrogativeType::WhatObject).with(|f| f.negated = Some(true));
        assert_eq!(sentence(not_eat.clone()), "what does John not eat");

        let kiss = clause(noun_phrase(None, "John"), "kiss", Some(noun_phrase(None, "Mary")));
        let not_kiss = question(past(kiss), InterrogativeType::WhoObject).with(|f| f.negated = Some(true));
        assert_eq!(sentence(not_kiss), "who did John not kiss");

        let not_eating = not_eat.with(|f| f.progressive = Some(true));
        assert_eq!(sentence(not_eating), "what is John not eating");
    }

    #[test]
    fn test_what_subject() {
        let chase = clause(
            noun_phrase(Some("the"), "cat"),
            "chase",
            Some(noun_phrase(Some("the"), "mouse")),
        );
        assert_eq!(sentence(question(past(chase), InterrogativeType::WhatSubject)), "what chased the mouse");
    }

    #[test]
    fn test_how_questions() {
        let how = question(past(john_eats_an_apple()), InterrogativeType::How);
        assert_eq!(sentence(how), "how did John eat an apple");

        let how_is = question(clause(noun_phrase(None, "John"), "be", None), InterrogativeType::HowPredicate);
        assert_eq!(sentence(how_is), "how is John");
    }

    #[test]
    fn test_passive_questions() {
        let passive = past(clause(
            noun_phrase(Some("the"), "cat"),
            "eat",
            Some(noun_phrase(Some("the"), "mouse")),
        ))
        .with(|f| f.passive = Some(true));
        assert_eq!(
            sentence(question(passive, InterrogativeType::YesNo)),
            "was the mouse eaten by the cat"
        );
    }

    #[test]
    fn test_empty_modal_is_ignored() {
        let clause = john_eats_an_apple().with(|f| f.modal = Some(String::new()));
        assert_eq!(sentence(clause.clone()), "John eats an apple");
        assert_eq!(sentence(question(clause, InterrogativeType::YesNo)), "does John eat an apple");
    }

    #[test]
    fn test_how_many() {
        let dogs = noun_phrase(None, "dog").with(|f| f.number = Some(NumberAgreement::Plural));
        let how_many = question(past(clause(dogs, "sleep", None)), InterrogativeType::HowMany);
        assert_eq!(sentence(how_many), "how many dogs slept");
    }

    #[test]
    fn test_expletive_subject_agrees_with_complement() {
        let dogs = noun_phrase(None, "dog").with(|f| f.number = Some(NumberAgreement::Plural));
        let there = Phrase::clause()
            .with_subject(pronoun("there"))
            .with_verb_phrase(verb_phrase("be").with_complement(dogs));
        assert_eq!(sentence(there), "there are dogs");
    }

    #[test]
    fn test_subordinate_clause_takes_complementiser() {
        let inner = clause(noun_phrase(None, "Mary"), "sleep", None);
        let outer = Phrase::clause()
            .with_subject(noun_phrase(None, "John"))
            .with_verb_phrase(verb_phrase("know").with_object(inner.clone()));
        assert_eq!(sentence(outer.clone()), "John knows that Mary sleeps");

        let mut config = RealiserConfig::default();
        config.default_complementiser = String::new();
        assert_eq!(sentence_with(config, outer), "John knows Mary sleeps");

        let explicit = inner
            .with(|f| f.clause_status = Some(ClauseStatus::Subordinate))
            .with_complementiser(word("whether", LexicalCategory::Complementiser));
        assert_eq!(sentence(explicit), "whether Mary sleeps");
    }

    #[test]
    fn test_clause_as_subject_becomes_gerund() {
        let eating = Phrase::clause().with_verb_phrase(verb_phrase("eat").with_object(noun_phrase(Some("an"), "apple")));
        let outer = Phrase::clause()
            .with_subject(eating.clone())
            .with_verb_phrase(verb_phrase("be").with_complement(adjective("good")));
        assert_eq!(sentence(outer), "eating an apple is good");

        let johns = eating.with_subject(noun_phrase(None, "John")).with(|f| f.form = Some(Form::Gerund));
        assert_eq!(sentence(johns.clone()), "John's eating an apple");
        let plain = johns.with(|f| f.suppress_genitive_in_gerund = Some(true));
        assert_eq!(sentence(plain), "John eating an apple");
    }

    #[test]
    fn test_imperative_and_infinitive() {
        let imperative = john_eats_an_apple().with(|f| f.form = Some(Form::Imperative));
        assert_eq!(sentence(imperative), "eat an apple");

        let infinitive = john_eats_an_apple()
            .with(|f| f.form = Some(Form::Infinitive))
            .with_front_modifier(word("quickly", LexicalCategory::Adverb));
        assert_eq!(sentence(infinitive), "to eat an apple quickly");
    }

    #[test]
    fn test_modifiers_and_cue_phrase() {
        let clause = past(clause(noun_phrase(None, "John"), "sleep", None))
            .with_front_modifier(word("yesterday", LexicalCategory::Adverb))
            .with_cue_phrase(word("however", LexicalCategory::Adverb))
            .with_post_modifier(word("well", LexicalCategory::Adverb));
        assert_eq!(sentence(clause.clone()), "however yesterday John slept well");

        let asked = question(clause, InterrogativeType::YesNo);
        assert_eq!(sentence(asked), "however did John sleep well yesterday");
    }

    #[test]
    fn test_bare_verb_is_wrapped() {
        let bare = Phrase::clause()
            .with_subject(noun_phrase(None, "John"))
            .with_verb_phrase(verb("sleep"))
            .with(|f| f.tense = Some(Tense::Past));
        assert_eq!(sentence(bare), "John slept");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let original = past(john_eats_an_apple()).with(|f| f.passive = Some(true));
        let node = Node::from(original.clone());
        realiser().realise(&node).unwrap();
        assert_eq!(node, Node::from(original));
    }
}
