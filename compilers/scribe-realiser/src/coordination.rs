use scribe_protocol::{
    Coordination, DiscourseFunction, Features, Group, LexicalCategory, Node, PhraseCategory,
};
use tracing::debug;

use crate::{RealiseResult, Realiser};

impl Realiser {
    pub(crate) fn realise_coordination(&self, coordination: &Coordination) -> RealiseResult {
        let conjunction = coordination.conjunction();
        debug!(
            conjunction,
            coordinates = coordination.coordinates.len(),
            "realising coordination"
        );

        let mut out = Group::new();
        self.realise_list(&mut out, &coordination.pre_modifiers, Some(DiscourseFunction::PreModifier))?;

        let mut coordinates = coordination.coordinates.clone();
        if !coordinates.is_empty() {
            if coordination.features.raises_specifier() {
                raise_specifier(&mut coordinates);
            }
            if let (Some(possessive), Some(last)) = (coordination.features.possessive, coordinates.last_mut()) {
                last.features_mut().possessive = Some(possessive);
            }

            let mut realised = Coordination {
                features: Features {
                    conjunction: Some(conjunction.to_string()),
                    conjunction_type: coordination.features.conjunction_type.clone(),
                    ..Features::default()
                },
                ..Coordination::default()
            };

            for (index, mut coordinate) in coordinates.into_iter().enumerate() {
                push_coordinate_features(coordination, &mut coordinate);
                if index > 0 {
                    if coordination.features.aggregates_auxiliary() {
                        coordinate.features_mut().realise_auxiliary = Some(false);
                    }
                    if coordinate.is_phrase(&PhraseCategory::Clause) {
                        coordinate.features_mut().suppressed_complementiser = Some(true);
                    }
                    if !conjunction.is_empty() {
                        realised.coordinates.push(
                            Node::inflected(conjunction, LexicalCategory::Conjunction)
                                .with(|f| f.discourse_function = Some(DiscourseFunction::Conjunction)),
                        );
                    }
                }
                if let Some(node) = self.realise_syntax(&coordinate)? {
                    realised.coordinates.push(node);
                }
            }
            out.push(realised.into());
        }

        self.realise_list(&mut out, &coordination.post_modifiers, Some(DiscourseFunction::PostModifier))?;
        self.realise_list(&mut out, &coordination.complements, Some(DiscourseFunction::Complement))?;
        Ok(out.into_node())
    }
}

fn push_coordinate_features(coordination: &Coordination, coordinate: &mut Node) {
    copy_features!(coordination.features => coordinate.features_mut();
        progressive, perfect, gender, number, tense, person, negated, modal,
        discourse_function, form, clause_status, interrogative_type);
}

/// When every coordinate opens with the same specifier, all but the first drop it.
fn raise_specifier(coordinates: &mut [Node]) {
    let specifier_base = |node: &Node| -> Option<String> {
        node.as_phrase()
            .and_then(|phrase| phrase.specifier.as_deref())
            .and_then(|specifier| specifier.base_form().map(str::to_string))
    };

    let Some(first) = coordinates.first().and_then(specifier_base) else {
        return;
    };
    let shared = coordinates[1..]
        .iter()
        .all(|coordinate| specifier_base(coordinate).as_deref() == Some(first.as_str()));
    if shared {
        for coordinate in &mut coordinates[1..] {
            coordinate.features_mut().raised = Some(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use scribe_protocol::{ClauseStatus, NumberAgreement, Phrase, Tense};

    #[test]
    fn test_noun_phrases_are_joined() {
        let both = Coordination::new([
            noun_phrase(Some("the"), "dog").into(),
            noun_phrase(Some("the"), "cat").into(),
        ]);
        assert_eq!(sentence(both), "the dog and the cat");
    }

    #[test]
    fn test_conjunction_choice() {
        let either = Coordination::new([noun("dog"), noun("cat"), noun("mouse")])
            .with(|f| f.conjunction = Some("or".into()));
        assert_eq!(sentence(either), "dog or cat or mouse");

        let bare = Coordination::new([noun("dog"), noun("cat")]).with(|f| f.conjunction = Some(String::new()));
        assert_eq!(sentence(bare), "dog cat");
    }

    #[test]
    fn test_shared_specifier_is_raised() {
        let both = Coordination::new([
            noun_phrase(Some("the"), "dog").into(),
            noun_phrase(Some("the"), "cat").into(),
        ])
        .with(|f| f.raise_specifier = Some(true));
        assert_eq!(sentence(both), "the dog and cat");

        let mixed = Coordination::new([
            noun_phrase(Some("the"), "dog").into(),
            noun_phrase(Some("a"), "cat").into(),
        ])
        .with(|f| f.raise_specifier = Some(true));
        assert_eq!(sentence(mixed), "the dog and a cat");
    }

    #[test]
    fn test_features_reach_every_coordinate() {
        let both = Coordination::new([noun("dog"), noun("cat")])
            .with(|f| f.number = Some(NumberAgreement::Plural));
        assert_eq!(sentence(both), "dogs and cats");

        let possessive = Coordination::new([noun("John"), noun("Mary")])
            .with(|f| f.possessive = Some(true));
        assert_eq!(sentence(possessive), "John and Mary's");
    }

    #[test]
    fn test_later_clauses_drop_the_complementiser() {
        let first = clause(noun_phrase(None, "John"), "eat", None);
        let second = clause(noun_phrase(None, "Mary"), "sleep", None);
        let both = Coordination::new([first.into(), second.into()])
            .with(|f| f.clause_status = Some(ClauseStatus::Subordinate));
        assert_eq!(sentence(both.clone()), "that John eats and Mary sleeps");

        let explicit = both.with(|f| f.suppressed_complementiser = Some(false));
        assert_eq!(sentence(explicit), "that John eats and Mary sleeps");
    }

    #[test]
    fn test_aggregated_auxiliaries() {
        let first = clause(noun_phrase(None, "John"), "eat", None);
        let second = Phrase::clause().with_verb_phrase(verb_phrase("sleep"));
        let both = Coordination::new([first.into(), second.into()]).with(|f| {
            f.tense = Some(Tense::Future);
            f.aggregate_auxiliary = Some(true);
        });
        assert_eq!(sentence(both), "John will eat and sleep");
    }

    #[test]
    fn test_empty_coordination() {
        assert_eq!(realiser().realise_syntax(&Coordination::default().into()).unwrap(), None);
    }
}
