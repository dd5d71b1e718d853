use scribe_protocol::{DiscourseFunction, Group, LexicalCategory, Node, Phrase};
use tracing::debug;

use crate::{RealiseError, RealiseResult, Realiser};

impl Realiser {
    /// Adjective, adverb and prepositional phrases: pre-modifiers, head,
    /// complements, post-modifiers.
    pub(crate) fn realise_generic_phrase(&self, phrase: &Phrase) -> RealiseResult {
        debug!(category = phrase.category.name(), "realising phrase");
        let mut out = Group::new();

        self.realise_list(&mut out, &phrase.pre_modifiers, Some(DiscourseFunction::PreModifier))?;
        self.realise_phrase_head(&mut out, phrase)?;
        self.realise_joined_complements(&mut out, &phrase.complements)?;
        self.realise_list(&mut out, &phrase.post_modifiers, Some(DiscourseFunction::PostModifier))?;

        Ok(out.into_node())
    }

    /// The head inherits comparative or superlative grading from its phrase.
    fn realise_phrase_head(&self, out: &mut Group, phrase: &Phrase) -> Result<(), RealiseError> {
        let Some(head) = phrase.head.as_deref() else {
            return Ok(());
        };

        let mut head = head.clone();
        if phrase.features.comparative.is_some() {
            head.features_mut().comparative = phrase.features.comparative;
        } else if phrase.features.superlative.is_some() {
            head.features_mut().superlative = phrase.features.superlative;
        }

        if let Some(mut realised) = self.realise_syntax(&head)? {
            realised.set_discourse_function(DiscourseFunction::Head);
            out.push(realised);
        }
        Ok(())
    }

    /// Complements in order, with "and" between consecutive ones.
    fn realise_joined_complements(&self, out: &mut Group, complements: &[Node]) -> Result<(), RealiseError> {
        let mut first = true;
        for complement in complements {
            let Some(mut realised) = self.realise_syntax(complement)? else {
                continue;
            };
            realised.set_discourse_function(DiscourseFunction::Complement);
            if !first {
                out.push(Node::inflected("and", LexicalCategory::Conjunction));
            }
            first = false;
            out.push(realised);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use scribe_protocol::{LexicalCategory, Phrase, PhraseCategory};

    #[test]
    fn test_prepositional_phrase() {
        let pp = Phrase::new(PhraseCategory::PrepositionalPhrase)
            .with_head(word("in", LexicalCategory::Preposition))
            .with_complement(noun_phrase(Some("the"), "park"));
        assert_eq!(sentence(pp), "in the park");
    }

    #[test]
    fn test_grading_reaches_the_head() {
        let ap = Phrase::new(PhraseCategory::AdjectivePhrase)
            .with_head(adjective("happy"))
            .with(|f| f.comparative = Some(true));
        assert_eq!(sentence(ap), "happier");

        let ap = Phrase::new(PhraseCategory::AdjectivePhrase)
            .with_head(adjective("good"))
            .with(|f| f.superlative = Some(true));
        assert_eq!(sentence(ap), "best");
    }

    #[test]
    fn test_complements_are_joined() {
        let pp = Phrase::new(PhraseCategory::PrepositionalPhrase)
            .with_head(word("with", LexicalCategory::Preposition))
            .with_complement(noun_phrase(Some("a"), "dog"))
            .with_complement(noun_phrase(Some("a"), "cat"));
        assert_eq!(sentence(pp), "with a dog and a cat");
    }

    #[test]
    fn test_post_modifiers_follow() {
        let advp = Phrase::new(PhraseCategory::AdverbPhrase)
            .with_head(word("quickly", LexicalCategory::Adverb))
            .with_post_modifier(word("often", LexicalCategory::Adverb));
        assert_eq!(sentence(advp), "quickly often");
    }
}
