//! Syntactic and morphological realisation: turns a feature-annotated syntax
//! tree into an ordered sequence of inflected words.
//!
//! Realisation runs in two passes. [`Realiser::realise_syntax`] walks the tree
//! depth-first and linearises it into groups of inflection requests;
//! [`Realiser::realise_morphology`] then replaces every request with its
//! surface text.

/// Copies each named feature that is set on `$source` onto `$target`,
/// leaving the target's own value where the source has none.
macro_rules! copy_features {
    ($source:expr => $target:expr; $($field:ident),+ $(,)?) => {{
        let source: &scribe_protocol::Features = &$source;
        let target: &mut scribe_protocol::Features = $target;
        $(if source.$field.is_some() {
            target.$field = source.$field.clone();
        })+
    }};
}

pub mod config;
pub mod error;

mod clause;
mod coordination;
mod dispatch;
mod morphology;
mod noun_phrase;
mod phrase;
mod verb_phrase;

#[cfg(test)]
mod test_support;

use std::fmt;
use std::sync::Arc;

use scribe_protocol::{DiscourseFunction, Group, Lexicon, Node, PhraseCategory, WordEntry};

pub use config::RealiserConfig;
pub use error::RealiseError;

pub type RealiseResult = Result<Option<Node>, RealiseError>;

#[derive(Clone)]
pub struct Realiser {
    lexicon: Arc<dyn Lexicon + Send + Sync>,
    config: RealiserConfig,
}

impl fmt::Debug for Realiser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Realiser").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Realiser {
    pub fn new(lexicon: Arc<dyn Lexicon + Send + Sync>, config: RealiserConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn config(&self) -> &RealiserConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &(dyn Lexicon + Send + Sync) {
        self.lexicon.as_ref()
    }

    /// Both passes. `None` when the whole tree realises to nothing.
    pub fn realise(&self, node: &Node) -> RealiseResult {
        match self.realise_syntax(node)? {
            Some(syntax) => Ok(Some(self.realise_morphology(&syntax)?)),
            None => Ok(None),
        }
    }

    /// Realises a tree and joins its words with single spaces.
    pub fn realise_sentence(&self, node: &Node) -> Result<String, RealiseError> {
        Ok(self
            .realise(node)?
            .map(|realised| realised.surface_text())
            .unwrap_or_default())
    }

    /// Realises each child and appends the results to `out` as one nested group.
    /// Realised children take `function` as their role and keep the appositive flag.
    pub(crate) fn realise_list(
        &self,
        out: &mut Group,
        children: &[Node],
        function: Option<DiscourseFunction>,
    ) -> Result<(), RealiseError> {
        let mut list = Group::new();
        for child in children {
            if let Some(mut realised) = self.realise_syntax(child)? {
                let features = realised.features_mut();
                if function.is_some() {
                    features.discourse_function = function;
                }
                if child.features().is_appositive() {
                    features.appositive = Some(true);
                }
                list.push(realised);
            }
        }
        if let Some(node) = list.into_node() {
            out.push(node);
        }
        Ok(())
    }

    /// Lexical entry behind a word, or behind the head of a phrase.
    pub(crate) fn lexical_entry(&self, node: &Node) -> Option<Arc<WordEntry>> {
        match node {
            Node::Word(entry) => Some(Arc::clone(entry)),
            Node::Inflected(word) => Some(match &word.word {
                Some(entry) => Arc::clone(entry),
                None => self.lexicon.lookup_word(&word.base, word.category),
            }),
            Node::Phrase(phrase) => phrase.head.as_deref().and_then(|head| self.lexical_entry(head)),
            _ => None,
        }
    }
}

/// A verb is copular when its base form is "be", looking through phrase heads.
pub(crate) fn is_copular(node: Option<&Node>) -> bool {
    match node {
        Some(Node::Phrase(phrase)) => match phrase.category {
            PhraseCategory::Clause | PhraseCategory::VerbPhrase => is_copular(phrase.verb_head()),
            _ => false,
        },
        Some(other) => other.base_form() == Some("be"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use scribe_protocol::{Features, Phrase, Tense};

    #[test]
    fn test_copular_through_phrases() {
        let be = Phrase::verb_phrase().with_head(verb("be"));
        let clause = Phrase::clause().with_verb_phrase(be.clone());
        assert!(is_copular(Some(&Node::from(be))));
        assert!(is_copular(Some(&Node::from(clause))));
        assert!(!is_copular(Some(&verb("eat"))));
        assert!(!is_copular(None));
    }

    #[test]
    fn test_sentence_of_nothing_is_empty() {
        let elided = Node::from(noun_phrase(Some("the"), "dog")).with(|f| f.elided = Some(true));
        assert_eq!(realiser().realise_sentence(&elided).unwrap(), "");
    }

    #[test]
    fn test_realise_is_deterministic() {
        let clause = Phrase::clause()
            .with_subject(noun_phrase(Some("the"), "dog"))
            .with_verb_phrase(Phrase::verb_phrase().with_head(verb("chase")).with_object(noun_phrase(Some("a"), "cat")))
            .with(|f: &mut Features| f.tense = Some(Tense::Past));
        let node = Node::from(clause);
        let realiser = realiser();
        let first = realiser.realise(&node).unwrap();
        let second = realiser.realise(&node).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.map(|n| n.surface_text()).as_deref(),
            Some("the dog chased a cat")
        );
    }
}
