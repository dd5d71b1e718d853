use std::sync::Arc;

use scribe_protocol::{Group, InflectedWord, Node, PhraseCategory};
use tracing::warn;

use crate::{RealiseError, RealiseResult, Realiser};

impl Realiser {
    /// Syntax pass: routes each node to the realiser for its kind.
    ///
    /// Returns `None` for elided nodes and for groups that realise to nothing.
    pub fn realise_syntax(&self, node: &Node) -> RealiseResult {
        if node.features().is_elided() {
            return Ok(None);
        }

        match node {
            Node::Phrase(phrase) => match &phrase.category {
                PhraseCategory::Clause => self.realise_clause(phrase),
                PhraseCategory::NounPhrase => self.realise_noun_phrase(phrase),
                PhraseCategory::VerbPhrase => self.realise_verb_phrase(phrase),
                PhraseCategory::AdjectivePhrase
                | PhraseCategory::AdverbPhrase
                | PhraseCategory::PrepositionalPhrase => self.realise_generic_phrase(phrase),
                PhraseCategory::Custom(category) => self.unsupported(node, category),
            },
            Node::Coordination(coordination) => self.realise_coordination(coordination),
            Node::Group(group) => {
                let mut realised = Group {
                    children: Vec::with_capacity(group.children.len()),
                    features: group.features.clone(),
                };
                for child in &group.children {
                    if let Some(child) = self.realise_syntax(child)? {
                        realised.push(child);
                    }
                }
                Ok(realised.into_node())
            }
            Node::Word(entry) => Ok(Some(InflectedWord::from_entry(Arc::clone(entry)).into())),
            Node::Inflected(word) => {
                let mut word = word.clone();
                if word.word.is_none() {
                    word.word = Some(self.lexicon.lookup_word(&word.base, word.category));
                }
                Ok(Some(word.into()))
            }
            Node::Text(_) => Ok(Some(node.clone())),
        }
    }

    /// Strict configurations fail; lenient ones hand the node back unrealised.
    pub(crate) fn unsupported(&self, node: &Node, category: &str) -> RealiseResult {
        if self.config.strict_dispatch {
            return Err(RealiseError::UnsupportedNode {
                category: category.to_string(),
            });
        }
        warn!(category, "no realiser for node, passing it through");
        Ok(Some(node.clone()))
    }
}
