use scribe_morph::{determiner, MorphRequest};
use scribe_protocol::{
    Coordination, DiscourseFunction, Features, Group, InflectedWord, LexicalFlags, Node,
    SurfaceText,
};
use tracing::warn;

use crate::{RealiseError, Realiser};

impl Realiser {
    /// Morphology pass: replaces every word and inflection request in a
    /// syntactically realised tree with surface text. Text is left as it is,
    /// so running the pass twice changes nothing.
    pub fn realise_morphology(&self, node: &Node) -> Result<Node, RealiseError> {
        match node {
            Node::Text(_) => Ok(node.clone()),
            Node::Word(entry) => Ok(Node::text(entry.spelling_variant())),
            Node::Inflected(word) => self.realise_inflected(word),
            Node::Group(group) => Ok(Group {
                children: self.realise_morphology_list(&group.children)?,
                features: group.features.clone(),
            }
            .into()),
            Node::Coordination(coordination) => Ok(Coordination {
                coordinates: self.realise_morphology_list(&coordination.coordinates)?,
                features: coordination.features.clone(),
                pre_modifiers: self.realise_morphology_list(&coordination.pre_modifiers)?,
                post_modifiers: self.realise_morphology_list(&coordination.post_modifiers)?,
                complements: self.realise_morphology_list(&coordination.complements)?,
            }
            .into()),
            Node::Phrase(phrase) => {
                let category = phrase.category.name();
                if self.config.strict_dispatch {
                    return Err(RealiseError::UnsupportedNode {
                        category: category.to_string(),
                    });
                }
                warn!(category, "phrase reached morphology unrealised, passing it through");
                Ok(node.clone())
            }
        }
    }

    /// Realises siblings in order. A specifier is held until the next sibling
    /// is realised, then made to agree with that sibling's first word.
    fn realise_morphology_list(&self, children: &[Node]) -> Result<Vec<Node>, RealiseError> {
        let tables = &self.config.morph_tables;
        let mut realised: Vec<Node> = Vec::with_capacity(children.len());
        let mut specifier: Option<usize> = None;
        let mut after_text = false;

        for child in children {
            let current = self.realise_morphology(child)?;

            if let Some(slot) = specifier.take() {
                if let (Some(following), Node::Text(determiner)) =
                    (current.first_literal(), &mut realised[slot])
                {
                    determiner.text = determiner::agree(
                        &determiner.text,
                        following,
                        determiner.features.number,
                        tables,
                    );
                }
            } else if current.discourse_function() == Some(DiscourseFunction::Specifier) {
                specifier = Some(realised.len());
            }

            // Canned text such as "such a" before a noun that needs "an".
            if after_text && matches!(child, Node::Inflected(_)) {
                if let (Some(following), Some(Node::Text(previous))) =
                    (current.first_literal(), realised.last_mut())
                {
                    if let Some(fixed) = determiner::fix_trailing_article(&previous.text, following, tables) {
                        previous.text = fixed;
                    }
                }
            }
            after_text = matches!(child, Node::Text(_));
            realised.push(current);
        }
        Ok(realised)
    }

    fn realise_inflected(&self, word: &InflectedWord) -> Result<Node, RealiseError> {
        let features = &word.features;
        let entry = match &word.word {
            Some(entry) => entry.clone(),
            None => self.lexicon.lookup_word(&word.base, word.category),
        };

        let literal = features.is_non_morph()
            || features.is_expletive_subject()
            || entry.has_flag(LexicalFlags::EXPLETIVE_SUBJECT);
        let text = if literal {
            word.base.clone()
        } else {
            let request = MorphRequest::new(&word.base, features).with_entry(&entry);
            scribe_morph::generate(word.category, &request, &self.config.morph_tables)
        };

        Ok(SurfaceText {
            text,
            features: Features {
                discourse_function: features.discourse_function,
                appositive: features.appositive,
                number: features.number,
                interrogative: features.interrogative,
                ..Features::default()
            },
        }
        .into())
    }
}
