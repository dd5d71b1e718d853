//! Tree-building helpers shared by the unit tests.

use std::sync::{Arc, OnceLock};

use scribe_lexicon::MemoryLexicon;
use scribe_protocol::{LexicalCategory, Lexicon, Node, Phrase};

use crate::{Realiser, RealiserConfig};

pub(crate) fn lexicon() -> Arc<MemoryLexicon> {
    static LEXICON: OnceLock<Arc<MemoryLexicon>> = OnceLock::new();
    LEXICON
        .get_or_init(|| Arc::new(scribe_lexicon::builtin().expect("built-in lexicon parses")))
        .clone()
}

pub(crate) fn realiser() -> Realiser {
    realiser_with(RealiserConfig::default())
}

pub(crate) fn realiser_with(config: RealiserConfig) -> Realiser {
    Realiser::new(lexicon(), config)
}

pub(crate) fn word(base: &str, category: LexicalCategory) -> Node {
    Node::Word(lexicon().lookup_word(base, category))
}

pub(crate) fn noun(base: &str) -> Node {
    word(base, LexicalCategory::Noun)
}

pub(crate) fn verb(base: &str) -> Node {
    word(base, LexicalCategory::Verb)
}

pub(crate) fn adjective(base: &str) -> Node {
    word(base, LexicalCategory::Adjective)
}

pub(crate) fn pronoun(base: &str) -> Node {
    word(base, LexicalCategory::Pronoun)
}

pub(crate) fn noun_phrase(determiner: Option<&str>, head: &str) -> Phrase {
    let phrase = Phrase::noun_phrase().with_head(noun(head));
    match determiner {
        Some(determiner) => phrase.with_specifier(word(determiner, LexicalCategory::Determiner)),
        None => phrase,
    }
}

pub(crate) fn verb_phrase(head: &str) -> Phrase {
    Phrase::verb_phrase().with_head(verb(head))
}

/// Subject-verb clause, optionally with a direct object.
pub(crate) fn clause(subject: impl Into<Node>, head: &str, object: Option<Phrase>) -> Phrase {
    let vp = match object {
        Some(object) => verb_phrase(head).with_object(object),
        None => verb_phrase(head),
    };
    Phrase::clause().with_subject(subject).with_verb_phrase(vp)
}

pub(crate) fn sentence(node: impl Into<Node>) -> String {
    realiser().realise_sentence(&node.into()).expect("realisation succeeds")
}

pub(crate) fn sentence_with(config: RealiserConfig, node: impl Into<Node>) -> String {
    realiser_with(config)
        .realise_sentence(&node.into())
        .expect("realisation succeeds")
}
