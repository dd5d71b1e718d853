use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::features::Features;
use crate::model::WordEntry;
use crate::morphology::{
    ClauseStatus, DiscourseFunction, LexicalCategory, NumberAgreement, PhraseCategory,
};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

static NO_FEATURES: Features = Features::EMPTY;

/// A node of the syntax tree handed to the realiser, or of the tree it hands back.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Node {
    /// A bare lexical entry, shared with the lexicon.
    Word(Arc<WordEntry>),
    /// A request to inflect a word according to its features.
    Inflected(InflectedWord),
    Phrase(Box<Phrase>),
    Coordination(Coordination),
    /// Already-realised constituents, in order.
    Group(Group),
    /// Terminal literal.
    Text(SurfaceText),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct InflectedWord {
    pub base: String,
    pub category: LexicalCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub word: Option<Arc<WordEntry>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Features,
}

impl InflectedWord {
    pub fn new(base: impl Into<String>, category: LexicalCategory) -> Self {
        Self {
            base: base.into(),
            category,
            word: None,
            features: Features::default(),
        }
    }

    pub fn from_entry(entry: Arc<WordEntry>) -> Self {
        Self {
            base: entry.base.clone(),
            category: entry.category,
            word: Some(entry),
            features: Features::default(),
        }
    }

    pub fn with(mut self, configure: impl FnOnce(&mut Features)) -> Self {
        configure(&mut self.features);
        self
    }
}

/// A phrase with named child slots. Which slots are meaningful depends on the category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Phrase {
    pub category: PhraseCategory,
    pub features: Features,
    pub head: Option<Box<Node>>,
    pub specifier: Option<Box<Node>>,
    /// The single verb phrase of a clause.
    pub verb_phrase: Option<Box<Node>>,
    pub subjects: Vec<Node>,
    pub complements: Vec<Node>,
    pub pre_modifiers: Vec<Node>,
    pub post_modifiers: Vec<Node>,
    pub front_modifiers: Vec<Node>,
    pub cue_phrase: Option<Box<Node>>,
    pub complementiser: Option<Box<Node>>,
}

impl Default for Phrase {
    fn default() -> Self {
        Phrase::new(PhraseCategory::Clause)
    }
}

impl Phrase {
    pub fn new(category: PhraseCategory) -> Self {
        Self {
            category,
            features: Features::default(),
            head: None,
            specifier: None,
            verb_phrase: None,
            subjects: Vec::new(),
            complements: Vec::new(),
            pre_modifiers: Vec::new(),
            post_modifiers: Vec::new(),
            front_modifiers: Vec::new(),
            cue_phrase: None,
            complementiser: None,
        }
    }

    pub fn clause() -> Self {
        Self::new(PhraseCategory::Clause)
    }

    pub fn noun_phrase() -> Self {
        Self::new(PhraseCategory::NounPhrase)
    }

    pub fn verb_phrase() -> Self {
        Self::new(PhraseCategory::VerbPhrase)
    }

    pub fn with(mut self, configure: impl FnOnce(&mut Features)) -> Self {
        configure(&mut self.features);
        self
    }

    pub fn with_head(mut self, head: impl Into<Node>) -> Self {
        self.head = Some(Box::new(head.into()));
        self
    }

    pub fn with_specifier(mut self, specifier: impl Into<Node>) -> Self {
        self.specifier = Some(Box::new(specifier.into()));
        self
    }

    pub fn with_verb_phrase(mut self, verb_phrase: impl Into<Node>) -> Self {
        self.verb_phrase = Some(Box::new(verb_phrase.into()));
        self
    }

    pub fn with_subject(mut self, subject: impl Into<Node>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    pub fn with_complement(mut self, complement: impl Into<Node>) -> Self {
        self.complements.push(complement.into());
        self
    }

    /// Adds a complement tagged as direct object. Clauses become subordinate.
    pub fn with_object(self, object: impl Into<Node>) -> Self {
        self.with_tagged_complement(object.into(), DiscourseFunction::Object)
    }

    pub fn with_indirect_object(self, object: impl Into<Node>) -> Self {
        self.with_tagged_complement(object.into(), DiscourseFunction::IndirectObject)
    }

    fn with_tagged_complement(mut self, mut complement: Node, function: DiscourseFunction) -> Self {
        let is_clause = complement.is_phrase(&PhraseCategory::Clause);
        let features = complement.features_mut();
        features.discourse_function = Some(function);
        if is_clause {
            features.clause_status = Some(ClauseStatus::Subordinate);
        }
        self.complements.push(complement);
        self
    }

    pub fn with_pre_modifier(mut self, modifier: impl Into<Node>) -> Self {
        self.pre_modifiers.push(modifier.into());
        self
    }

    pub fn with_post_modifier(mut self, modifier: impl Into<Node>) -> Self {
        self.post_modifiers.push(modifier.into());
        self
    }

    pub fn with_front_modifier(mut self, modifier: impl Into<Node>) -> Self {
        self.front_modifiers.push(modifier.into());
        self
    }

    pub fn with_cue_phrase(mut self, cue: impl Into<Node>) -> Self {
        self.cue_phrase = Some(Box::new(cue.into()));
        self
    }

    pub fn with_complementiser(mut self, complementiser: impl Into<Node>) -> Self {
        self.complementiser = Some(Box::new(complementiser.into()));
        self
    }

    /// The verb of a clause (through its verb phrase) or the head of any other phrase.
    pub fn verb_head(&self) -> Option<&Node> {
        match (&self.category, &self.verb_phrase) {
            (PhraseCategory::Clause, Some(vp)) => match vp.as_ref() {
                Node::Phrase(inner) => inner.head.as_deref(),
                other => Some(other),
            },
            _ => self.head.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Coordination {
    pub coordinates: Vec<Node>,
    pub features: Features,
    pub pre_modifiers: Vec<Node>,
    pub post_modifiers: Vec<Node>,
    pub complements: Vec<Node>,
}

impl Coordination {
    pub fn new(coordinates: impl IntoIterator<Item = Node>) -> Self {
        Self {
            coordinates: coordinates.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with(mut self, configure: impl FnOnce(&mut Features)) -> Self {
        configure(&mut self.features);
        self
    }

    /// Conjunction word; "and" unless the builder chose another.
    pub fn conjunction(&self) -> &str {
        self.features.conjunction.as_deref().unwrap_or("and")
    }

    /// Whether the coordination as a whole takes plural agreement.
    ///
    /// A lone coordinate decides for itself; "or"/"nor" follow the last
    /// coordinate; anything else is plural.
    pub fn is_plural(&self) -> bool {
        match self.coordinates.as_slice() {
            [] => false,
            [only] => only.is_plural(),
            [.., last] => match self.conjunction() {
                "or" | "nor" => last.is_plural(),
                _ => true,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Group {
    pub children: Vec<Node>,
    pub features: Features,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.children.extend(nodes);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Empty groups vanish and single-child groups collapse to the child.
    /// The interrogative marker survives the collapse.
    pub fn into_node(mut self) -> Option<Node> {
        match self.children.len() {
            0 => None,
            1 => {
                let mut child = self.children.pop()?;
                if self.features.is_interrogative() {
                    child.features_mut().interrogative = Some(true);
                }
                Some(child)
            }
            _ => Some(Node::Group(self)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SurfaceText {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Features,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(SurfaceText {
            text: text.into(),
            features: Features::default(),
        })
    }

    pub fn inflected(base: impl Into<String>, category: LexicalCategory) -> Self {
        Node::Inflected(InflectedWord::new(base, category))
    }

    pub fn features(&self) -> &Features {
        match self {
            Node::Word(_) => &NO_FEATURES,
            Node::Inflected(word) => &word.features,
            Node::Phrase(phrase) => &phrase.features,
            Node::Coordination(coordination) => &coordination.features,
            Node::Group(group) => &group.features,
            Node::Text(text) => &text.features,
        }
    }

    /// Mutable features. A bare `Word` turns into an inflection request first,
    /// so the shared lexical entry itself is never touched.
    pub fn features_mut(&mut self) -> &mut Features {
        if let Node::Word(entry) = self {
            *self = Node::Inflected(InflectedWord::from_entry(Arc::clone(entry)));
        }
        match self {
            Node::Word(_) => unreachable!("words are converted above"),
            Node::Inflected(word) => &mut word.features,
            Node::Phrase(phrase) => &mut phrase.features,
            Node::Coordination(coordination) => &mut coordination.features,
            Node::Group(group) => &mut group.features,
            Node::Text(text) => &mut text.features,
        }
    }

    pub fn with(mut self, configure: impl FnOnce(&mut Features)) -> Self {
        configure(self.features_mut());
        self
    }

    pub fn discourse_function(&self) -> Option<DiscourseFunction> {
        self.features().discourse_function
    }

    pub fn set_discourse_function(&mut self, function: DiscourseFunction) {
        self.features_mut().discourse_function = Some(function);
    }

    pub fn lexical_category(&self) -> Option<LexicalCategory> {
        match self {
            Node::Word(entry) => Some(entry.category),
            Node::Inflected(word) => Some(word.category),
            _ => None,
        }
    }

    pub fn phrase_category(&self) -> Option<&PhraseCategory> {
        match self {
            Node::Phrase(phrase) => Some(&phrase.category),
            _ => None,
        }
    }

    pub fn is_phrase(&self, category: &PhraseCategory) -> bool {
        self.phrase_category() == Some(category)
    }

    pub fn is_lexical(&self, category: LexicalCategory) -> bool {
        self.lexical_category() == Some(category)
    }

    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            Node::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }

    pub fn base_form(&self) -> Option<&str> {
        match self {
            Node::Word(entry) => Some(&entry.base),
            Node::Inflected(word) => Some(&word.base),
            _ => None,
        }
    }

    pub fn word_entry(&self) -> Option<&Arc<WordEntry>> {
        match self {
            Node::Word(entry) => Some(entry),
            Node::Inflected(word) => word.word.as_ref(),
            _ => None,
        }
    }

    /// The lexical entry at the bottom of a chain of phrase heads.
    pub fn head_word_entry(&self) -> Option<&Arc<WordEntry>> {
        match self {
            Node::Phrase(phrase) => phrase.head.as_deref().and_then(Node::head_word_entry),
            other => other.word_entry(),
        }
    }

    /// Plurality as seen by agreement: explicit number first, then the lexicon's.
    pub fn is_plural(&self) -> bool {
        match self {
            Node::Coordination(coordination) => coordination.is_plural(),
            Node::Word(entry) => entry.number == Some(NumberAgreement::Plural),
            other => other.features().is_plural(),
        }
    }

    /// Words of a realised tree, in order.
    pub fn surface_words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        self.collect_words(&mut words);
        words
    }

    /// Realised words joined by single spaces. Orthography is left to the caller.
    pub fn surface_text(&self) -> String {
        self.surface_words().join(" ")
    }

    /// First literal word of a realised tree, descending into groups and coordinations.
    pub fn first_literal(&self) -> Option<&str> {
        match self {
            Node::Text(text) => text.text.split_whitespace().next(),
            Node::Group(group) => group.children.iter().find_map(Node::first_literal),
            Node::Coordination(coordination) => {
                coordination.coordinates.iter().find_map(Node::first_literal)
            }
            _ => None,
        }
    }

    fn collect_words<'a>(&'a self, words: &mut Vec<&'a str>) {
        match self {
            Node::Text(text) => {
                if !text.text.is_empty() {
                    words.push(&text.text);
                }
            }
            Node::Word(entry) => words.push(entry.spelling_variant()),
            Node::Inflected(word) => words.push(&word.base),
            Node::Group(group) => group.children.iter().for_each(|c| c.collect_words(words)),
            Node::Coordination(coordination) => {
                coordination.pre_modifiers.iter().for_each(|c| c.collect_words(words));
                coordination.coordinates.iter().for_each(|c| c.collect_words(words));
                coordination.post_modifiers.iter().for_each(|c| c.collect_words(words));
                coordination.complements.iter().for_each(|c| c.collect_words(words));
            }
            Node::Phrase(phrase) => {
                let slots = phrase
                    .cue_phrase
                    .iter()
                    .map(|b| &**b)
                    .chain(phrase.front_modifiers.iter())
                    .chain(phrase.subjects.iter())
                    .chain(phrase.specifier.iter().map(|b| &**b))
                    .chain(phrase.pre_modifiers.iter())
                    .chain(phrase.head.iter().map(|b| &**b))
                    .chain(phrase.verb_phrase.iter().map(|b| &**b))
                    .chain(phrase.complements.iter())
                    .chain(phrase.post_modifiers.iter());
                slots.for_each(|c| c.collect_words(words));
            }
        }
    }
}

impl From<Arc<WordEntry>> for Node {
    fn from(entry: Arc<WordEntry>) -> Self {
        Node::Word(entry)
    }
}

impl From<InflectedWord> for Node {
    fn from(word: InflectedWord) -> Self {
        Node::Inflected(word)
    }
}

impl From<Phrase> for Node {
    fn from(phrase: Phrase) -> Self {
        Node::Phrase(Box::new(phrase))
    }
}

impl From<Coordination> for Node {
    fn from(coordination: Coordination) -> Self {
        Node::Coordination(coordination)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<SurfaceText> for Node {
    fn from(text: SurfaceText) -> Self {
        Node::Text(text)
    }
}
