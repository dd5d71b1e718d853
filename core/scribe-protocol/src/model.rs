use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::WordId;
use crate::morphology::{Gender, Inflection, LexicalCategory, LexicalFlags, NumberAgreement, Person};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Stored irregular forms. On a lexical entry these are the lexicon's forms;
/// on a feature bag they are per-use overrides that win over the lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[archive(check_bytes)]
pub struct InflectedForms {
    pub plural: Option<String>,
    pub past: Option<String>,
    pub past_participle: Option<String>,
    pub present_participle: Option<String>,
    pub present3s: Option<String>,
    pub comparative: Option<String>,
    pub superlative: Option<String>,
}

impl InflectedForms {
    pub fn is_empty(&self) -> bool {
        *self == InflectedForms::default()
    }
}

/// A lexical entry. Immutable once built; syntax trees share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordEntry {
    pub id: WordId,
    pub base: String,
    pub category: LexicalCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inflection: Inflection,
    /// Preferred spelling when it differs from the base form.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spelling: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub forms: InflectedForms,
    /// Raw `LexicalFlags` bits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Option<Gender>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub person: Option<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub number: Option<NumberAgreement>,
}

impl WordEntry {
    pub fn new(id: WordId, base: impl Into<String>, category: LexicalCategory) -> Self {
        Self {
            id,
            base: base.into(),
            category,
            inflection: Inflection::Regular,
            spelling: None,
            forms: InflectedForms::default(),
            flags: 0,
            gender: None,
            person: None,
            number: None,
        }
    }

    /// Default entry for a word the lexicon does not know.
    pub fn synthesised(base: impl Into<String>, category: LexicalCategory) -> Self {
        Self::new(WordId::SYNTHETIC, base, category)
    }

    pub fn lexical_flags(&self) -> LexicalFlags {
        LexicalFlags::from_bits_truncate(self.flags)
    }

    pub fn has_flag(&self, flag: LexicalFlags) -> bool {
        self.lexical_flags().contains(flag)
    }

    pub fn with_flags(mut self, flags: LexicalFlags) -> Self {
        self.flags |= flags.bits();
        self
    }

    pub fn with_inflection(mut self, inflection: Inflection) -> Self {
        self.inflection = inflection;
        self
    }

    pub fn with_forms(mut self, forms: InflectedForms) -> Self {
        self.forms = forms;
        self
    }

    /// The default spelling variant, falling back to the base form.
    pub fn spelling_variant(&self) -> &str {
        self.spelling.as_deref().unwrap_or(&self.base)
    }
}

#[derive(Debug, Clone, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Dictionary {
    pub version: u32,
    pub words: Vec<WordEntry>,
}
