use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;
use bitflags::bitflags;

/// Error returned when a lexicon or tree names an unknown enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl core::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown name '{}'", self.0)
    }
}

macro_rules! named_enum {
    ($name:ident { $($variant:ident => $($text:literal)|+),+ $(,)? }) => {
        impl $name {
            /// Canonical lowercase name, as written in lexicon files.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => named_enum!(@first $($text)|+),)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($($text)|+ => Ok($name::$variant),)+
                    other => Err(UnknownName(String::from(other))),
                }
            }
        }
    };
    (@first $first:literal $(| $rest:literal)*) => { $first };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum LexicalCategory {
    Any = 0,
    Noun = 1,
    Verb = 2,
    Adjective = 3,
    Adverb = 4,
    Determiner = 5,
    Pronoun = 6,
    Preposition = 7,
    Conjunction = 8,
    Complementiser = 9,
    Modal = 10,
    Symbol = 11,
}

named_enum!(LexicalCategory {
    Any => "any",
    Noun => "noun" | "n",
    Verb => "verb" | "v",
    Adjective => "adjective" | "adj",
    Adverb => "adverb" | "adv",
    Determiner => "determiner" | "det",
    Pronoun => "pronoun" | "pron",
    Preposition => "preposition" | "prep",
    Conjunction => "conjunction" | "conj",
    Complementiser => "complementiser" | "complementizer",
    Modal => "modal",
    Symbol => "symbol",
});

/// Phrase-level categories. `Custom` carries builder extensions the core has no realiser for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhraseCategory {
    Clause,
    NounPhrase,
    VerbPhrase,
    AdjectivePhrase,
    AdverbPhrase,
    PrepositionalPhrase,
    Custom(String),
}

impl PhraseCategory {
    pub fn name(&self) -> &str {
        match self {
            PhraseCategory::Clause => "clause",
            PhraseCategory::NounPhrase => "noun_phrase",
            PhraseCategory::VerbPhrase => "verb_phrase",
            PhraseCategory::AdjectivePhrase => "adjective_phrase",
            PhraseCategory::AdverbPhrase => "adverb_phrase",
            PhraseCategory::PrepositionalPhrase => "prepositional_phrase",
            PhraseCategory::Custom(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Inflection {
    #[default]
    Regular = 0,
    Irregular = 1,
    RegularDouble = 2,
    GrecoLatinRegular = 3,
    Uncountable = 4,
    Invariant = 5,
}

named_enum!(Inflection {
    Regular => "regular" | "reg",
    Irregular => "irregular" | "irreg",
    RegularDouble => "regular_double" | "reg_double",
    GrecoLatinRegular => "greco_latin_regular" | "glreg",
    Uncountable => "uncountable" | "uncount",
    Invariant => "invariant" | "inv",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
    Neuter = 2,
}

named_enum!(Gender {
    Masculine => "masculine" | "m",
    Feminine => "feminine" | "f",
    Neuter => "neuter" | "n",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NumberAgreement {
    Singular = 0,
    Plural = 1,
    Both = 2,
}

named_enum!(NumberAgreement {
    Singular => "singular" | "sg",
    Plural => "plural" | "pl",
    Both => "both",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    First = 1,
    Second = 2,
    Third = 3,
}

named_enum!(Person {
    First => "first" | "1",
    Second => "second" | "2",
    Third => "third" | "3",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tense {
    Past,
    Present,
    Future,
}

/// Verb shape requested of a clause, verb phrase or single verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Form {
    Normal,
    Gerund,
    Imperative,
    Infinitive,
    BareInfinitive,
    PastParticiple,
    PresentParticiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterrogativeType {
    YesNo,
    WhoSubject,
    WhatSubject,
    WhoObject,
    WhatObject,
    WhoIndirectObject,
    How,
    HowPredicate,
    HowMany,
    Why,
    Where,
}

impl InterrogativeType {
    /// The WH-word opening the question; `None` for yes/no questions.
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            InterrogativeType::YesNo => None,
            InterrogativeType::WhoSubject
            | InterrogativeType::WhoObject
            | InterrogativeType::WhoIndirectObject => Some("who"),
            InterrogativeType::WhatSubject | InterrogativeType::WhatObject => Some("what"),
            InterrogativeType::How | InterrogativeType::HowPredicate => Some("how"),
            InterrogativeType::HowMany => Some("how many"),
            InterrogativeType::Why => Some("why"),
            InterrogativeType::Where => Some("where"),
        }
    }

    pub const fn is_object(self) -> bool {
        matches!(self, InterrogativeType::WhoObject | InterrogativeType::WhatObject)
    }

    pub const fn is_subject(self) -> bool {
        matches!(self, InterrogativeType::WhoSubject | InterrogativeType::WhatSubject)
    }

    pub const fn is_indirect_object(self) -> bool {
        matches!(self, InterrogativeType::WhoIndirectObject)
    }
}

/// Role a child plays inside its parent, assigned during realisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiscourseFunction {
    Subject,
    Head,
    Specifier,
    Object,
    IndirectObject,
    Complement,
    PreModifier,
    PostModifier,
    FrontModifier,
    CuePhrase,
    Conjunction,
    Auxiliary,
    VerbPhrase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClauseStatus {
    Matrix,
    Subordinate,
}

bitflags! {
    /// Lexical properties a word carries regardless of use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct LexicalFlags: u32 {
        // Adjective ordering classes
        const QUALITATIVE = 1;
        const COLOUR = 2;
        const CLASSIFYING = 4;
        const PREDICATIVE = 8;

        // Nominals
        const PROPER = 16;
        const REFLEXIVE = 32;
        const EXPLETIVE_SUBJECT = 64;

        // Verb valency
        const INTRANSITIVE = 128;
        const TRANSITIVE = 256;
        const DITRANSITIVE = 512;
    }
}

impl FromStr for LexicalFlags {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qualitative" => Ok(LexicalFlags::QUALITATIVE),
            "colour" | "color" => Ok(LexicalFlags::COLOUR),
            "classifying" => Ok(LexicalFlags::CLASSIFYING),
            "predicative" => Ok(LexicalFlags::PREDICATIVE),
            "proper" => Ok(LexicalFlags::PROPER),
            "reflexive" => Ok(LexicalFlags::REFLEXIVE),
            "expletive" => Ok(LexicalFlags::EXPLETIVE_SUBJECT),
            "intransitive" => Ok(LexicalFlags::INTRANSITIVE),
            "transitive" => Ok(LexicalFlags::TRANSITIVE),
            "ditransitive" => Ok(LexicalFlags::DITRANSITIVE),
            other => Err(UnknownName(String::from(other))),
        }
    }
}
