//! Read-only tables the rules consult. They are handed in by the caller so a
//! test or a dialect can swap them without touching the rules.

use alloc::string::String;
use alloc::vec::Vec;

use scribe_protocol::{Gender, Person};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row of the pronoun table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PronounCase {
    Subjective = 0,
    Objective = 1,
    Reflexive = 2,
    /// "mine", "theirs"
    Possessive = 3,
    /// "my", "their"
    PossessiveDeterminer = 4,
}

type Grid = [[String; 5]; 5];

/// `[case][person/gender]` grids for each number. Columns are first, second,
/// then third person masculine, feminine and neuter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PronounTable {
    pub singular: Grid,
    pub plural: Grid,
}

const SINGULAR: [[&str; 5]; 5] = [
    ["I", "you", "he", "she", "it"],
    ["me", "you", "him", "her", "it"],
    ["myself", "yourself", "himself", "herself", "itself"],
    ["mine", "yours", "his", "hers", "its"],
    ["my", "your", "his", "her", "its"],
];

const PLURAL: [[&str; 5]; 5] = [
    ["we", "you", "they", "they", "they"],
    ["us", "you", "them", "them", "them"],
    ["ourselves", "yourselves", "themselves", "themselves", "themselves"],
    ["ours", "yours", "theirs", "theirs", "theirs"],
    ["our", "your", "their", "their", "their"],
];

fn grid(rows: [[&str; 5]; 5]) -> Grid {
    rows.map(|row| row.map(String::from))
}

impl Default for PronounTable {
    fn default() -> Self {
        Self {
            singular: grid(SINGULAR),
            plural: grid(PLURAL),
        }
    }
}

impl PronounTable {
    pub fn column(person: Person, gender: Gender) -> usize {
        match person {
            Person::First => 0,
            Person::Second => 1,
            Person::Third => match gender {
                Gender::Masculine => 2,
                Gender::Feminine => 3,
                Gender::Neuter => 4,
            },
        }
    }

    pub fn lookup(&self, plural: bool, case: PronounCase, person: Person, gender: Gender) -> &str {
        let grid = if plural { &self.plural } else { &self.singular };
        &grid[case as usize][Self::column(person, gender)]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.singular
            .iter()
            .chain(self.plural.iter())
            .flatten()
            .any(|form| form.eq_ignore_ascii_case(word))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MorphTables {
    pub pronouns: PronounTable,
    /// Interrogative pronouns passed through untouched.
    pub wh_pronouns: Vec<String>,
    /// Word prefixes that take "a" even though they start with a vowel letter.
    pub an_exceptions: Vec<String>,
}

impl Default for MorphTables {
    fn default() -> Self {
        Self {
            pronouns: PronounTable::default(),
            wh_pronouns: ["who", "what", "which", "where", "why", "how", "how many"]
                .into_iter()
                .map(String::from)
                .collect(),
            an_exceptions: ["one", "180", "110"].into_iter().map(String::from).collect(),
        }
    }
}

impl MorphTables {
    pub fn is_wh_pronoun(&self, word: &str) -> bool {
        self.wh_pronouns.iter().any(|wh| wh.eq_ignore_ascii_case(word))
    }
}
