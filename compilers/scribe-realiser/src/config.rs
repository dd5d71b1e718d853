use scribe_morph::MorphTables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs of the realiser. Everything here has a sensible default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealiserConfig {
    pub morph_tables: MorphTables,
    /// Complementiser for subordinate clauses that do not name one.
    pub default_complementiser: String,
    /// Sort noun pre-modifiers by adjective class unless a phrase says otherwise.
    pub adjective_ordering: bool,
    /// Tag the head of every noun phrase as a subject, whatever role the
    /// phrase plays. When false the head takes the phrase's own role.
    pub head_as_subject: bool,
    /// Fail on nodes no realiser handles instead of passing them through.
    pub strict_dispatch: bool,
}

impl Default for RealiserConfig {
    fn default() -> Self {
        Self {
            morph_tables: MorphTables::default(),
            default_complementiser: "that".to_string(),
            adjective_ordering: true,
            head_as_subject: true,
            strict_dispatch: cfg!(debug_assertions),
        }
    }
}
