#![no_std] // Shared with the wasm platform

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use ids::WordId;
pub use morphology::*;

pub mod model;
pub use model::*;

pub mod features;
pub use features::{FeatureValue, Features};

pub mod node;
pub use node::{Coordination, Group, InflectedWord, Node, Phrase, SurfaceText};

pub mod lexicon;
pub use lexicon::{Lexicon, SynthesisingLexicon};
