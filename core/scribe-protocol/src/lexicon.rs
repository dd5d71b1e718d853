use alloc::sync::Arc;

use crate::model::WordEntry;
use crate::morphology::LexicalCategory;

/// Read access to lexical entries.
///
/// Lookups never fail: a lexicon that does not know a word hands back a
/// synthesised regular entry so realisation can carry on.
pub trait Lexicon {
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> Arc<WordEntry>;

    /// Lookup when the category is unknown to the caller.
    fn lookup_any(&self, base: &str) -> Arc<WordEntry> {
        self.lookup_word(base, LexicalCategory::Any)
    }
}

/// A lexicon that knows nothing and synthesises every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisingLexicon;

impl Lexicon for SynthesisingLexicon {
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> Arc<WordEntry> {
        Arc::new(WordEntry::synthesised(base, category))
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> Arc<WordEntry> {
        (**self).lookup_word(base, category)
    }
}
