use std::collections::HashMap;
use std::sync::Arc;

use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{AlignedVec, Deserialize};
use scribe_protocol::{Dictionary, LexicalCategory, Lexicon, WordEntry, WordId};
use tracing::{debug, warn};

use crate::error::LexiconError;
use crate::parser::{interpret, parse_line};

/// Format version written into compiled archives.
pub const DICTIONARY_VERSION: u32 = 1;

/// Lexicon held fully in memory, indexed by base form and category.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    words: Vec<Arc<WordEntry>>,
    index: HashMap<(String, LexicalCategory), usize>,
    by_base: HashMap<String, Vec<usize>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the text lexicon format. Later duplicates replace earlier entries.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        for (n, line) in text.lines().enumerate() {
            let line_no = n + 1;
            if let Some(raw) = parse_line(line, line_no)? {
                let id = WordId::new(lexicon.words.len() as u32);
                lexicon.insert(interpret(&raw, id, line_no)?);
            }
        }
        debug!(words = lexicon.len(), "parsed text lexicon");
        Ok(lexicon)
    }

    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        let mut lexicon = Self::new();
        for entry in dictionary.words {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Loads a compiled archive, validating it before use.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives need the alignment rkyv wrote them with; a fetched buffer has none.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<Dictionary>(&aligned)
            .map_err(|e| LexiconError::Archive(e.to_string()))?;
        if archived.version != DICTIONARY_VERSION {
            return Err(LexiconError::Archive(format!(
                "unsupported version {} (expected {})",
                archived.version, DICTIONARY_VERSION
            )));
        }
        let dictionary: Dictionary = archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|_| LexiconError::Archive("could not deserialise dictionary".into()))?;

        debug!(words = dictionary.words.len(), "loaded lexicon archive");
        Ok(Self::from_dictionary(dictionary))
    }

    pub fn to_dictionary(&self) -> Dictionary {
        Dictionary {
            version: DICTIONARY_VERSION,
            words: self.words.iter().map(|entry| (**entry).clone()).collect(),
        }
    }

    pub fn to_archive(&self) -> Result<AlignedVec, LexiconError> {
        let mut serializer = AllocSerializer::<4096>::default();
        serializer
            .serialize_value(&self.to_dictionary())
            .map_err(|e| LexiconError::Archive(e.to_string()))?;
        Ok(serializer.into_serializer().into_inner())
    }

    /// Adds an entry, replacing any entry with the same base form and category.
    pub fn insert(&mut self, entry: WordEntry) -> Arc<WordEntry> {
        let key = (entry.base.clone(), entry.category);
        let entry = Arc::new(entry);

        if let Some(&slot) = self.index.get(&key) {
            warn!(base = %key.0, category = key.1.name(), "duplicate lexicon entry replaced");
            self.words[slot] = Arc::clone(&entry);
            return entry;
        }

        let slot = self.words.len();
        self.words.push(Arc::clone(&entry));
        self.by_base.entry(key.0.clone()).or_default().push(slot);
        self.index.insert(key, slot);
        entry
    }

    pub fn get(&self, base: &str, category: LexicalCategory) -> Option<&Arc<WordEntry>> {
        self.index
            .get(&(base.to_string(), category))
            .map(|&slot| &self.words[slot])
    }

    /// Every entry sharing a base form, in insertion order.
    pub fn get_all(&self, base: &str) -> impl Iterator<Item = &Arc<WordEntry>> {
        self.by_base
            .get(base)
            .into_iter()
            .flatten()
            .map(|&slot| &self.words[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<WordEntry>> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup_word(&self, base: &str, category: LexicalCategory) -> Arc<WordEntry> {
        let found = if category == LexicalCategory::Any {
            self.get_all(base).next()
        } else {
            self.get(base, category)
        };
        match found {
            Some(entry) => Arc::clone(entry),
            None => Arc::new(WordEntry::synthesised(base, category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_protocol::{Inflection, Person};

    const SAMPLE: &str = "\
# tiny lexicon
eat   verb irregular past=ate past_participle=eaten
that  determiner
that  complementiser
mouse noun irregular plural=mice
";

    #[test]
    fn test_parse_and_lookup() {
        let lexicon = MemoryLexicon::parse(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 4);

        let eat = lexicon.lookup_word("eat", LexicalCategory::Verb);
        assert_eq!(eat.forms.past.as_deref(), Some("ate"));
        assert_eq!(eat.inflection, Inflection::Irregular);
        assert_eq!(eat.id, WordId::new(0));

        let that = lexicon.lookup_word("that", LexicalCategory::Complementiser);
        assert_eq!(that.category, LexicalCategory::Complementiser);
        assert_eq!(lexicon.get_all("that").count(), 2);
    }

    #[test]
    fn test_any_category_takes_the_first_entry() {
        let lexicon = MemoryLexicon::parse(SAMPLE).unwrap();
        let that = lexicon.lookup_any("that");
        assert_eq!(that.category, LexicalCategory::Determiner);
    }

    #[test]
    fn test_unknown_words_are_synthesised() {
        let lexicon = MemoryLexicon::parse(SAMPLE).unwrap();
        let zorb = lexicon.lookup_word("zorb", LexicalCategory::Noun);
        assert!(zorb.id.is_synthetic());
        assert_eq!(zorb.base, "zorb");
        assert_eq!(zorb.category, LexicalCategory::Noun);
        // Known base, unknown category.
        let eat = lexicon.lookup_word("eat", LexicalCategory::Noun);
        assert!(eat.id.is_synthetic());
    }

    #[test]
    fn test_duplicates_replace() {
        let mut lexicon = MemoryLexicon::parse(SAMPLE).unwrap();
        let mut entry = WordEntry::new(WordId::new(99), "mouse", LexicalCategory::Noun);
        entry.forms.plural = Some("mouses".into());
        lexicon.insert(entry);
        assert_eq!(lexicon.len(), 4);
        let mouse = lexicon.lookup_word("mouse", LexicalCategory::Noun);
        assert_eq!(mouse.forms.plural.as_deref(), Some("mouses"));
    }

    #[test]
    fn test_archive_round_trip() {
        let lexicon = MemoryLexicon::parse(SAMPLE).unwrap();
        let bytes = lexicon.to_archive().unwrap();
        let restored = MemoryLexicon::from_archive(&bytes).unwrap();
        assert_eq!(restored.to_dictionary().words, lexicon.to_dictionary().words);
    }

    #[test]
    fn test_rejects_garbage_archives() {
        let err = MemoryLexicon::from_archive(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, LexiconError::Archive(_)));
    }

    #[test]
    fn test_rejects_other_versions() {
        let mut dictionary = MemoryLexicon::parse(SAMPLE).unwrap().to_dictionary();
        dictionary.version = DICTIONARY_VERSION + 1;
        let bytes = rkyv::to_bytes::<_, 1024>(&dictionary).unwrap();
        let err = MemoryLexicon::from_archive(&bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported version"));
    }

    #[test]
    fn test_pronoun_attributes_survive() {
        let lexicon = MemoryLexicon::parse("we pronoun person=first number=plural").unwrap();
        assert_eq!(lexicon.lookup_word("we", LexicalCategory::Pronoun).person, Some(Person::First));
    }
}
