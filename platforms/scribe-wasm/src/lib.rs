use std::sync::Arc;

use scribe_lexicon::MemoryLexicon;
use scribe_protocol::Node;
use scribe_realiser::{Realiser, RealiserConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One realised word as seen by JavaScript.
#[derive(Debug, Serialize, PartialEq)]
pub struct WordReport {
    pub text: String,
    /// Role the word plays in its parent, for spacing and punctuation.
    pub function: Option<String>,
    pub appositive: bool,
}

#[derive(Debug, Serialize)]
pub struct RealisationReport {
    pub text: String,
    pub words: Vec<WordReport>,
    pub interrogative: bool,
}

impl RealisationReport {
    fn from_realised(realised: Option<&Node>) -> Self {
        let mut words = Vec::new();
        if let Some(node) = realised {
            collect_words(node, &mut words);
        }
        Self {
            text: realised.map(Node::surface_text).unwrap_or_default(),
            interrogative: realised.map_or(false, |node| node.features().is_interrogative()),
            words,
        }
    }
}

fn collect_words(node: &Node, words: &mut Vec<WordReport>) {
    match node {
        Node::Text(text) if !text.text.is_empty() => words.push(WordReport {
            text: text.text.clone(),
            function: text.features.discourse_function.map(|f| format!("{:?}", f)),
            appositive: text.features.is_appositive(),
        }),
        Node::Group(group) => group.children.iter().for_each(|child| collect_words(child, words)),
        Node::Coordination(coordination) => coordination
            .pre_modifiers
            .iter()
            .chain(&coordination.coordinates)
            .chain(&coordination.post_modifiers)
            .chain(&coordination.complements)
            .for_each(|child| collect_words(child, words)),
        _ => {}
    }
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// The realiser instance running in the browser.
#[wasm_bindgen]
pub struct ScribeEngine {
    realiser: Realiser,
}

#[wasm_bindgen]
impl ScribeEngine {
    /// Builds an engine over a compiled lexicon archive (loaded via fetch() in JS).
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<ScribeEngine, JsValue> {
        let lexicon = MemoryLexicon::from_archive(&data).map_err(to_js_error)?;
        Ok(Self::with_lexicon(lexicon))
    }

    /// Engine over the built-in core English lexicon.
    pub fn builtin() -> Result<ScribeEngine, JsValue> {
        let lexicon = scribe_lexicon::builtin().map_err(to_js_error)?;
        Ok(Self::with_lexicon(lexicon))
    }

    /// Syntax tree (a plain JS object) -> realised words.
    pub fn realise(&self, tree: JsValue) -> Result<JsValue, JsValue> {
        let tree: Node = serde_wasm_bindgen::from_value(tree).map_err(to_js_error)?;
        let realised = self.realiser.realise(&tree).map_err(to_js_error)?;
        let report = RealisationReport::from_realised(realised.as_ref());
        serde_wasm_bindgen::to_value(&report).map_err(to_js_error)
    }
}

impl ScribeEngine {
    fn with_lexicon(lexicon: MemoryLexicon) -> Self {
        // Browsers get pass-through rather than hard failures on unknown nodes.
        let config = RealiserConfig {
            strict_dispatch: false,
            ..RealiserConfig::default()
        };
        Self {
            realiser: Realiser::new(Arc::new(lexicon), config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_protocol::{DiscourseFunction, Group};

    #[test]
    fn test_report_lists_words_with_roles() {
        let mut group = Group::new();
        group.push(Node::text("the").with(|f| f.discourse_function = Some(DiscourseFunction::Specifier)));
        group.push(Node::text("dog"));
        group.push(Node::text(""));
        group.features.interrogative = Some(true);
        let node = Node::Group(group);

        let report = RealisationReport::from_realised(Some(&node));
        assert_eq!(report.text, "the dog");
        assert!(report.interrogative);
        assert_eq!(report.words.len(), 2);
        assert_eq!(report.words[0].function.as_deref(), Some("Specifier"));
        assert_eq!(report.words[1].function, None);
    }

    #[test]
    fn test_empty_realisation() {
        let report = RealisationReport::from_realised(None);
        assert!(report.text.is_empty());
        assert!(report.words.is_empty());
    }

    #[test]
    fn test_engine_realises_a_tree() {
        let engine = ScribeEngine::builtin().unwrap();
        let tree = Node::text("hello");
        let realised = engine.realiser.realise(&tree).unwrap();
        assert_eq!(RealisationReport::from_realised(realised.as_ref()).text, "hello");
    }
}
