use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid lexicon archive: {0}")]
    Archive(String),
}

impl LexiconError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        LexiconError::Parse {
            line,
            message: message.into(),
        }
    }
}
