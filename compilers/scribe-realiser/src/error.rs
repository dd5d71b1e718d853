use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealiseError {
    #[error("no realiser for syntax node of category '{category}'")]
    UnsupportedNode { category: String },
}
