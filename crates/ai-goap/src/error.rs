use ai_search::SearchError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoapError {
    #[error("state variable `{0}` already exists in this world state")]
    DuplicateVariable(String),

    #[error("no state variable named `{0}`")]
    UnknownVariable(String),

    #[error("operator `{0}` is already registered")]
    DuplicateOperator(String),

    #[error("cost must be non-negative, got {0}")]
    NegativeCost(f32),

    #[error(transparent)]
    Search(#[from] SearchError),
}
