use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The text of this variant is shown to the user as-is.
    #[error("Please enter a search term")]
    EmptyQuery,
    #[error("JSON {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;
