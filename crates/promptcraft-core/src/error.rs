use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please enter a prompt")]
    EmptyPrompt,

    #[error("A generation is already in progress")]
    AlreadyGenerating,
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),

    #[error("Clipboard error: {0}")]
    Backend(#[from] arboard::Error),
}
