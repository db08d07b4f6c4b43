use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("A gallery needs at least one item")]
    NoItems,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Command '{0}' expects an argument")]
    MissingArgument(String),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Invalid target '{0}'")]
    InvalidTarget(String),
}
