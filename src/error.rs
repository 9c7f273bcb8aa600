use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot add command {0:?}: it already exists")]
    DuplicateCommand(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error(transparent)]
    FlagParse(#[from] clap::Error),

    /// Failure reported by a user-supplied handler.
    #[error("{0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, Error>;
