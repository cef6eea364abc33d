//! Library error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date format `{0}`")]
    InvalidFormat(String),

    #[error("screen `{0}` is already installed")]
    ScreenAlreadyInstalled(String),

    #[error("screen `{0}` is not installed")]
    ScreenNotInstalled(String),

    #[error("screen `{0}` is active and cannot be uninstalled")]
    ScreenActive(String),

    #[error("screen `{0}` is already on the stack")]
    ScreenAlreadyPushed(String),

    #[error("no screen to pop")]
    NoScreenToPop,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
