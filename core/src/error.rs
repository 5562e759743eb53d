//! Error type shared by the layout core and the tmux glue.

use thiserror::Error;


#[derive(Debug, Error)]
pub enum TmuxlError {
    #[error("expected 0 < n(={0}) <= 5")]
    InvalidPaneCount(i64),

    #[error("expected n(={desired}) to be >= current(={current})")]
    Shrink { desired: u8, current: u32 },

    #[error("window size {width}x{height} must be positive")]
    InvalidSize { width: u32, height: u32 },

    /// Internal invariant violation: a pane may be split at most once.
    #[error("pane {id} is already split")]
    AlreadySplit { id: u32 },

    #[error("{0} is not available")]
    NotAvailable(String),

    #[error("command failed: {0}")]
    CommandFailed(String),

    #[error("unexpected tmux output: {0:?}")]
    UnexpectedOutput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Config(#[from] serde_yaml::Error),
}


pub type Result<T> = std::result::Result<T, TmuxlError>;
