//! tmuxl core: fixed pane layouts for tmux windows.

pub mod command;
pub mod error;
pub mod help;
pub mod infrastructure;
pub mod layout;
pub mod sys;
pub mod types;

pub use error::{Result, TmuxlError};
