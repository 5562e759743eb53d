pub mod terminal;
pub mod tmux;
