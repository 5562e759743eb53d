//! Layout computation: fixed pane shapes, tmux layout strings, and the plan
//! for growing a window to a given pane count.
//!
//! The `tree` module holds the owned pane tree and the split geometry. The
//! `schedule` module encodes the fixed shapes for 1–5 panes. The `serialize`
//! module renders a tree into tmux's layout grammar and checksums it. The
//! `plan` module decides which panes to create before applying the layout.

pub mod plan;
pub mod schedule;
pub mod serialize;
pub mod tree;
