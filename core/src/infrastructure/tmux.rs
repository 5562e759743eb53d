//! tmux glue: argument builders, output parsers, and the runner seam that
//! actually spawns the tmux binary.

use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TmuxlError};
use crate::types::response::Action;


/// Format string for `display-message -p` that reports the window geometry.
pub const WINDOW_INFO_FORMAT: &str = "[#{window_width}x#{window_height}:#{window_panes}]";


/// Runs one tmux invocation and returns its stdout.
pub trait TmuxRunner {
    fn run(&self, args: &[String]) -> Result<String>;
}


/// Spawns the real tmux binary.
pub struct SystemTmux {
    bin: String,
}


impl SystemTmux {
    pub fn new(bin: impl Into<String>) -> SystemTmux {
        SystemTmux { bin: bin.into() }
    }
}


impl TmuxRunner for SystemTmux {
    fn run(&self, args: &[String]) -> Result<String> {
        debug!(bin = %self.bin, ?args, "running tmux");
        let output = Command::new(&self.bin).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TmuxlError::NotAvailable(self.bin.clone())
            } else {
                TmuxlError::Io(e)
            }
        })?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(TmuxlError::CommandFailed(format!(
                "{} {} failed: {}",
                self.bin,
                args.join(" "),
                stderr.trim()
            )))
        }
    }
}


/// Geometry of the current window as reported by tmux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub width: u32,
    pub height: u32,
    pub panes: u32,
}


/// Parse the output of `display-message -p WINDOW_INFO_FORMAT`, e.g.
/// `[212x51:3]`.
pub fn parse_window_info(raw: &str) -> Result<WindowInfo> {
    let bad = || TmuxlError::UnexpectedOutput(raw.to_string());
    let body = raw
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(bad)?;
    let (size, panes) = body.split_once(':').ok_or_else(bad)?;
    let (width, height) = size.split_once('x').ok_or_else(bad)?;
    Ok(WindowInfo {
        width: width.parse().map_err(|_| bad())?,
        height: height.parse().map_err(|_| bad())?,
        panes: panes.parse().map_err(|_| bad())?,
    })
}


/// Builds tmux argument vectors.
#[derive(Debug, Clone)]
pub struct TmuxCommandBuilder {
    split_in_current_path: bool,
}


impl Default for TmuxCommandBuilder {
    fn default() -> Self {
        TmuxCommandBuilder {
            split_in_current_path: true,
        }
    }
}


impl TmuxCommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn split_in_current_path(mut self, on: bool) -> Self {
        self.split_in_current_path = on;
        self
    }

    pub fn window_info(&self) -> Vec<String> {
        args(&["display-message", "-p", WINDOW_INFO_FORMAT])
    }

    /// Split pane `target` without moving focus to the new pane.
    pub fn split_window(&self, target: u8) -> Vec<String> {
        let mut v = args(&["split-window"]);
        if self.split_in_current_path {
            v.extend(args(&["-c", "#{pane_current_path}"]));
        }
        v.extend(args(&["-d", "-t", &target.to_string()]));
        v
    }

    pub fn select_layout(&self, layout: &str) -> Vec<String> {
        args(&["select-layout", layout])
    }

    pub fn select_pane(&self, target: u8) -> Vec<String> {
        args(&["select-pane", "-t", &target.to_string()])
    }

    pub fn for_action(&self, action: &Action) -> Vec<String> {
        match action {
            Action::CreatePane { target } => self.split_window(*target),
            Action::SelectLayout { layout } => self.select_layout(layout),
            Action::SelectPane { target } => self.select_pane(*target),
        }
    }
}


fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}


/// Query the current window's size and pane count.
pub fn window_info(runner: &dyn TmuxRunner, builder: &TmuxCommandBuilder) -> Result<WindowInfo> {
    let raw = runner.run(&builder.window_info())?;
    parse_window_info(&raw)
}


/// Run `action` through `runner`. `split-window -d` and `select-layout`
/// print nothing on success, so output from them is reported as an error.
/// Output from `select-pane` is ignored.
pub fn apply_action(
    runner: &dyn TmuxRunner,
    builder: &TmuxCommandBuilder,
    action: &Action,
) -> Result<()> {
    let out = runner.run(&builder.for_action(action))?;
    if !matches!(action, Action::SelectPane { .. }) && !out.trim().is_empty() {
        return Err(TmuxlError::UnexpectedOutput(out));
    }
    Ok(())
}
