use tracing::{debug, info};

use crate::command::Command;
use crate::error::{Result, TmuxlError};
use crate::infrastructure::tmux::{self, TmuxCommandBuilder, TmuxRunner};
use crate::layout::plan::AdjustPlan;
use crate::layout::schedule::PaneCount;
use crate::layout::serialize;
use crate::types::config::TmuxlSettings;
use crate::types::response::{Action, Response};


/// Central runtime for tmuxl. Dispatches commands and queues the tmux
/// mutations they imply.
pub struct Sys {
    settings: TmuxlSettings,
    runner: Box<dyn TmuxRunner>,
    builder: TmuxCommandBuilder,
    actions: Vec<Action>,
}


impl Sys {
    pub fn new(settings: TmuxlSettings, runner: Box<dyn TmuxRunner>) -> Sys {
        let builder =
            TmuxCommandBuilder::new().split_in_current_path(settings.split_in_current_path);
        Sys {
            settings,
            runner,
            builder,
            actions: Vec::new(),
        }
    }

    /// Return a reference to the current settings.
    pub fn settings(&self) -> &TmuxlSettings {
        &self.settings
    }

    /// The single dispatch method.
    pub fn execute(&mut self, cmd: Command) -> Response {
        self.actions.clear();
        let result = match cmd {
            Command::Adjust { panes } => self.cmd_adjust(panes),
            Command::Layout { panes, width, height } => self.cmd_layout(panes, width, height),
            Command::Checksum { layout } => Ok(serialize::checksum(&layout)),
            Command::Status => self.cmd_status(),
            Command::Help { topic } => Ok(crate::help::help_text(topic.as_deref())),
        };
        match result {
            Ok(output) => Response::Ok { output },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        }
    }

    /// Actions emitted during the last execute() call.
    pub fn pending_actions(&self) -> &[Action] {
        &self.actions
    }

    /// Take and clear accumulated actions.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    /// Apply queued actions through tmux in order. Stops at the first
    /// failure; actions after it are dropped. Returns how many were applied.
    pub fn flush(&mut self) -> Result<usize> {
        let actions = self.drain_actions();
        for action in &actions {
            debug!(?action, "applying");
            tmux::apply_action(self.runner.as_ref(), &self.builder, action)?;
        }
        Ok(actions.len())
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    fn cmd_adjust(&mut self, panes: Option<i64>) -> Result<String> {
        // Reject a bad count before asking tmux anything.
        if let Some(n) = panes {
            PaneCount::new(n)?;
        }
        let window = tmux::window_info(self.runner.as_ref(), &self.builder)?;
        let plan = AdjustPlan::new(window.panes, panes)?;
        let layout = serialize::select_layout_string(window.width, window.height, plan.desired)?;
        info!(
            width = window.width,
            height = window.height,
            current = plan.current.get(),
            desired = plan.desired.get(),
            "adjusting layout"
        );

        for &target in &plan.split_targets {
            self.actions.push(Action::CreatePane { target });
        }
        self.actions.push(Action::SelectLayout {
            layout: layout.clone(),
        });
        if let Some(target) = plan.focus.filter(|_| self.settings.focus_bottom_left) {
            self.actions.push(Action::SelectPane { target });
        }
        Ok(layout)
    }

    fn cmd_layout(&self, panes: i64, width: u32, height: u32) -> Result<String> {
        let n = PaneCount::new(panes)?;
        if width == 0 || height == 0 {
            return Err(TmuxlError::InvalidSize { width, height });
        }
        serialize::select_layout_string(width, height, n)
    }

    fn cmd_status(&self) -> Result<String> {
        let window = tmux::window_info(self.runner.as_ref(), &self.builder)?;
        let layout = match PaneCount::new(window.panes as i64) {
            Ok(n) => serialize::select_layout_string(window.width, window.height, n)?,
            Err(_) => format!("none (no layout for {} panes)", window.panes),
        };
        Ok(format!(
            "window: {}x{}\npanes: {}\nlayout: {}",
            window.width, window.height, window.panes, layout
        ))
    }
}
