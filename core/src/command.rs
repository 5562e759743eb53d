//! Command: the typed interface for all tmuxl operations.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    /// Grow the current window to `panes` panes and apply the layout.
    /// Without a count the current layout is re-applied.
    #[serde(rename = "adjust")]
    Adjust {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        panes: Option<i64>,
    },

    /// Compute the select-layout string without touching tmux.
    #[serde(rename = "layout")]
    Layout {
        panes: i64,
        width: u32,
        height: u32,
    },

    #[serde(rename = "checksum")]
    Checksum {
        layout: String,
    },

    #[serde(rename = "status")]
    Status,

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_without_count_omits_field() {
        let cmd = Command::Adjust { panes: None };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"command":"adjust"}"#);
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn layout_round_trip() {
        let cmd = Command::Layout {
            panes: 3,
            width: 212,
            height: 51,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"layout\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn status_parses_from_tag_only() {
        let cmd: Command = serde_json::from_str(r#"{"command":"status"}"#).unwrap();
        assert_eq!(cmd, Command::Status);
    }
}
