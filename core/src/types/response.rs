//! Dispatcher results and the tmux side effects queued while producing them.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}


/// A tmux mutation queued by `Sys` and applied by `Sys::flush`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Split pane `target` (a window pane index), keeping focus where it is.
    CreatePane { target: u8 },
    /// Apply a checksummed layout string to the current window.
    SelectLayout { layout: String },
    SelectPane { target: u8 },
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_is_tagged_by_status() {
        let json = serde_json::to_string(&Response::Ok { output: "x".into() }).unwrap();
        assert_eq!(json, r#"{"status":"ok","output":"x"}"#);
    }

    #[test]
    fn action_is_tagged_by_kind() {
        let action = Action::SelectLayout { layout: "aa7d,100x40,0,0,0".into() };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"action\":\"select_layout\""));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
