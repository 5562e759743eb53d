//! Help system for tmuxl commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => match command_help(t) {
            Some(text) => text.into(),
            None => format!("Unknown help topic: '{}'. Run 'tmuxl help' for a list of commands.", t),
        },
    }
}


fn overview() -> String {
    "\
tmuxl - arrange the current tmux window into 1 to 5 panes

Usage: tmuxl [N]
       tmuxl <command> [args...]

  N                          Grow the window to N panes (1-5) and apply the layout.
                             Without N, re-apply the layout for the current panes.

Commands:
  layout <N> [--width <W>] [--height <H>]
                             Print the select-layout argument for N panes
  checksum <LAYOUT>          Print tmux's checksum of a layout string
  status                     Show the window size, pane count and layout
  help [topic]               Show help

Layouts:
  1  one pane                4  top 60/40, bottom 40/60
  2  top / bottom            5  as 4, top-right split top / bottom
  3  top, bottom 40/60

Run 'tmuxl help <command>' for detailed help on a specific command."
        .into()
}


fn command_help(command: &str) -> Option<&'static str> {
    let text = match command {
        "adjust" => "tmuxl [N] - grow the window to N panes\n\nUsage: tmuxl [N]\n\n\
                     N must be between 1 and 5 and not below the current pane count.",
        "layout" => "tmuxl layout - compute a layout string\n\n\
                     Usage: tmuxl layout <N> [--width <W>] [--height <H>]\n\n\
                     Missing dimensions are taken from the terminal.",
        "checksum" => "tmuxl checksum - checksum a layout string\n\nUsage: tmuxl checksum <LAYOUT>",
        "status" => "tmuxl status - show the current window\n\nUsage: tmuxl status",
        "help" => "tmuxl help - show help\n\nUsage: tmuxl help [topic]",
        _ => return None,
    };
    Some(text)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_commands() {
        let text = help_text(None);
        assert!(text.contains("Usage: tmuxl [N]"));
        assert!(text.contains("checksum <LAYOUT>"));
    }

    #[test]
    fn command_help_layout() {
        let text = help_text(Some("layout"));
        assert!(text.contains("Usage:"));
        assert!(text.contains("--width"));
    }

    #[test]
    fn unknown_topic() {
        let text = help_text(Some("bogus"));
        assert!(text.contains("Unknown help topic"));
    }
}
