//! tmuxl CLI: arrange the current tmux window into a fixed 1–5 pane layout.

mod logging;

use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;

use tmuxl_core::command::Command;
use tmuxl_core::infrastructure::terminal;
use tmuxl_core::infrastructure::tmux::SystemTmux;
use tmuxl_core::sys::Sys;
use tmuxl_core::types::config::{resolve_config_dir, TmuxlSettings};
use tmuxl_core::types::response::Response;


#[derive(Parser, Debug)]
#[command(name = "tmuxl", version, about = "Arrange the current tmux window into 1-5 panes")]
#[command(args_conflicts_with_subcommands = true, disable_help_subcommand = true)]
struct Cli {
    /// Desired pane count (1-5). Omit to re-apply the layout for the current panes.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    panes: Option<i64>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Sub>,
}


#[derive(Subcommand, Debug)]
enum Sub {
    /// Print the select-layout argument for N panes
    Layout {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        panes: i64,
        /// Window width in cells (default: terminal width)
        #[arg(long, env = "TMUXL_WIDTH")]
        width: Option<u32>,
        /// Window height in cells (default: terminal height)
        #[arg(long, env = "TMUXL_HEIGHT")]
        height: Option<u32>,
    },
    /// Print tmux's checksum of a layout string
    Checksum {
        #[arg(value_name = "LAYOUT")]
        layout: String,
    },
    /// Show the window size, pane count and layout
    Status,
    /// Show help
    Help {
        topic: Option<String>,
    },
}


fn main() {
    let cli = Cli::parse();

    let settings = match TmuxlSettings::load(&resolve_config_dir()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("tmuxl: {}", e);
            process::exit(1);
        }
    };
    logging::init(if cli.verbose { "debug" } else { &settings.log_level });

    let cmd = match to_command(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tmuxl: {}", e);
            process::exit(1);
        }
    };
    debug!(?cmd, "dispatching");

    let runner = SystemTmux::new(settings.tmux_bin.clone());
    let mut sys = Sys::new(settings, Box::new(runner));
    let response = sys.execute(cmd);

    if let Response::Ok { .. } = response {
        if let Err(e) = sys.flush() {
            report(
                &Response::Error {
                    message: e.to_string(),
                },
                cli.json,
            );
            process::exit(1);
        }
    }

    report(&response, cli.json);
    if let Response::Error { .. } = response {
        process::exit(1);
    }
}


fn to_command(cli: &Cli) -> Result<Command, String> {
    let cmd = match &cli.command {
        None => Command::Adjust { panes: cli.panes },
        Some(Sub::Layout {
            panes,
            width,
            height,
        }) => {
            let (width, height) = window_size(*width, *height)?;
            Command::Layout {
                panes: *panes,
                width,
                height,
            }
        }
        Some(Sub::Checksum { layout }) => Command::Checksum {
            layout: layout.clone(),
        },
        Some(Sub::Status) => Command::Status,
        Some(Sub::Help { topic }) => Command::Help {
            topic: topic.clone(),
        },
    };
    Ok(cmd)
}


/// Fill in missing dimensions from the controlling terminal.
fn window_size(width: Option<u32>, height: Option<u32>) -> Result<(u32, u32), String> {
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        (w, h) => {
            let (cols, rows) = terminal::size()
                .ok_or("not a terminal; pass --width and --height")?;
            Ok((w.unwrap_or(cols), h.unwrap_or(rows)))
        }
    }
}


fn report(response: &Response, json: bool) {
    if json {
        match serde_json::to_string(response) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("tmuxl: {}", e),
        }
        return;
    }
    match response {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => eprintln!("tmuxl: {}", message),
    }
}
