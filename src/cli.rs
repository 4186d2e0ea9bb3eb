//! Command-line interface for tictactoe_tv.

use clap::Parser;

/// TV-style tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tv")]
#[command(about = "Focus-driven tic-tac-toe for remote-control style navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter directives, e.g. "tictactoe_tv=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}
