use std::path::Path;

use clap::Parser;
use roster::cli::commands::Cli;
use roster::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let file = cli.file.clone();
            if let Err(e) = roster::tui::run(file.as_deref().map(Path::new)) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
