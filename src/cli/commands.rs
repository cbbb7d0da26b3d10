use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster", about = concat!("[>] roster v", env!("CARGO_PKG_VERSION"), " - a people table in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read people from a JSON file instead of the built-in dataset
    #[arg(short = 'F', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the people table, filtered and sorted
    List(ListArgs),
    /// Show a single person by slug
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Keep only people whose name contains this text (case-insensitive)
    #[arg(long)]
    pub query: Option<String>,
    /// Filter by gender: m or f
    #[arg(long)]
    pub gender: Option<String>,
    /// Sort by "name" or "born"
    #[arg(long)]
    pub sort: Option<String>,
    /// Reverse the final order
    #[arg(long)]
    pub reverse: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Person slug, e.g. carolus-haverbeke-1832
    pub slug: String,
}
