//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod menu;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notekeep - titled notes in a single JSON file, via menu, commands, or HTTP
#[derive(Parser, Debug)]
#[command(name = "notekeep", version, about, long_about = None)]
pub struct Cli {
    /// Note store file (overrides config file)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run (interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive menu
    Menu,

    /// Add a note
    Add(AddArgs),

    /// List all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note by title
    Show(ShowArgs),

    /// Delete a note by title
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Replace a note's body
    Update(UpdateArgs),

    /// Serve the HTTP API
    Serve(ServeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note body
    pub body: String,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note title (case-insensitive)
    pub title: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note title (case-insensitive)
    pub title: String,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note title (case-insensitive)
    pub title: String,

    /// New body
    pub body: String,
}

/// Arguments for the `serve` command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides config file)
    #[arg(long)]
    pub addr: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
