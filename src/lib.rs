//! notekeep - titled notes in a single JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod server;
pub mod service;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_list, handle_menu, handle_remove, handle_serve,
        handle_show, handle_update,
    },
};
use infra::NoteStore;
use service::NoteService;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let service = NoteService::new(NoteStore::new(config.store_path(cli.file.as_ref())));

    match &cli.command {
        None | Some(Command::Menu) => handle_menu(&service),
        Some(Command::Add(args)) => handle_add(args, &service),
        Some(Command::List(args)) => handle_list(args, &service),
        Some(Command::Show(args)) => handle_show(args, &service),
        Some(Command::Remove(args)) => handle_remove(args, &service),
        Some(Command::Update(args)) => handle_update(args, &service),
        Some(Command::Serve(args)) => handle_serve(args, &service, &config),
        Some(Command::Completions(args)) => handle_completions(args),
    }
}

/// Maps the `-v` count to a log level; `RUST_LOG` still overrides it.
fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .try_init();
}
