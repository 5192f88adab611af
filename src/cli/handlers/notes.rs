//! Note command handlers (menu, add, ls, show, rm, update).

use anyhow::{Context, Result};
use std::io;

use crate::cli::menu::Menu;
use crate::cli::output::{Output, OutputFormat, format_note};
use crate::cli::{AddArgs, ListArgs, RemoveArgs, ShowArgs, UpdateArgs};
use crate::domain::require_text;
use crate::service::NoteService;

pub fn handle_menu(service: &NoteService) -> Result<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(service, stdin.lock(), io::stdout());
    menu.run()
}

pub fn handle_add(args: &AddArgs, service: &NoteService) -> Result<()> {
    let title = require_text("title", &args.title)?;
    let body = require_text("body", &args.body)?;

    let note = service
        .add(&title, &body)
        .with_context(|| format!("failed to add note '{}'", title))?;

    println!("Added: {}", note.title());
    Ok(())
}

pub fn handle_list(args: &ListArgs, service: &NoteService) -> Result<()> {
    let notebook = service
        .list()
        .with_context(|| "failed to list notes")?;

    match args.format {
        OutputFormat::Human => {
            if notebook.is_empty() {
                println!("No notes found.");
            } else {
                for note in &notebook {
                    println!("{}", format_note(note));
                    println!();
                }
                println!("{} note(s)", notebook.len());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(&notebook);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn handle_show(args: &ShowArgs, service: &NoteService) -> Result<()> {
    let note = service
        .get(&args.title)
        .with_context(|| format!("failed to show note '{}'", args.title))?;

    match args.format {
        OutputFormat::Human => println!("{}", format_note(&note)),
        OutputFormat::Json => {
            let output = Output::new(&note);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, service: &NoteService) -> Result<()> {
    let removed = service
        .delete(&args.title)
        .with_context(|| format!("failed to delete note '{}'", args.title))?;

    match removed.as_slice() {
        [note] => println!("Deleted: {}", note.title()),
        notes => {
            let titles: Vec<&str> = notes.iter().map(|n| n.title()).collect();
            println!(
                "Deleted: {} ({} notes with that title)",
                titles.join(", "),
                notes.len()
            );
        }
    }
    Ok(())
}

pub fn handle_update(args: &UpdateArgs, service: &NoteService) -> Result<()> {
    let body = require_text("body", &args.body)?;

    let note = service
        .update(&args.title, &body)
        .with_context(|| format!("failed to update note '{}'", args.title))?;

    println!("Updated: {}", note.title());
    Ok(())
}
