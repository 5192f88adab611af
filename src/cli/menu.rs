//! Interactive numbered menu.
//!
//! Each cycle reloads the notebook from the store, so changes made by other
//! processes between cycles are picked up. The loop ends on option 6 or when
//! input runs out.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::output::format_note;
use crate::domain::require_text;
use crate::service::{NoteService, ServiceError};

const MENU: &str = "\
1. Add note
2. List notes
3. Read note
4. Delete note
5. Update note
6. Exit";

/// Whether the menu loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Menu loop over arbitrary input and output streams.
pub struct Menu<'a, R, W> {
    service: &'a NoteService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a NoteService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            let step = match choice.trim() {
                "1" => self.add()?,
                "2" => self.list()?,
                "3" => self.read()?,
                "4" => self.delete()?,
                "5" => self.update()?,
                "6" => Step::Quit,
                other => {
                    writeln!(self.output, "Invalid option '{}', choose 1-6.", other)?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn add(&mut self) -> Result<Step> {
        let Some(title) = self.prompt("title", "Title: ")? else {
            return Ok(Step::Quit);
        };
        let Some(body) = self.prompt("body", "Body: ")? else {
            return Ok(Step::Quit);
        };

        match self.service.add(&title, &body) {
            Ok(note) => writeln!(self.output, "Note '{}' added.", note.title())?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn list(&mut self) -> Result<Step> {
        match self.service.list() {
            Ok(notebook) if notebook.is_empty() => writeln!(self.output, "No notes found.")?,
            Ok(notebook) => {
                for note in &notebook {
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", format_note(note))?;
                }
                writeln!(self.output)?;
                writeln!(self.output, "{} note(s)", notebook.len())?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn read(&mut self) -> Result<Step> {
        let Some(title) = self.prompt("title", "Title: ")? else {
            return Ok(Step::Quit);
        };

        match self.service.get(&title) {
            Ok(note) => writeln!(self.output, "{}", format_note(&note))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn delete(&mut self) -> Result<Step> {
        let Some(title) = self.prompt("title", "Title: ")? else {
            return Ok(Step::Quit);
        };

        match self.service.delete(&title) {
            Ok(removed) => {
                for note in &removed {
                    writeln!(self.output, "Note '{}' deleted.", note.title())?;
                }
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn update(&mut self) -> Result<Step> {
        let Some(title) = self.prompt("title", "Title: ")? else {
            return Ok(Step::Quit);
        };
        let Some(body) = self.prompt("body", "New body: ")? else {
            return Ok(Step::Quit);
        };

        match self.service.update(&title, &body) {
            Ok(note) => writeln!(self.output, "Note '{}' updated.", note.title())?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    /// Asks for a value until a non-empty one is given.
    ///
    /// Returns `None` if input ends first.
    fn prompt(&mut self, field: &'static str, label: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", label)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match require_text(field, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{}, try again.", err)?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report(&mut self, err: &ServiceError) -> Result<()> {
        log::debug!("menu operation failed: {}", err);
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }
}
