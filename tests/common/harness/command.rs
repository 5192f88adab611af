//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notekeep` binary.
pub struct NotekeepCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl NotekeepCommand {
    /// Creates a new command for the `notekeep` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--file` option to specify the note store.
    pub fn file(mut self, path: &Path) -> Self {
        self.args.push("--file".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds the given text to stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notekeep").expect("Failed to find notekeep binary");
        cmd.args(&self.args);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the interactive menu with scripted input lines.
    pub fn menu(self, lines: &[&str]) -> Self {
        let mut input = lines.join("\n");
        input.push('\n');
        self.args(["menu"]).stdin(input)
    }

    pub fn add(self, title: &str, body: &str) -> Self {
        self.args(["add", title, body])
    }

    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    pub fn show(self, title: &str) -> Self {
        self.args(["show", title])
    }

    pub fn rm(self, title: &str) -> Self {
        self.args(["rm", title])
    }

    pub fn update(self, title: &str, body: &str) -> Self {
        self.args(["update", title, body])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotekeepCommand {
    fn default() -> Self {
        Self::new()
    }
}
