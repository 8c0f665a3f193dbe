use std::fs;
use std::io::{IsTerminal, Write};

use colored::{ColoredString, Colorize};
use tracing::{debug, info};

use crate::config::ConsoleConfig;
use crate::errors::MigrationError;
use crate::migrations::{MigrationBatch, MigrationFile, OperatorGate};

const BANNER_TITLE: &str = "MIGRATIONS - RUN IN ORDER";
const COMPLETION_MESSAGE: &str = "✅ ALL MIGRATIONS ARE READY TO BE EXECUTED!";

/// Rendering options for the console transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Length of the `=` delimiter lines.
    pub width: usize,
    /// Console named in the second instruction step.
    pub console_name: String,
    /// Menu path inside that console.
    pub editor_path: String,
    /// Colour headers and labels. File contents are never coloured.
    pub styled: bool,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self::from_console(&ConsoleConfig::default(), false)
    }
}

impl PresenterOptions {
    pub fn from_console(console: &ConsoleConfig, styled: bool) -> Self {
        Self {
            width: console.width,
            console_name: console.name.clone(),
            editor_path: console.editor_path.clone(),
            styled,
        }
    }

    /// Styling is enabled only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn for_stdout(console: &ConsoleConfig) -> Self {
        let styled = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::from_console(console, styled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    Scanning,
    /// Showing (or waiting after) the migration with this ordinal.
    Presenting(usize),
    Done,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentReport {
    pub presented: usize,
    pub waits: usize,
}

/// Walks a batch one migration at a time: header, verbatim content,
/// instructions, then a blocking wait on the gate.
pub struct Presenter<'o, W, G> {
    out: W,
    gate: G,
    options: &'o PresenterOptions,
    state: PresenterState,
}

impl<'o, W: Write, G: OperatorGate> Presenter<'o, W, G> {
    pub fn new(out: W, gate: G, options: &'o PresenterOptions) -> Self {
        Self {
            out,
            gate,
            options,
            state: PresenterState::Scanning,
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn run(&mut self, batch: &MigrationBatch) -> Result<PresentReport, MigrationError> {
        let mut report = PresentReport::default();

        if !batch.is_empty() {
            self.write_banner()?;
        }

        for file in batch {
            self.state = PresenterState::Presenting(file.ordinal);
            debug!(ordinal = file.ordinal, file = %file.file_name, "Presenting migration");

            self.present_file(file)?;
            report.presented += 1;

            self.out.flush()?;
            self.gate.wait()?;
            report.waits += 1;
        }

        self.state = PresenterState::Done;
        let completion = self.paint(COMPLETION_MESSAGE, |s| s.green().bold());
        writeln!(self.out)?;
        writeln!(self.out, "{}", completion)?;
        self.out.flush()?;

        info!(count = report.presented, "All migrations presented");
        Ok(report)
    }

    fn write_banner(&mut self) -> Result<(), MigrationError> {
        let delimiter = self.delimiter();
        let title = self.paint(BANNER_TITLE, |s| s.bold());
        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn present_file(&mut self, file: &MigrationFile) -> Result<(), MigrationError> {
        let delimiter = self.delimiter();
        let header = self.paint(
            &format!("MIGRATION #{}: {}", file.ordinal, file.file_name),
            |s| s.cyan().bold(),
        );

        writeln!(self.out)?;
        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out)?;
        // The header must reach the operator even if the read below fails.
        self.out.flush()?;

        let content = read_migration(file)?;
        self.out.write_all(content.as_bytes())?;
        writeln!(self.out)?;

        self.write_instructions(file.ordinal)
    }

    fn write_instructions(&mut self, ordinal: usize) -> Result<(), MigrationError> {
        let label = self.paint(&format!("[STEP {}]", ordinal), |s| s.yellow().bold());

        writeln!(self.out)?;
        writeln!(self.out, "{}", label)?;
        writeln!(self.out, "1. Copy the content above")?;
        writeln!(
            self.out,
            "2. Open {} > {}",
            self.options.console_name, self.options.editor_path
        )?;
        writeln!(self.out, "3. Paste it and click 'Run'")?;
        writeln!(self.out)?;
        writeln!(self.out, "Press ENTER to continue...")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn delimiter(&self) -> String {
        self.paint(&"=".repeat(self.options.width), |s| s.bright_black())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.options.styled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Presents every migration of `batch` to `out`, waiting on `gate` after each.
pub fn present<W: Write, G: OperatorGate>(
    batch: &MigrationBatch,
    out: W,
    gate: G,
    options: &PresenterOptions,
) -> Result<PresentReport, MigrationError> {
    Presenter::new(out, gate, options).run(batch)
}

fn read_migration(file: &MigrationFile) -> Result<String, MigrationError> {
    let bytes = fs::read(&file.path).map_err(|source| MigrationError::ReadFile {
        path: file.path.clone(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| MigrationError::Decode {
        path: file.path.clone(),
        source,
    })
}
