//! Line-mode shell driving the calculator form.
//!
//! Each input line edits one field (or asks for help/quit). After every edit
//! both output lines are reprinted, the way the form's labels refresh.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::form::{CalculatorForm, FormView};
use crate::model::PaperFormat;

/// Command summary printed by `help`.
pub const HELP: &str = "\
commands:
  quantity <n>    print run, 1 to 1000000
  coverage <n>    ink coverage percent, 1 to 100
  format <A3|A4>  paper format (empty to clear)
  show            print the current result
  help            this text
  quit            exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the quantity text.
    Quantity(String),
    /// Replace the coverage text.
    Coverage(String),
    /// Raw format text; empty clears the selection.
    Format(String),
    /// Reprint the current result (also an empty line).
    Show,
    /// Print [`HELP`].
    Help,
    /// Stop reading input.
    Quit,
    /// Anything else, kept verbatim for the hint.
    Unknown(String),
}

impl Command {
    /// Parse `key value` or `key=value`. Keys are case-insensitive and may be
    /// shortened to their first letter.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (key, value) = match line.split_once(|c: char| c == '=' || c.is_whitespace()) {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, ""),
        };

        match key.to_ascii_lowercase().as_str() {
            "quantity" | "q" => Command::Quantity(value.to_string()),
            "coverage" | "c" => Command::Coverage(value.to_string()),
            "format" | "f" => Command::Format(value.to_string()),
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Print both output lines.
pub fn write_view(out: &mut impl Write, view: &FormView) -> io::Result<()> {
    writeln!(out, "{}", view.result_line)?;
    writeln!(out, "{}", view.drying_line)
}

/// Apply one command to the form. Returns `None` for commands that do not
/// produce a view.
fn apply(
    form: &mut CalculatorForm,
    command: Command,
    out: &mut impl Write,
) -> io::Result<Option<FormView>> {
    let view = match command {
        Command::Quantity(text) => form.set_quantity(text),
        Command::Coverage(text) => form.set_coverage(text),
        Command::Format(text) if text.is_empty() => form.select_format(None),
        Command::Format(text) => match text.parse::<PaperFormat>() {
            Ok(format) => form.select_format(Some(format)),
            Err(err) => {
                // Selector only offers known formats; leave it unchanged.
                debug!(error = %err, "Ignoring unknown format");
                writeln!(out, "unknown format {text:?}, choose A3 or A4")?;
                return Ok(None);
            }
        },
        Command::Show => form.view(),
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(None);
        }
        Command::Unknown(line) => {
            writeln!(out, "unrecognized command {line:?}, type 'help'")?;
            return Ok(None);
        }
        Command::Quit => return Ok(None),
    };
    Ok(Some(view))
}

/// Read commands until `quit` or end of input.
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
pub fn run(form: &mut CalculatorForm, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    write_view(&mut out, &form.view())?;

    for line in input.lines() {
        let command = Command::parse(&line?);
        if command == Command::Quit {
            break;
        }
        if let Some(view) = apply(form, command, &mut out)? {
            write_view(&mut out, &view)?;
        }
        out.flush()?;
    }

    info!("Shell finished");
    Ok(())
}
