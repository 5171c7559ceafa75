use crate::interface::InterfaceTable;
use log::debug;
use owo_colors::Style;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::OnceLock;

static STYLING: OnceLock<bool> = OnceLock::new();

/// Turns ANSI styling on or off for the whole process. Only the first call counts.
pub fn init_styling(enabled: bool) {
    if STYLING.set(enabled).is_err() {
        debug!("Presenter: styling already initialized");
    }
}

fn styling_enabled() -> bool {
    STYLING.get().copied().unwrap_or(false)
}

fn paint<W: Write>(out: &mut W, style: Style, text: impl Display) -> io::Result<()> {
    if styling_enabled() {
        writeln!(out, "{}", style.style(text))
    } else {
        writeln!(out, "{text}")
    }
}

/// Writes every record carrying an address, in listing order.
pub fn render<W: Write>(table: &InterfaceTable, out: &mut W) -> io::Result<()> {
    paint(out, Style::new().green(), "Network Information:")?;
    writeln!(out)?;

    for record in table.iter().filter(|r| r.has_address()) {
        paint(out, Style::new().blue(), format_args!("Interface: {}", record.name))?;
        for (label, value) in record.fields() {
            writeln!(out, "  {label}: {value}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Prints the table to stdout. Write failures (closed pipe) are only logged.
pub fn display(table: &InterfaceTable) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = render(table, &mut out).and_then(|_| out.flush()) {
        debug!("Presenter: output failed: {err}");
    }
}
