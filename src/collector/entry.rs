use std::io::{self, Write};

use crate::config::RULE_WIDTH;

/// Prefix written in place of the content when a matched file cannot be read.
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";

/// Write one bundle entry: header, `=` rule, content (or the read error), `-` rule.
///
/// Content is written verbatim. The closing rule is always preceded by a
/// newline, so content that already ends with one leaves a blank line.
pub fn write_entry<W: Write>(
    writer: &mut W,
    relative_path: &str,
    contents: &io::Result<String>,
) -> io::Result<()> {
    writeln!(writer, "File: {}", relative_path)?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    match contents {
        Ok(text) => writer.write_all(text.as_bytes())?,
        Err(e) => write!(writer, "{}{}", READ_ERROR_PREFIX, e)?,
    }
    write!(writer, "\n{}\n", "-".repeat(RULE_WIDTH))
}
