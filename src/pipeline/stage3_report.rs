use std::io::{self, Write};

/// Writes the whole block in one call so a failure upstream never leaves
/// partial output.
pub fn write_report<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
