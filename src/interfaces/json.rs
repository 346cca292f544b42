use crate::application::engine::MemberStatement;
use crate::error::Result;
use std::io::Write;

/// Writes statements as a pretty-printed JSON array followed by a newline.
pub fn write_statements<W: Write>(mut sink: W, statements: &[MemberStatement]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, statements)?;
    writeln!(sink)?;
    Ok(())
}
