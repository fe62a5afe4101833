use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::error::{FormatError, Result};
use crate::table::InstructionTable;

pub const HEADER: [&str; 2] = ["Instruction", "Description"];

/// Write `table` as a two-column CSV with a header row.
///
/// The header is written by hand so that an empty table still produces it.
/// Rows end in CRLF.
pub fn write_csv<W: Write>(table: &InstructionTable, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for record in table.iter() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Creates or truncates `path`. The handle is dropped (closed) on every exit path.
pub fn export_to_path(table: &InstructionTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| FormatError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(table, file)?;

    info!(path = %path.display(), rows = table.len(), "wrote instruction table");
    Ok(())
}

pub fn to_csv_string(table: &InstructionTable) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| FormatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
