use std::io::{BufRead, BufReader, Read, Write};

use crate::error::ReportError;

/// Copy the DRC report to `writer`, one trimmed line at a time.
pub fn write_drc_report<R, W>(reader: R, mut writer: W) -> Result<(), ReportError>
where
    R: Read,
    W: Write,
{
    for line in BufReader::new(reader).lines() {
        writeln!(writer, "{}", line?.trim())?;
    }
    Ok(())
}
