//! Human-readable before/after summary of a run.

use crate::constants::{DEBUG_TAG, KIB, OK_TAG};
use crate::info::ImageDescriptor;
use colored::Colorize;
use std::io::{self, Write};

/// Format file size in human-readable binary units
///
/// Sizes below 1024 bytes print as an integer byte count. Larger sizes use the
/// biggest unit from KB to TB that keeps the value under 1024, with one
/// decimal place. Anything from 1024 TB up prints as a raw byte count.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];

    if (bytes as f64) < KIB {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    for unit in UNITS {
        size /= KIB;
        if size < KIB {
            return format!("{:.1} {}", size, unit);
        }
    }

    format!("{} B", bytes)
}

/// Writes the success line and, when `verbose` is set, the name, size, width
/// and height transitions in that order.
pub fn print_report<W: Write>(
    writer: &mut W,
    before: &ImageDescriptor,
    after: &ImageDescriptor,
    verbose: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", format!("{} Processing succeeded", OK_TAG).green())?;

    if !verbose {
        return Ok(());
    }

    let lines = [
        (
            "FILE_NAME  ",
            before.path().display().to_string(),
            after.path().display().to_string(),
        ),
        (
            "FILE_SIZE  ",
            format_file_size(before.byte_size()),
            format_file_size(after.byte_size()),
        ),
        ("FILE_WIDTH ", before.width().to_string(), after.width().to_string()),
        ("FILE_HEIGHT", before.height().to_string(), after.height().to_string()),
    ];

    for (label, from, to) in lines {
        let line = format!("{} {} : {} => {}", DEBUG_TAG, label, from, to);
        writeln!(writer, "{}", line.green())?;
    }

    Ok(())
}
