// SPDX-License-Identifier: GPL-3.0-or-later
//! Listing writer abstraction for consistent output formatting.
//!
//! This module provides the `ListingWriter` struct, which encapsulates the
//! line shapes of the generated map listing:
//! - Section labels (`D8 Map`)
//! - Map entries (`0xaddr => expression,`)

use anyhow::Result;
use std::io::Write;

/// Listing writer that provides a consistent API for emitting map listings.
///
/// This struct wraps a `Write` implementation and provides one method per
/// line shape. State lives in the writer, so independent listings never
/// share a buffer.
pub struct ListingWriter<W: Write> {
    writer: W,
}

impl<W: Write> ListingWriter<W> {
    /// Create a new `ListingWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emit a section label on a line of its own.
    ///
    /// Output format: `label`
    pub fn section(&mut self, label: &str) -> Result<()> {
        writeln!(self.writer, "{}", label)?;
        Ok(())
    }

    /// Emit one map entry.
    ///
    /// Output format: `0xaddr => expression,` with the address in lowercase
    /// hex, unpadded.
    pub fn entry(&mut self, addr: u32, expr: &str) -> Result<()> {
        writeln!(self.writer, "0x{:x} => {},", addr, expr)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section() {
        let mut buf = Vec::new();
        let mut writer = ListingWriter::new(&mut buf);
        writer.section("D8 Map").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "D8 Map\n");
    }

    #[test]
    fn test_entry_bare_name() {
        let mut buf = Vec::new();
        let mut writer = ListingWriter::new(&mut buf);
        writer.entry(0x0400_0300, "POSTFLG").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0x4000300 => POSTFLG,\n");
    }

    #[test]
    fn test_entry_slice_expression() {
        let mut buf = Vec::new();
        let mut writer = ListingWriter::new(&mut buf);
        writer
            .entry(0x0400_002a, "(BG2X >> 16) & 0xFFFF as u16")
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0x400002a => (BG2X >> 16) & 0xFFFF as u16,\n"
        );
    }

    #[test]
    fn test_address_is_lowercase_and_unpadded() {
        let mut buf = Vec::new();
        let mut writer = ListingWriter::new(&mut buf);
        writer.entry(0x0400_00a0, "FIFO_A").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0x40000a0 => FIFO_A,\n");
    }
}
