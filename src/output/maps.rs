// SPDX-License-Identifier: GPL-3.0-or-later
//! Map listing generation.

use anyhow::Result;
use std::io::Write;

use crate::hardware::Width;
use crate::iomap::IoMaps;

use super::writer::ListingWriter;

/// Write the full map listing: a `D8 Map`, `D16 Map`, and `D32 Map` section,
/// each label followed by that map's entries in ascending address order. A
/// map with no entries still gets its label.
pub fn generate_map_listing(maps: &IoMaps, sink: &mut impl Write) -> Result<()> {
    let mut writer = ListingWriter::new(sink);
    for width in Width::ALL {
        writer.section(width.section_label())?;
        for (addr, expr) in maps.map(width).iter() {
            writer.entry(addr, expr)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::RegisterTable;
    use crate::iomap::MapBuilder;

    fn render(table: &RegisterTable) -> String {
        let maps = MapBuilder::new().build(table).unwrap();
        let mut buf = Vec::new();
        generate_map_listing(&maps, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_tables_render_labels_only() {
        assert_eq!(render(&RegisterTable::default()), "D8 Map\nD16 Map\nD32 Map\n");
    }

    #[test]
    fn single_byte_register_listing() {
        let table = RegisterTable::new(&[("POSTFLG", 0x0400_0300)], &[], &[]);
        assert_eq!(
            render(&table),
            "D8 Map\n0x4000300 => POSTFLG,\nD16 Map\nD32 Map\n"
        );
    }

    #[test]
    fn word_register_appears_in_all_three_sections() {
        let table = RegisterTable::new(&[], &[], &[("BG2X", 0x0400_0028)]);
        let text = render(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "D8 Map",
                "0x4000028 => BG2X & 0xFF as u8,",
                "0x4000029 => (BG2X >> 8) & 0xFF as u8,",
                "0x400002a => (BG2X >> 16) & 0xFF as u8,",
                "0x400002b => (BG2X >> 24) & 0xFF as u8,",
                "D16 Map",
                "0x4000028 => BG2X & 0xFFFF as u16,",
                "0x400002a => (BG2X >> 16) & 0xFFFF as u16,",
                "D32 Map",
                "0x4000028 => BG2X,",
            ]
        );
    }

    #[test]
    fn word_section_renders_the_word_map() {
        // The 32-bit section must hold bare 32-bit names, not halfword
        // slices.
        let table = RegisterTable::new(&[], &[("DISPCNT", 0x0400_0000)], &[("BG2X", 0x0400_0028)]);
        let text = render(&table);
        let d32 = text.split("D32 Map\n").nth(1).unwrap();
        assert_eq!(d32, "0x4000028 => BG2X,\n");
    }

    #[test]
    fn rendering_is_idempotent() {
        let table = RegisterTable::gba();
        assert_eq!(render(&table), render(&table));
    }
}
