// SPDX-License-Identifier: GPL-3.0-or-later
//! Register-constant declaration generation.
//!
//! Emits the same register tables as `pub const` declarations for an
//! emulator's I/O layer, one `IORegister8`/`IORegister16`/`IORegister32`
//! wrapper constant per register. Offsets print relative to the start of the
//! I/O block.

use anyhow::Result;
use std::io::Write;

use crate::hardware::{RegisterTable, IOREG_BASE};

/// Write one `pub const NAME: IORegisterN = IORegisterN(0xoffset);` line per
/// register, grouped 8-bit first, then 16-bit, then 32-bit, each group in
/// table order. Offsets are block-relative and print as seven hex digits.
pub fn generate_register_defs(table: &RegisterTable, sink: &mut impl Write) -> Result<()> {
    writeln!(sink, "// Offsets from {:#x}", IOREG_BASE)?;
    writeln!(sink)?;
    for reg in table.in_stage_order() {
        let decl_type = reg.width.decl_type();
        writeln!(
            sink,
            "pub const {}: {} = {}({:#09x});",
            reg.name,
            decl_type,
            decl_type,
            reg.offset - IOREG_BASE
        )?;
    }
    Ok(())
}
