// SPDX-License-Identifier: GPL-3.0-or-later
//! Slice-expression synthesis.
//!
//! A narrower access inside a wider register's span reads as a shift-and-mask
//! of the wider register's value. The expressions built here are output text
//! for a downstream consumer; this crate never evaluates them.

use crate::hardware::Width;

/// Build the expression for a `width`-sized slice of `name`'s value, starting
/// `shift` bits up. The shift term is omitted when the shift is zero; that is
/// a formatting rule of the output, not an optimization.
///
/// Masks render in uppercase hex: `DISPCNT & 0xFF as u8`,
/// `(BG2X >> 16) & 0xFFFF as u16`.
pub fn slice_expr(name: &str, shift: u32, width: Width) -> String {
    if shift > 0 {
        format!(
            "({} >> {}) & 0x{:X} as u{}",
            name,
            shift,
            width.mask(),
            width.bits()
        )
    } else {
        format!("{} & 0x{:X} as u{}", name, width.mask(), width.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_shift_omits_shift_term() {
        assert_eq!(slice_expr("DISPCNT", 0, Width::D8), "DISPCNT & 0xFF as u8");
        assert_eq!(slice_expr("BG2X", 0, Width::D16), "BG2X & 0xFFFF as u16");
    }

    #[test]
    fn nonzero_shift_parenthesizes_the_shift() {
        assert_eq!(
            slice_expr("DISPCNT", 8, Width::D8),
            "(DISPCNT >> 8) & 0xFF as u8"
        );
        assert_eq!(
            slice_expr("BG2X", 16, Width::D16),
            "(BG2X >> 16) & 0xFFFF as u16"
        );
        assert_eq!(
            slice_expr("BG2X", 24, Width::D8),
            "(BG2X >> 24) & 0xFF as u8"
        );
    }
}
