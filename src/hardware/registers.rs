// SPDX-License-Identifier: GPL-3.0-or-later
//! Register description types and the standard GBA register table.

use super::ioregs::{IOREGS_16, IOREGS_32, IOREGS_8};

/// Natural access width of a hardware register.
///
/// `Ord` follows bit count, so `Width::D8 < Width::D16 < Width::D32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    D8,
    D16,
    D32,
}

impl Width {
    /// All tracked widths, narrowest first. This is also the map-building
    /// stage order.
    pub const ALL: [Width; 3] = [Width::D8, Width::D16, Width::D32];

    /// Width in bits.
    pub fn bits(self) -> u32 {
        match self {
            Width::D8 => 8,
            Width::D16 => 16,
            Width::D32 => 32,
        }
    }

    /// Width in bytes.
    pub fn bytes(self) -> u32 {
        self.bits() / 8
    }

    /// All-ones mask covering this width.
    pub fn mask(self) -> u32 {
        (((1u64 << self.bits()) - 1) & 0xffff_ffff) as u32
    }

    /// Section label used in the map listing.
    pub fn section_label(self) -> &'static str {
        match self {
            Width::D8 => "D8 Map",
            Width::D16 => "D16 Map",
            Width::D32 => "D32 Map",
        }
    }

    /// Wrapper type name used by the register-declarations artifact.
    pub fn decl_type(self) -> &'static str {
        match self {
            Width::D8 => "IORegister8",
            Width::D16 => "IORegister16",
            Width::D32 => "IORegister32",
        }
    }

    /// Tracked widths strictly narrower than this one, narrowest first.
    pub fn narrower(self) -> impl Iterator<Item = Width> {
        Width::ALL.into_iter().filter(move |w| *w < self)
    }
}

/// A named hardware register at a fixed byte address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    pub name: &'static str,
    pub offset: u32,
    pub width: Width,
}

impl Register {
    pub fn new(name: &'static str, offset: u32, width: Width) -> Self {
        Register {
            name,
            offset,
            width,
        }
    }
}

/// The three width-grouped register lists the map builder consumes.
///
/// Each list keeps declaration order. The builder's stage order (8-bit, then
/// 16-bit, then 32-bit) and the order within each list together determine
/// which register's contribution survives at overlapping addresses.
#[derive(Debug, Clone, Default)]
pub struct RegisterTable {
    regs8: Vec<Register>,
    regs16: Vec<Register>,
    regs32: Vec<Register>,
}

impl RegisterTable {
    /// Build a table from raw (name, offset) slices, one per width.
    pub fn new(
        data8: &[(&'static str, u32)],
        data16: &[(&'static str, u32)],
        data32: &[(&'static str, u32)],
    ) -> Self {
        fn collect(data: &[(&'static str, u32)], width: Width) -> Vec<Register> {
            data.iter()
                .map(|&(name, offset)| Register::new(name, offset, width))
                .collect()
        }
        RegisterTable {
            regs8: collect(data8, Width::D8),
            regs16: collect(data16, Width::D16),
            regs32: collect(data32, Width::D32),
        }
    }

    /// The standard GBA I/O register tables.
    pub fn gba() -> Self {
        Self::new(IOREGS_8, IOREGS_16, IOREGS_32)
    }

    /// Registers of the given natural width, in declaration order.
    pub fn of_width(&self, width: Width) -> &[Register] {
        match width {
            Width::D8 => &self.regs8,
            Width::D16 => &self.regs16,
            Width::D32 => &self.regs32,
        }
    }

    /// All registers in map-building stage order (8-bit, 16-bit, 32-bit).
    pub fn in_stage_order(&self) -> impl Iterator<Item = &Register> {
        Width::ALL.iter().flat_map(|&w| self.of_width(w).iter())
    }

    /// Total number of registers across all widths.
    pub fn len(&self) -> usize {
        self.regs8.len() + self.regs16.len() + self.regs32.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
