// SPDX-License-Identifier: GPL-3.0-or-later
//! Construction of the per-width address maps.

use std::collections::{BTreeMap, HashMap};

use anyhow::{bail, Result};

use crate::hardware::{Register, RegisterTable, Width};

use super::expr::slice_expr;

/// Map from byte address to access expression for one access width.
///
/// Entries iterate in ascending address order; the listing renderer depends
/// on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressMap(BTreeMap<u32, String>);

impl AddressMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, addr: u32) -> Option<&str> {
        self.0.get(&addr).map(|s| s.as_str())
    }
    pub fn insert(&mut self, addr: u32, expr: String) {
        self.0.insert(addr, expr);
    }
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.0.iter().map(|(&addr, expr)| (addr, expr.as_str()))
    }
}

/// The three address maps produced by one build pass, one per access width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoMaps {
    pub d8: AddressMap,
    pub d16: AddressMap,
    pub d32: AddressMap,
}

impl IoMaps {
    pub fn map(&self, width: Width) -> &AddressMap {
        match width {
            Width::D8 => &self.d8,
            Width::D16 => &self.d16,
            Width::D32 => &self.d32,
        }
    }

    fn map_mut(&mut self, width: Width) -> &mut AddressMap {
        match width {
            Width::D8 => &mut self.d8,
            Width::D16 => &mut self.d16,
            Width::D32 => &mut self.d32,
        }
    }
}

/// Builds the per-width maps from a register table.
///
/// Registers are processed in stage order, 8-bit first and 32-bit last, so at
/// any address spanned by registers of different widths the widest register's
/// contribution overwrites the narrower ones. Within one stage a later
/// register likewise overwrites an earlier one at the same address; `strict`
/// turns that same-width case into an error.
#[derive(Debug, Clone, Copy)]
pub struct MapBuilder {
    strict: bool,
}

impl MapBuilder {
    pub fn new() -> Self {
        MapBuilder { strict: false }
    }

    pub fn strict() -> Self {
        MapBuilder { strict: true }
    }

    pub fn build(&self, table: &RegisterTable) -> Result<IoMaps> {
        let mut maps = IoMaps::default();
        for stage in Width::ALL {
            let mut claims = HashMap::new();
            for reg in table.of_width(stage) {
                self.apply(reg, &mut maps, &mut claims)?;
            }
        }
        Ok(maps)
    }

    /// Write one register's contribution: its bare name into the map of its
    /// natural width, and a shift/mask slice into every narrower map for each
    /// aligned sub-unit of its span.
    fn apply(
        &self,
        reg: &Register,
        maps: &mut IoMaps,
        claims: &mut HashMap<(Width, u32), &'static str>,
    ) -> Result<()> {
        self.insert(maps, claims, reg, reg.width, reg.offset, reg.name.to_string())?;
        for width in reg.width.narrower() {
            for k in 0..reg.width.bits() / width.bits() {
                let addr = reg.offset + k * width.bytes();
                let expr = slice_expr(reg.name, k * width.bits(), width);
                self.insert(maps, claims, reg, width, addr, expr)?;
            }
        }
        Ok(())
    }

    fn insert(
        &self,
        maps: &mut IoMaps,
        claims: &mut HashMap<(Width, u32), &'static str>,
        reg: &Register,
        target: Width,
        addr: u32,
        expr: String,
    ) -> Result<()> {
        if self.strict {
            if let Some(prev) = claims.insert((target, addr), reg.name) {
                bail!(
                    "{}-bit registers {} and {} both claim address {:#x} in the {}-bit map",
                    reg.width.bits(),
                    prev,
                    reg.name,
                    addr,
                    target.bits()
                );
            }
        }
        maps.map_mut(target).insert(addr, expr);
        Ok(())
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
