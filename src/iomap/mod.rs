// SPDX-License-Identifier: GPL-3.0-or-later
//! Address map construction for the GBA I/O register file.
//!
//! The register tables in `crate::hardware` group registers by natural access
//! width. The builder here turns them into three maps, one per access width,
//! where every reachable byte, halfword, and word address resolves to either
//! a bare register name or a shift/mask slice of a wider register.

pub mod builder;
pub mod expr;

pub use builder::{AddressMap, IoMaps, MapBuilder};
pub use expr::slice_expr;
