// SPDX-License-Identifier: GPL-3.0-or-later
//! GBA hardware definitions: the I/O register tables and their description types.

pub mod ioregs;
pub mod registers;

pub use ioregs::*;
pub use registers::*;
