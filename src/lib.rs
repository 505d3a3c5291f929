// SPDX-License-Identifier: GPL-3.0-or-later
//! GBA I/O Map Generator Library
//!
//! This library derives, from the GBA's named I/O registers and their natural
//! access widths, three address-indexed maps (byte, half-word, word) in which
//! every reachable address resolves to either a bare register name or a
//! shift/mask slice of the widest register covering it, and renders them as
//! source listings for an emulator's memory handlers.

pub mod hardware;
pub mod iomap;
pub mod output;
