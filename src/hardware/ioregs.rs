// SPDX-License-Identifier: GPL-3.0-or-later
//! GBA I/O register tables: names and absolute byte addresses, grouped by the
//! natural access width of each register.
//!
//! The tables are the generator's only input and are carried verbatim from the
//! hardware documentation the emulator was written against, in declaration
//! order. `FIF0_A_L` is spelled with a digit zero in that source; the name is
//! data and is reproduced as-is.

/// Base address of the memory-mapped I/O register block.
pub const IOREG_BASE: u32 = 0x0400_0000;

/// 8-bit I/O registers.
pub const IOREGS_8: &[(&str, u32)] = &[
    ("POSTFLG", 0x0400_0300),
    ("HALTCNT", 0x0400_0301),
];

/// 16-bit I/O registers.
pub const IOREGS_16: &[(&str, u32)] = &[
    ("DISPCNT", 0x0400_0000),
    ("DISPSTAT", 0x0400_0004),
    ("VCOUNT", 0x0400_0006),
    ("BG0CNT", 0x0400_0008),
    ("BG1CNT", 0x0400_000a),
    ("BG2CNT", 0x0400_000c),
    ("BG3CNT", 0x0400_000e),
    ("BG0HOFS", 0x0400_0010),
    ("BG0VOFS", 0x0400_0012),
    ("BG1HOFS", 0x0400_0014),
    ("BG1VOFS", 0x0400_0016),
    ("BG2HOFS", 0x0400_0018),
    ("BG2VOFS", 0x0400_001a),
    ("BG3HOFS", 0x0400_001c),
    ("BG3VOFS", 0x0400_001e),
    ("BG2PA", 0x0400_0020),
    ("BG2PB", 0x0400_0022),
    ("BG2PC", 0x0400_0024),
    ("BG2PD", 0x0400_0026),
    ("BG3PA", 0x0400_0030),
    ("BG3PB", 0x0400_0032),
    ("BG3PC", 0x0400_0034),
    ("BG3PD", 0x0400_0036),
    ("WIN0H", 0x0400_0040),
    ("WIN1H", 0x0400_0042),
    ("WIN0V", 0x0400_0044),
    ("WIN1V", 0x0400_0046),
    ("WININ", 0x0400_0048),
    ("WINOUT", 0x0400_004a),
    ("MOSAIC", 0x0400_004c),
    ("BLDCNT", 0x0400_0050),
    ("BLDALPHA", 0x0400_0052),
    ("BLDY", 0x0400_0054),
    ("SOUND1CNT_L", 0x0400_0060),
    ("SOUND1CNT_H", 0x0400_0062),
    ("SOUND1CNT_X", 0x0400_0064),
    ("SOUND2CNT_L", 0x0400_0068),
    ("SOUND2CNT_H", 0x0400_006c),
    ("SOUND3CNT_L", 0x0400_0070),
    ("SOUND3CNT_H", 0x0400_0072),
    ("SOUND3CNT_X", 0x0400_0074),
    ("SOUND4CNT_L", 0x0400_0078),
    ("SOUND4CNT_H", 0x0400_007c),
    ("SOUNDCNT_L", 0x0400_0080),
    ("SOUNDCNT_H", 0x0400_0082),
    ("SOUNDCNT_X", 0x0400_0084),
    ("SOUNDBIAS", 0x0400_0088),
    ("WAVE_RAM0_L", 0x0400_0090),
    ("WAVE_RAM0_H", 0x0400_0092),
    ("WAVE_RAM1_L", 0x0400_0094),
    ("WAVE_RAM1_H", 0x0400_0096),
    ("WAVE_RAM2_L", 0x0400_0098),
    ("WAVE_RAM2_H", 0x0400_009a),
    ("WAVE_RAM3_L", 0x0400_009c),
    ("WAVE_RAM3_H", 0x0400_009e),
    ("FIF0_A_L", 0x0400_00a0),
    ("FIFO_A_H", 0x0400_00a2),
    ("FIFO_B_L", 0x0400_00a4),
    ("FIFO_B_H", 0x0400_00a6),
    ("DMA0CNT_L", 0x0400_00b8),
    ("DMA0CNT_H", 0x0400_00ba),
    ("DMA1CNT_L", 0x0400_00c4),
    ("DMA1CNT_H", 0x0400_00c6),
    ("DMA2CNT_L", 0x0400_00d0),
    ("DMA2CNT_H", 0x0400_00d2),
    ("DMA3CNT_L", 0x0400_00dc),
    ("DMA3CNT_H", 0x0400_00de),
    ("TM0CNT_L", 0x0400_0100),
    ("TM0CNT_H", 0x0400_0102),
    ("TM1CNT_L", 0x0400_0104),
    ("TM1CNT_H", 0x0400_0106),
    ("TM2CNT_L", 0x0400_0108),
    ("TM2CNT_H", 0x0400_010a),
    ("TM3CNT_L", 0x0400_010c),
    ("TM3CNT_H", 0x0400_010e),
    ("SIOMULTI0", 0x0400_0120),
    ("SIOMULTI1", 0x0400_0122),
    ("SIOMULTI2", 0x0400_0124),
    ("SIOMULTI3", 0x0400_0126),
    ("SIOCNT", 0x0400_0128),
    ("SIOMLT_SEND", 0x0400_012a),
    ("KEYINPUT", 0x0400_0130),
    ("KEYCNT", 0x0400_0132),
    ("RCNT", 0x0400_0134),
    ("IR", 0x0400_0136),
    ("JOYCNT", 0x0400_0140),
    ("JOY_STAT", 0x0400_0158),
    ("IE", 0x0400_0200),
    ("IF", 0x0400_0202),
    ("WAITCNT", 0x0400_0204),
    ("IME", 0x0400_0208),
];

/// 32-bit I/O registers. Several of these span pairs of 16-bit registers
/// (`FIFO_A` covers `FIF0_A_L`/`FIFO_A_H`, `SIODATA32` covers
/// `SIOMULTI0`/`SIOMULTI1`); the map builder resolves those overlaps.
pub const IOREGS_32: &[(&str, u32)] = &[
    ("BG2X", 0x0400_0028),
    ("BG2Y", 0x0400_002c),
    ("BG3X", 0x0400_0038),
    ("BG3Y", 0x0400_003c),
    ("FIFO_A", 0x0400_00a0),
    ("FIFO_B", 0x0400_00a4),
    ("DMA0SAD", 0x0400_00b0),
    ("DMA0DAD", 0x0400_00b4),
    ("DMA1SAD", 0x0400_00bc),
    ("DMA1DAD", 0x0400_00c0),
    ("DMA2SAD", 0x0400_00c8),
    ("DMA2DAD", 0x0400_00cc),
    ("DMA3SAD", 0x0400_00d4),
    ("DMA3DAD", 0x0400_00d8),
    ("SIODATA32", 0x0400_0120),
    ("JOY_RECV", 0x0400_0150),
    ("JOY_TRANS", 0x0400_0154),
];
