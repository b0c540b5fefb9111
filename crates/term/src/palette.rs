//! Tile colors.
//!
//! Values above 2048 reuse the 2048 color.

use crate::fb::{CellStyle, Rgb};

/// Screen background behind the board.
pub const SCREEN_BG: Rgb = Rgb::hex(0x283593);

/// Board background showing between tiles.
pub const BOARD_BG: Rgb = Rgb::hex(0xBBDEFB);

/// Empty cell: a faint white wash over the board background.
pub const EMPTY_BG: Rgb = Rgb::hex(0xC2E1FB);

/// Text on 2 and 4 tiles.
pub const DARK_TEXT: Rgb = Rgb::hex(0x776E65);

/// Text on every larger tile.
pub const LIGHT_TEXT: Rgb = Rgb::hex(0xF9F6F2);

/// Headline text on the screen background.
pub const SCREEN_TEXT: Rgb = Rgb::hex(0xFFFFFF);

pub fn tile_bg(value: u32) -> Rgb {
    match value {
        2 => Rgb::hex(0xEEE4DA),
        4 => Rgb::hex(0xEDE0C8),
        8 => Rgb::hex(0xF2B179),
        16 => Rgb::hex(0xF59563),
        32 => Rgb::hex(0xF67C5F),
        64 => Rgb::hex(0xF65E3B),
        128 => Rgb::hex(0xEDCF72),
        256 => Rgb::hex(0xEDCC61),
        512 => Rgb::hex(0xEDC850),
        1024 => Rgb::hex(0xEDC53F),
        _ => Rgb::hex(0xEDC22E),
    }
}

pub fn tile_fg(value: u32) -> Rgb {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Style for a cell holding `value` (0 = empty).
pub fn tile_style(value: u32) -> CellStyle {
    if value == 0 {
        return CellStyle::new(DARK_TEXT, EMPTY_BG);
    }
    CellStyle::new(tile_fg(value), tile_bg(value)).bold()
}
