//! Packed colors
//!
//! Colors are composed as `0xRRGGBB` words and unpacked into the
//! [`smart_leds::RGB8`] the output driver consumes. The physical byte order on
//! the wire is the driver's business.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Pixel off
pub const OFF: Rgb = rgb_from_u32(0x00_00_00);

/// Full white, used for the leading startup pixel
pub const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);

/// Saturated marker for the forward pass of a side chase
pub const FORWARD_MARKER: Rgb = rgb_from_u32(0xFF_00_00);

/// Dim marker for the return pass of a side chase
pub const RETURN_MARKER: Rgb = rgb_from_u32(0x02_00_00);

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color back into 0xRRGGBB
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Same intensity on all three channels
pub const fn gray(value: u8) -> Rgb {
    let value = value as u32;
    rgb_from_u32((value << 16) | (value << 8) | value)
}

/// Intensity placed in the middle byte of the packed word, the rest zero
pub const fn glow(value: u8) -> Rgb {
    rgb_from_u32((value as u32) << 8)
}
