//! Palette colors and RGB values

use std::fmt;

/// A color value used to redefine a palette slot.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGB {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Default palette entries
    pub const BLACK: RGB = RGB::new(0x1a, 0x1c, 0x2c);
    pub const PURPLE: RGB = RGB::new(0x5d, 0x27, 0x5d);
    pub const RED: RGB = RGB::new(0xb1, 0x3e, 0x53);
    pub const ORANGE: RGB = RGB::new(0xef, 0x7d, 0x57);
    pub const YELLOW: RGB = RGB::new(0xff, 0xcd, 0x75);
    pub const LIGHT_GREEN: RGB = RGB::new(0xa7, 0xf0, 0x70);
    pub const GREEN: RGB = RGB::new(0x38, 0xb7, 0x64);
    pub const DARK_GREEN: RGB = RGB::new(0x25, 0x71, 0x79);
    pub const DARK_BLUE: RGB = RGB::new(0x29, 0x36, 0x6f);
    pub const BLUE: RGB = RGB::new(0x3b, 0x5d, 0xc9);
    pub const LIGHT_BLUE: RGB = RGB::new(0x41, 0xa6, 0xf6);
    pub const CYAN: RGB = RGB::new(0x73, 0xef, 0xf7);
    pub const WHITE: RGB = RGB::new(0xf4, 0xf4, 0xf4);
    pub const LIGHT_GRAY: RGB = RGB::new(0x94, 0xb0, 0xc2);
    pub const GRAY: RGB = RGB::new(0x56, 0x6c, 0x86);
    pub const DARK_GRAY: RGB = RGB::new(0x33, 0x3c, 0x57);
}

/// An index into the host's 17-slot palette.
///
/// `None` means "do not draw": a style with `fill_color: Color::None`
/// produces an outline only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    None = 0,
    Black = 1,
    Purple = 2,
    Red = 3,
    Orange = 4,
    Yellow = 5,
    LightGreen = 6,
    Green = 7,
    DarkGreen = 8,
    DarkBlue = 9,
    Blue = 10,
    LightBlue = 11,
    Cyan = 12,
    White = 13,
    LightGray = 14,
    Gray = 15,
    DarkGray = 16,
}

impl Color {
    /// Every palette slot in index order.
    pub const ALL: [Color; 17] = [
        Color::None,
        Color::Black,
        Color::Purple,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::LightGreen,
        Color::Green,
        Color::DarkGreen,
        Color::DarkBlue,
        Color::Blue,
        Color::LightBlue,
        Color::Cyan,
        Color::White,
        Color::LightGray,
        Color::Gray,
        Color::DarkGray,
    ];

    /// The integer passed to the host for this slot.
    pub const fn index(self) -> i32 {
        self as i32
    }
}

impl From<Color> for i32 {
    fn from(color: Color) -> Self {
        color.index()
    }
}

impl TryFrom<u8> for Color {
    type Error = ColorIndexError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ColorIndexError {
                index: i32::from(index),
            })
    }
}

impl TryFrom<i32> for Color {
    type Error = ColorIndexError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(|index| Color::try_from(index).ok())
            .ok_or(ColorIndexError { index })
    }
}

/// Returned when an integer does not name one of the 17 palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorIndexError {
    pub index: i32,
}

impl fmt::Display for ColorIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "palette index {} out of range; expected 0..={}",
            self.index,
            Color::ALL.len() - 1
        )
    }
}

impl std::error::Error for ColorIndexError {}
