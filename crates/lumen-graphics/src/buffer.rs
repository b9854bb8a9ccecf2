//! Borrowed byte buffers handed to the host: files, fonts, images, canvases
//!
//! The host owns the encoding of every buffer. These wrappers only give
//! the bytes a name; they are never decoded, copied, or mutated here, and
//! the borrow ends when the drawing call returns.

use crate::geometry::{Point, Size};

/// Raw contents of a file loaded by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct File<'a> {
    pub raw: &'a [u8],
}

impl<'a> File<'a> {
    pub const fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Interprets the file as a font.
    pub const fn as_font(&self) -> Font<'a> {
        Font { raw: self.raw }
    }

    /// Interprets the file as an image.
    pub const fn as_image(&self) -> Image<'a> {
        Image { raw: self.raw }
    }

    /// Interprets the file as a render target.
    pub const fn as_canvas(&self) -> Canvas<'a> {
        Canvas { raw: self.raw }
    }
}

impl<'a> From<&'a [u8]> for File<'a> {
    fn from(raw: &'a [u8]) -> Self {
        Self { raw }
    }
}

/// A font in the host's font format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font<'a> {
    pub raw: &'a [u8],
}

impl<'a> Font<'a> {
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }
}

impl<'a> From<File<'a>> for Font<'a> {
    fn from(file: File<'a>) -> Self {
        file.as_font()
    }
}

/// An image in the host's image format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image<'a> {
    pub raw: &'a [u8],
}

impl<'a> Image<'a> {
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// A rectangular region of this image, e.g. one sprite of a sheet.
    ///
    /// The region is not checked against the image bounds.
    pub const fn sub(&self, point: Point, size: Size) -> SubImage<'a> {
        SubImage {
            point,
            size,
            raw: self.raw,
        }
    }
}

impl<'a> From<File<'a>> for Image<'a> {
    fn from(file: File<'a>) -> Self {
        file.as_image()
    }
}

/// A buffer the host can select as the current render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas<'a> {
    pub raw: &'a [u8],
}

impl<'a> Canvas<'a> {
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// A canvas is an image once drawing into it is done.
    pub const fn as_image(&self) -> Image<'a> {
        Image { raw: self.raw }
    }
}

impl<'a> From<File<'a>> for Canvas<'a> {
    fn from(file: File<'a>) -> Self {
        file.as_canvas()
    }
}

/// Text bytes in whatever encoding the font expects.
///
/// Not required to be UTF-8: single-byte glyph codes above 0x7F are
/// forwarded as they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text<'a> {
    pub raw: &'a [u8],
}

impl<'a> Text<'a> {
    pub const fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(text: &'a str) -> Self {
        Self {
            raw: text.as_bytes(),
        }
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    fn from(raw: &'a [u8]) -> Self {
        Self { raw }
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Text<'a> {
    fn from(raw: &'a [u8; N]) -> Self {
        Self { raw }
    }
}

impl<'a> From<File<'a>> for Text<'a> {
    fn from(file: File<'a>) -> Self {
        Self { raw: file.raw }
    }
}

/// A region of an [`Image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubImage<'a> {
    pub point: Point,
    pub size: Size,
    pub raw: &'a [u8],
}
