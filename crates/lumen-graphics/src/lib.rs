//! Pure data for drawing on the Lumen display
//!
//! This crate contains geometry primitives, angles, palette colors, styles,
//! and the borrowed byte-buffer types that are passed to the host runtime.
//! Nothing here draws; see `lumen-draw` for the facade.

mod angle;
mod buffer;
mod color;
mod geometry;
pub mod screen;
mod style;

pub use angle::*;
pub use buffer::*;
pub use color::*;
pub use geometry::*;
pub use style::*;

pub mod prelude {
    pub use crate::angle::Angle;
    pub use crate::buffer::{Canvas, File, Font, Image, SubImage, Text};
    pub use crate::color::{Color, RGB};
    pub use crate::geometry::{Point, Size};
    pub use crate::screen::{HEIGHT, WIDTH};
    pub use crate::style::{LineStyle, Style};
}
