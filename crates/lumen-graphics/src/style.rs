//! Fill and stroke appearance for shapes and lines

use crate::color::Color;

/// Appearance of a closed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: i32,
}

impl Style {
    pub const fn new(fill_color: Color, stroke_color: Color, stroke_width: i32) -> Self {
        Self {
            fill_color,
            stroke_color,
            stroke_width,
        }
    }

    /// A shape painted with `color` and no outline.
    pub const fn filled(color: Color) -> Self {
        Self {
            fill_color: color,
            stroke_color: Color::None,
            stroke_width: 0,
        }
    }

    /// An unfilled outline `width` pixels thick.
    pub const fn outlined(color: Color, width: i32) -> Self {
        Self {
            fill_color: Color::None,
            stroke_color: color,
            stroke_width: width,
        }
    }

    pub const fn with_stroke_width(self, stroke_width: i32) -> Self {
        Self {
            stroke_width,
            ..self
        }
    }

    /// The stroke part of this style, for drawing lines.
    pub const fn as_line_style(&self) -> LineStyle {
        LineStyle {
            color: self.stroke_color,
            width: self.stroke_width,
        }
    }
}

/// Appearance of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LineStyle {
    pub color: Color,
    pub width: i32,
}

impl LineStyle {
    pub const fn new(color: Color, width: i32) -> Self {
        Self { color, width }
    }
}

impl From<Style> for LineStyle {
    fn from(style: Style) -> Self {
        style.as_line_style()
    }
}
