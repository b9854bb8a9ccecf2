//! Geometric primitives: Point, Size

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::screen::{HEIGHT, WIDTH};

/// A pixel coordinate. The origin is the top-left corner of the screen.
///
/// Arithmetic is plain `i32` arithmetic: overflow panics in debug builds
/// and wraps in release builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Top-left pixel of the screen.
    pub const MIN: Point = Point::ORIGIN;

    /// Bottom-right pixel of the screen.
    pub const MAX: Point = Point {
        x: WIDTH - 1,
        y: HEIGHT - 1,
    };

    /// Returns the size spanned between this point and `other`.
    pub fn offset_to(&self, other: Point) -> Size {
        Size {
            width: other.x - self.x,
            height: other.y - self.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        Point {
            x: self.x + rhs.width,
            y: self.y + rhs.height,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Width and height of a region, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// The whole framebuffer.
    pub const SCREEN: Size = Size {
        width: WIDTH,
        height: HEIGHT,
    };
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size {
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size {
            width: self.width - rhs.width,
            height: self.height - rhs.height,
        }
    }
}
