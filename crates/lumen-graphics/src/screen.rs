//! Fixed display dimensions of the host runtime

/// Width of the framebuffer in pixels.
pub const WIDTH: i32 = 240;

/// Height of the framebuffer in pixels.
pub const HEIGHT: i32 = 160;
