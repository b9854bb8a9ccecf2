//! [`Bindings`] implementation backed by the host runtime.
//!
//! On wasm targets every primitive is an import from the host module
//! `graphics`, and buffers cross the boundary as `(ptr, len)` pairs. On
//! other targets there is no host to call; the primitives only log.

use lumen_render_common::Bindings;

#[cfg(not(target_family = "wasm"))]
#[path = "native.rs"]
mod ffi;
#[cfg(target_family = "wasm")]
#[path = "wasm.rs"]
mod ffi;

/// The host runtime's drawing primitives.
///
/// This type holds no state. The current render target and the palette
/// live in the host; creating any number of `HostBindings` is free.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostBindings;

impl HostBindings {
    pub const fn new() -> Self {
        Self
    }
}

// SAFETY (all blocks below): the imports take plain integers, and every
// buffer is a live slice that outlives the call. The host does not retain
// pointers after returning.
#[allow(clippy::too_many_arguments)]
impl Bindings for HostBindings {
    fn clear_screen(&mut self, color: i32) {
        unsafe { ffi::clear_screen(color) }
    }

    fn set_color(&mut self, index: i32, r: i32, g: i32, b: i32) {
        unsafe { ffi::set_color(index, r, g, b) }
    }

    fn draw_point(&mut self, x: i32, y: i32, color: i32) {
        unsafe { ffi::draw_point(x, y, color) }
    }

    fn draw_line(
        &mut self,
        p1_x: i32,
        p1_y: i32,
        p2_x: i32,
        p2_y: i32,
        color: i32,
        stroke_width: i32,
    ) {
        unsafe { ffi::draw_line(p1_x, p1_y, p2_x, p2_y, color, stroke_width) }
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe { ffi::draw_rect(x, y, width, height, fill_color, stroke_color, stroke_width) }
    }

    fn draw_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        corner_width: i32,
        corner_height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe {
            ffi::draw_rounded_rect(
                x,
                y,
                width,
                height,
                corner_width,
                corner_height,
                fill_color,
                stroke_color,
                stroke_width,
            )
        }
    }

    fn draw_circle(
        &mut self,
        x: i32,
        y: i32,
        diameter: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe { ffi::draw_circle(x, y, diameter, fill_color, stroke_color, stroke_width) }
    }

    fn draw_ellipse(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe { ffi::draw_ellipse(x, y, width, height, fill_color, stroke_color, stroke_width) }
    }

    fn draw_triangle(
        &mut self,
        p1_x: i32,
        p1_y: i32,
        p2_x: i32,
        p2_y: i32,
        p3_x: i32,
        p3_y: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe {
            ffi::draw_triangle(
                p1_x,
                p1_y,
                p2_x,
                p2_y,
                p3_x,
                p3_y,
                fill_color,
                stroke_color,
                stroke_width,
            )
        }
    }

    fn draw_arc(
        &mut self,
        x: i32,
        y: i32,
        diameter: i32,
        start: f32,
        sweep: f32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe {
            ffi::draw_arc(
                x,
                y,
                diameter,
                start,
                sweep,
                fill_color,
                stroke_color,
                stroke_width,
            )
        }
    }

    fn draw_sector(
        &mut self,
        x: i32,
        y: i32,
        diameter: i32,
        start: f32,
        sweep: f32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        unsafe {
            ffi::draw_sector(
                x,
                y,
                diameter,
                start,
                sweep,
                fill_color,
                stroke_color,
                stroke_width,
            )
        }
    }

    fn draw_text(&mut self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
        unsafe { ffi::draw_text(text, font, x, y, color) }
    }

    fn draw_image(&mut self, image: &[u8], x: i32, y: i32) {
        unsafe { ffi::draw_image(image, x, y) }
    }

    fn draw_sub_image(
        &mut self,
        image: &[u8],
        x: i32,
        y: i32,
        sub_x: i32,
        sub_y: i32,
        sub_width: i32,
        sub_height: i32,
    ) {
        unsafe { ffi::draw_sub_image(image, x, y, sub_x, sub_y, sub_width, sub_height) }
    }

    fn set_canvas(&mut self, canvas: &[u8]) {
        unsafe { ffi::set_canvas(canvas) }
    }

    fn unset_canvas(&mut self) {
        unsafe { ffi::unset_canvas() }
    }
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    use super::*;

    #[test]
    fn native_primitives_are_no_ops() {
        let mut host = HostBindings::new();
        let buf = [1u8, 2, 3];
        host.clear_screen(1);
        host.draw_text(b"hi", &buf, 0, 0, 1);
        host.draw_sub_image(&buf, 0, 0, 1, 1, 2, 2);
        host.set_canvas(&buf);
        host.unset_canvas();
    }
}
