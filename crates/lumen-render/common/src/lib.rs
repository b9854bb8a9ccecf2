//! The drawing contract between Lumen and its host runtime.
//!
//! A [`Bindings`] implementation receives already-decomposed arguments:
//! coordinates and palette indices as `i32`, angles as `f32` radians, and
//! buffers as borrowed byte slices. Implementations must not keep any
//! slice past the call that received it.

/// Raw primitives provided by the host.
///
/// Every method is infallible from the caller's point of view. The host
/// decides what to do with out-of-range colors, off-screen coordinates,
/// or malformed buffers.
#[allow(clippy::too_many_arguments)]
pub trait Bindings {
    /// Fills the current render target with one palette color.
    fn clear_screen(&mut self, color: i32);

    /// Redefines palette slot `index`.
    fn set_color(&mut self, index: i32, r: i32, g: i32, b: i32);

    fn draw_point(&mut self, x: i32, y: i32, color: i32);

    fn draw_line(
        &mut self,
        p1_x: i32,
        p1_y: i32,
        p2_x: i32,
        p2_y: i32,
        color: i32,
        stroke_width: i32,
    );

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    );

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
    );

    /// `x` and `y` are the top-left corner of the bounding box.
    fn draw_circle(
        &mut self,
        x: i32,
        y: i32,
        diameter: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    );

    fn draw_ellipse(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    );

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
    );

    /// `start` and `sweep` are in radians.
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
    );

    /// `start` and `sweep` are in radians.
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
    );

    fn draw_text(&mut self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32);

    fn draw_image(&mut self, image: &[u8], x: i32, y: i32);

    fn draw_sub_image(
        &mut self,
        image: &[u8],
        x: i32,
        y: i32,
        sub_x: i32,
        sub_y: i32,
        sub_width: i32,
        sub_height: i32,
    );

    /// Makes `canvas` the render target for every following call.
    fn set_canvas(&mut self, canvas: &[u8]);

    /// Makes the screen the render target again.
    fn unset_canvas(&mut self);
}

#[allow(clippy::too_many_arguments)]
impl<B: Bindings + ?Sized> Bindings for &mut B {
    fn clear_screen(&mut self, color: i32) {
        (**self).clear_screen(color)
    }

    fn set_color(&mut self, index: i32, r: i32, g: i32, b: i32) {
        (**self).set_color(index, r, g, b)
    }

    fn draw_point(&mut self, x: i32, y: i32, color: i32) {
        (**self).draw_point(x, y, color)
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
        (**self).draw_line(p1_x, p1_y, p2_x, p2_y, color, stroke_width)
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
        (**self).draw_rect(x, y, width, height, fill_color, stroke_color, stroke_width)
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
        (**self).draw_rounded_rect(
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

    fn draw_circle(
        &mut self,
        x: i32,
        y: i32,
        diameter: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    ) {
        (**self).draw_circle(x, y, diameter, fill_color, stroke_color, stroke_width)
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
        (**self).draw_ellipse(x, y, width, height, fill_color, stroke_color, stroke_width)
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
        (**self).draw_triangle(
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
        (**self).draw_arc(
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
        (**self).draw_sector(
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

    fn draw_text(&mut self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
        (**self).draw_text(text, font, x, y, color)
    }

    fn draw_image(&mut self, image: &[u8], x: i32, y: i32) {
        (**self).draw_image(image, x, y)
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
        (**self).draw_sub_image(image, x, y, sub_x, sub_y, sub_width, sub_height)
    }

    fn set_canvas(&mut self, canvas: &[u8]) {
        (**self).set_canvas(canvas)
    }

    fn unset_canvas(&mut self) {
        (**self).unset_canvas()
    }
}
