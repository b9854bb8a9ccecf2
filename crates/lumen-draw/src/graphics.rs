use lumen_graphics::{
    Angle, Canvas, Color, Font, Image, LineStyle, Point, Size, Style, SubImage, Text, RGB,
};
use lumen_render_common::Bindings;
use lumen_render_host::HostBindings;

/// Drawing operations over a binding layer.
///
/// `Graphics` adds no state of its own. In particular it does not track
/// which canvas is selected; that is the host's business.
#[derive(Debug, Default)]
pub struct Graphics<B = HostBindings> {
    bindings: B,
}

impl Graphics<HostBindings> {
    /// Draws through the host runtime.
    pub const fn host() -> Self {
        Self {
            bindings: HostBindings::new(),
        }
    }
}

impl<B: Bindings> Graphics<B> {
    pub fn new(bindings: B) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut B {
        &mut self.bindings
    }

    pub fn into_bindings(self) -> B {
        self.bindings
    }

    /// Fills the whole render target with `color`.
    pub fn clear_screen(&mut self, color: Color) {
        self.bindings.clear_screen(color.index());
    }

    /// Changes the RGB value shown for palette slot `color`.
    pub fn set_color(&mut self, color: Color, rgb: RGB) {
        self.bindings.set_color(
            color.index(),
            i32::from(rgb.r),
            i32::from(rgb.g),
            i32::from(rgb.b),
        );
    }

    pub fn draw_point(&mut self, point: Point, color: Color) {
        self.bindings.draw_point(point.x, point.y, color.index());
    }

    pub fn draw_line(&mut self, a: Point, b: Point, style: LineStyle) {
        self.bindings
            .draw_line(a.x, a.y, b.x, b.y, style.color.index(), style.width);
    }

    /// `point` is the top-left corner.
    pub fn draw_rect(&mut self, point: Point, size: Size, style: Style) {
        self.bindings.draw_rect(
            point.x,
            point.y,
            size.width,
            size.height,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    /// `corner` is the size of the rounding at each corner.
    pub fn draw_rounded_rect(&mut self, point: Point, size: Size, corner: Size, style: Style) {
        self.bindings.draw_rounded_rect(
            point.x,
            point.y,
            size.width,
            size.height,
            corner.width,
            corner.height,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    /// `point` is the top-left corner of the circle's bounding box.
    pub fn draw_circle(&mut self, point: Point, diameter: i32, style: Style) {
        self.bindings.draw_circle(
            point.x,
            point.y,
            diameter,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    pub fn draw_ellipse(&mut self, point: Point, size: Size, style: Style) {
        self.bindings.draw_ellipse(
            point.x,
            point.y,
            size.width,
            size.height,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point, style: Style) {
        self.bindings.draw_triangle(
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    /// Draws the outline of a circle segment from `start` through `sweep`.
    pub fn draw_arc(
        &mut self,
        point: Point,
        diameter: i32,
        start: Angle,
        sweep: Angle,
        style: Style,
    ) {
        self.bindings.draw_arc(
            point.x,
            point.y,
            diameter,
            start.radians,
            sweep.radians,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    /// Like [`Graphics::draw_arc`], closed through the center ("pie slice").
    pub fn draw_sector(
        &mut self,
        point: Point,
        diameter: i32,
        start: Angle,
        sweep: Angle,
        style: Style,
    ) {
        self.bindings.draw_sector(
            point.x,
            point.y,
            diameter,
            start.radians,
            sweep.radians,
            style.fill_color.index(),
            style.stroke_color.index(),
            style.stroke_width,
        );
    }

    /// `text` is any byte string the font can map; `&str` converts as UTF-8.
    pub fn draw_text<'t>(
        &mut self,
        text: impl Into<Text<'t>>,
        font: Font<'_>,
        point: Point,
        color: Color,
    ) {
        self.bindings.draw_text(
            text.into().as_bytes(),
            font.as_bytes(),
            point.x,
            point.y,
            color.index(),
        );
    }

    pub fn draw_image(&mut self, image: Image<'_>, point: Point) {
        self.bindings.draw_image(image.as_bytes(), point.x, point.y);
    }

    pub fn draw_sub_image(&mut self, image: SubImage<'_>, point: Point) {
        self.bindings.draw_sub_image(
            image.raw,
            point.x,
            point.y,
            image.point.x,
            image.point.y,
            image.size.width,
            image.size.height,
        );
    }

    /// Redirects all following drawing into `canvas`.
    pub fn set_canvas(&mut self, canvas: Canvas<'_>) {
        log::debug!("render target -> canvas ({} bytes)", canvas.as_bytes().len());
        self.bindings.set_canvas(canvas.as_bytes());
    }

    /// Sends drawing back to the screen.
    pub fn unset_canvas(&mut self) {
        log::debug!("render target -> screen");
        self.bindings.unset_canvas();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Remembers where the slices it was handed live.
    #[derive(Default)]
    struct PointerProbe {
        seen: Vec<(*const u8, usize)>,
    }

    #[allow(clippy::too_many_arguments)]
    impl Bindings for PointerProbe {
        fn clear_screen(&mut self, _: i32) {}
        fn set_color(&mut self, _: i32, _: i32, _: i32, _: i32) {}
        fn draw_point(&mut self, _: i32, _: i32, _: i32) {}
        fn draw_line(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {}
        fn draw_rect(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {}
        fn draw_rounded_rect(
            &mut self,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
        ) {
        }
        fn draw_circle(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {}
        fn draw_ellipse(&mut self, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {}
        fn draw_triangle(
            &mut self,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
            _: i32,
        ) {
        }
        fn draw_arc(&mut self, _: i32, _: i32, _: i32, _: f32, _: f32, _: i32, _: i32, _: i32) {}
        fn draw_sector(&mut self, _: i32, _: i32, _: i32, _: f32, _: f32, _: i32, _: i32, _: i32) {
        }
        fn draw_text(&mut self, text: &[u8], font: &[u8], _: i32, _: i32, _: i32) {
            self.seen.push((text.as_ptr(), text.len()));
            self.seen.push((font.as_ptr(), font.len()));
        }
        fn draw_image(&mut self, image: &[u8], _: i32, _: i32) {
            self.seen.push((image.as_ptr(), image.len()));
        }
        fn draw_sub_image(&mut self, image: &[u8], _: i32, _: i32, _: i32, _: i32, _: i32, _: i32) {
            self.seen.push((image.as_ptr(), image.len()));
        }
        fn set_canvas(&mut self, canvas: &[u8]) {
            self.seen.push((canvas.as_ptr(), canvas.len()));
        }
        fn unset_canvas(&mut self) {}
    }

    #[test]
    fn buffers_are_passed_without_copying() {
        let text = "hi";
        let font_bytes = [1u8, 2, 3];
        let image_bytes = [4u8, 5, 6, 7];
        let canvas_bytes = [0u8; 16];

        let mut graphics = Graphics::new(PointerProbe::default());
        let image = Image { raw: &image_bytes };
        graphics.draw_text(text, Font { raw: &font_bytes }, Point::ORIGIN, Color::Black);
        graphics.draw_image(image, Point::ORIGIN);
        graphics.draw_sub_image(image.sub(Point::ORIGIN, Size::new(1, 1)), Point::ORIGIN);
        graphics.set_canvas(Canvas { raw: &canvas_bytes });

        assert_eq!(
            graphics.into_bindings().seen,
            vec![
                (text.as_ptr(), 2),
                (font_bytes.as_ptr(), 3),
                (image_bytes.as_ptr(), 4),
                (image_bytes.as_ptr(), 4),
                (canvas_bytes.as_ptr(), 16),
            ]
        );
    }

    #[test]
    fn host_graphics_is_usable_without_a_host() {
        let mut graphics = Graphics::host();
        graphics.clear_screen(Color::White);
        graphics.draw_rect(Point::ORIGIN, Size::SCREEN, Style::outlined(Color::Black, 1));
        graphics.unset_canvas();
    }
}
