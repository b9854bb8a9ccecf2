//! Drawing through the host runtime.
//!
//! Each function builds a fresh [`Graphics::host`] handle and forwards to
//! it. The handle is zero-sized, so this costs nothing, and no state is
//! kept between calls.

use lumen_graphics::{
    Angle, Canvas, Color, Font, Image, LineStyle, Point, Size, Style, SubImage, Text, RGB,
};

use crate::graphics::Graphics;

/// Fills the whole render target with `color`.
pub fn clear_screen(color: Color) {
    Graphics::host().clear_screen(color);
}

/// Changes the RGB value shown for palette slot `color`.
pub fn set_color(color: Color, rgb: RGB) {
    Graphics::host().set_color(color, rgb);
}

pub fn draw_point(point: Point, color: Color) {
    Graphics::host().draw_point(point, color);
}

pub fn draw_line(a: Point, b: Point, style: LineStyle) {
    Graphics::host().draw_line(a, b, style);
}

pub fn draw_rect(point: Point, size: Size, style: Style) {
    Graphics::host().draw_rect(point, size, style);
}

pub fn draw_rounded_rect(point: Point, size: Size, corner: Size, style: Style) {
    Graphics::host().draw_rounded_rect(point, size, corner, style);
}

pub fn draw_circle(point: Point, diameter: i32, style: Style) {
    Graphics::host().draw_circle(point, diameter, style);
}

pub fn draw_ellipse(point: Point, size: Size, style: Style) {
    Graphics::host().draw_ellipse(point, size, style);
}

pub fn draw_triangle(a: Point, b: Point, c: Point, style: Style) {
    Graphics::host().draw_triangle(a, b, c, style);
}

pub fn draw_arc(point: Point, diameter: i32, start: Angle, sweep: Angle, style: Style) {
    Graphics::host().draw_arc(point, diameter, start, sweep, style);
}

pub fn draw_sector(point: Point, diameter: i32, start: Angle, sweep: Angle, style: Style) {
    Graphics::host().draw_sector(point, diameter, start, sweep, style);
}

pub fn draw_text<'t>(text: impl Into<Text<'t>>, font: Font<'_>, point: Point, color: Color) {
    Graphics::host().draw_text(text, font, point, color);
}

pub fn draw_image(image: Image<'_>, point: Point) {
    Graphics::host().draw_image(image, point);
}

pub fn draw_sub_image(image: SubImage<'_>, point: Point) {
    Graphics::host().draw_sub_image(image, point);
}

/// Redirects all following drawing into `canvas` until [`unset_canvas`].
pub fn set_canvas(canvas: Canvas<'_>) {
    Graphics::host().set_canvas(canvas);
}

pub fn unset_canvas() {
    Graphics::host().unset_canvas();
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    //! Off the host, every primitive logs its arguments at trace level.
    //! Capturing those records shows which primitive each free function
    //! reached and with what.

    use std::cell::RefCell;
    use std::sync::Once;

    use log::{LevelFilter, Log, Metadata, Record};

    use super::*;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if record.target().starts_with("lumen_render_host") {
                CAPTURED.with(|captured| captured.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    fn host_calls(draw: impl FnOnce()) -> Vec<String> {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger in this test binary");
            log::set_max_level(LevelFilter::Trace);
        });
        CAPTURED.with(|captured| captured.borrow_mut().clear());
        draw();
        CAPTURED.with(|captured| captured.borrow_mut().drain(..).collect())
    }

    #[test]
    fn palette_functions() {
        let calls = host_calls(|| {
            clear_screen(Color::DarkBlue);
            set_color(Color::Cyan, RGB::new(1, 2, 3));
        });
        assert_eq!(
            calls,
            ["clear_screen(color=9)", "set_color(index=12, r=1, g=2, b=3)"]
        );
    }

    #[test]
    fn point_and_line() {
        let calls = host_calls(|| {
            draw_point(Point::new(4, 5), Color::White);
            draw_line(
                Point::new(1, 2),
                Point::new(3, 4),
                LineStyle::new(Color::Orange, 6),
            );
        });
        assert_eq!(
            calls,
            [
                "draw_point(4, 5, color=13)",
                "draw_line(1, 2) -> (3, 4), color=4, width=6",
            ]
        );
    }

    #[test]
    fn closed_shapes() {
        let style = Style::new(Color::Red, Color::Black, 2);
        let calls = host_calls(|| {
            draw_rect(Point::new(10, 20), Size::new(30, 40), style);
            draw_rounded_rect(Point::new(1, 2), Size::new(3, 4), Size::new(5, 6), style);
            draw_circle(Point::new(7, 8), 9, style);
            draw_ellipse(Point::new(1, 2), Size::new(3, 4), style);
            draw_triangle(Point::new(1, 2), Point::new(3, 4), Point::new(5, 6), style);
        });
        assert_eq!(
            calls,
            [
                "draw_rect(10, 20, 30x40, fill=3, stroke=1/2)",
                "draw_rounded_rect(1, 2, 3x4, corner=5x6, fill=3, stroke=1/2)",
                "draw_circle(7, 8, d=9, fill=3, stroke=1/2)",
                "draw_ellipse(1, 2, 3x4, fill=3, stroke=1/2)",
                "draw_triangle((1, 2), (3, 4), (5, 6), fill=3, stroke=1/2)",
            ]
        );
    }

    #[test]
    fn arcs_and_sectors() {
        let style = Style::outlined(Color::Gray, 1);
        let calls = host_calls(|| {
            draw_arc(
                Point::new(1, 2),
                30,
                Angle::from_radians(0.5),
                Angle::from_radians(1.5),
                style,
            );
            draw_sector(
                Point::new(3, 4),
                40,
                Angle::from_radians(0.25),
                Angle::from_radians(2.0),
                style,
            );
        });
        assert_eq!(
            calls,
            [
                "draw_arc(1, 2, d=30, start=0.5, sweep=1.5, fill=0, stroke=15/1)",
                "draw_sector(3, 4, d=40, start=0.25, sweep=2, fill=0, stroke=15/1)",
            ]
        );
    }

    #[test]
    fn buffers_and_canvas() {
        let font = [0u8; 4];
        let sheet = [0u8; 12];
        let canvas = [0u8; 32];
        let image = Image { raw: &sheet };
        let calls = host_calls(|| {
            draw_text(b"\xff\x80", Font { raw: &font }, Point::new(1, 2), Color::Red);
            draw_image(image, Point::new(3, 4));
            draw_sub_image(
                image.sub(Point::new(5, 6), Size::new(7, 8)),
                Point::new(9, 10),
            );
            set_canvas(Canvas { raw: &canvas });
            unset_canvas();
        });
        assert_eq!(
            calls,
            [
                "draw_text(2 bytes, font 4 bytes, at 1, 2, color=3)",
                "draw_image(12 bytes, at 3, 4)",
                "draw_sub_image(12 bytes, at 9, 10, region 5, 6, 7x8)",
                "set_canvas(32 bytes)",
                "unset_canvas()",
            ]
        );
    }
}
