//! Imports provided by the host runtime.
//!
//! Buffers cross the boundary as `(ptr, len)` pairs in linear memory.
#![allow(clippy::too_many_arguments)]

pub(crate) use imports::{
    clear_screen, draw_arc, draw_circle, draw_ellipse, draw_line, draw_point, draw_rect,
    draw_rounded_rect, draw_sector, draw_triangle, set_color, unset_canvas,
};

/// Pointers are 32 bits wide in wasm32 linear memory.
fn raw_parts(buf: &[u8]) -> (u32, u32) {
    (buf.as_ptr() as u32, buf.len() as u32)
}

pub(crate) unsafe fn draw_text(text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
    let (text_ptr, text_len) = raw_parts(text);
    let (font_ptr, font_len) = raw_parts(font);
    imports::draw_text(text_ptr, text_len, font_ptr, font_len, x, y, color)
}

pub(crate) unsafe fn draw_image(image: &[u8], x: i32, y: i32) {
    let (ptr, len) = raw_parts(image);
    imports::draw_image(ptr, len, x, y)
}

pub(crate) unsafe fn draw_sub_image(
    image: &[u8],
    x: i32,
    y: i32,
    sub_x: i32,
    sub_y: i32,
    sub_width: i32,
    sub_height: i32,
) {
    let (ptr, len) = raw_parts(image);
    imports::draw_sub_image(ptr, len, x, y, sub_x, sub_y, sub_width, sub_height)
}

pub(crate) unsafe fn set_canvas(canvas: &[u8]) {
    let (ptr, len) = raw_parts(canvas);
    imports::set_canvas(ptr, len)
}

mod imports {
    #[link(wasm_import_module = "graphics")]
    extern "C" {
        pub(crate) fn clear_screen(color: i32);
        pub(crate) fn set_color(index: i32, r: i32, g: i32, b: i32);
        pub(crate) fn draw_point(x: i32, y: i32, color: i32);
        pub(crate) fn draw_line(
            p1_x: i32,
            p1_y: i32,
            p2_x: i32,
            p2_y: i32,
            color: i32,
            stroke_width: i32,
        );
        pub(crate) fn draw_rect(
            x: i32,
            y: i32,
            width: i32,
            height: i32,
            fill_color: i32,
            stroke_color: i32,
            stroke_width: i32,
        );
        pub(crate) fn draw_rounded_rect(
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
        pub(crate) fn draw_circle(
            x: i32,
            y: i32,
            diameter: i32,
            fill_color: i32,
            stroke_color: i32,
            stroke_width: i32,
        );
        pub(crate) fn draw_ellipse(
            x: i32,
            y: i32,
            width: i32,
            height: i32,
            fill_color: i32,
            stroke_color: i32,
            stroke_width: i32,
        );
        pub(crate) fn draw_triangle(
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
        pub(crate) fn draw_arc(
            x: i32,
            y: i32,
            diameter: i32,
            start: f32,
            sweep: f32,
            fill_color: i32,
            stroke_color: i32,
            stroke_width: i32,
        );
        pub(crate) fn draw_sector(
            x: i32,
            y: i32,
            diameter: i32,
            start: f32,
            sweep: f32,
            fill_color: i32,
            stroke_color: i32,
            stroke_width: i32,
        );
        pub(crate) fn draw_text(
            text_ptr: u32,
            text_len: u32,
            font_ptr: u32,
            font_len: u32,
            x: i32,
            y: i32,
            color: i32,
        );
        pub(crate) fn draw_image(ptr: u32, len: u32, x: i32, y: i32);
        pub(crate) fn draw_sub_image(
            ptr: u32,
            len: u32,
            x: i32,
            y: i32,
            sub_x: i32,
            sub_y: i32,
            sub_width: i32,
            sub_height: i32,
        );
        pub(crate) fn set_canvas(ptr: u32, len: u32);
        pub(crate) fn unset_canvas();
    }
}
