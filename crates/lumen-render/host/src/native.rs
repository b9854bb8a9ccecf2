//! Stand-ins for the host imports when not running inside the host.
//!
//! Nothing is drawn. Each call is logged at trace level so a native run
//! of a cart can still be followed.
#![allow(clippy::too_many_arguments)]

use log::trace;

pub(crate) unsafe fn clear_screen(color: i32) {
    trace!("clear_screen(color={color})");
}

pub(crate) unsafe fn set_color(index: i32, r: i32, g: i32, b: i32) {
    trace!("set_color(index={index}, r={r}, g={g}, b={b})");
}

pub(crate) unsafe fn draw_point(x: i32, y: i32, color: i32) {
    trace!("draw_point({x}, {y}, color={color})");
}

pub(crate) unsafe fn draw_line(
    p1_x: i32,
    p1_y: i32,
    p2_x: i32,
    p2_y: i32,
    color: i32,
    stroke_width: i32,
) {
    trace!("draw_line({p1_x}, {p1_y}) -> ({p2_x}, {p2_y}), color={color}, width={stroke_width}");
}

pub(crate) unsafe fn draw_rect(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    fill_color: i32,
    stroke_color: i32,
    stroke_width: i32,
) {
    trace!(
        "draw_rect({x}, {y}, {width}x{height}, fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_rounded_rect(
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
    trace!(
        "draw_rounded_rect({x}, {y}, {width}x{height}, corner={corner_width}x{corner_height}, fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_circle(
    x: i32,
    y: i32,
    diameter: i32,
    fill_color: i32,
    stroke_color: i32,
    stroke_width: i32,
) {
    trace!(
        "draw_circle({x}, {y}, d={diameter}, fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_ellipse(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    fill_color: i32,
    stroke_color: i32,
    stroke_width: i32,
) {
    trace!(
        "draw_ellipse({x}, {y}, {width}x{height}, fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_triangle(
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
    trace!(
        "draw_triangle(({p1_x}, {p1_y}), ({p2_x}, {p2_y}), ({p3_x}, {p3_y}), fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_arc(
    x: i32,
    y: i32,
    diameter: i32,
    start: f32,
    sweep: f32,
    fill_color: i32,
    stroke_color: i32,
    stroke_width: i32,
) {
    trace!(
        "draw_arc({x}, {y}, d={diameter}, start={start}, sweep={sweep}, fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_sector(
    x: i32,
    y: i32,
    diameter: i32,
    start: f32,
    sweep: f32,
    fill_color: i32,
    stroke_color: i32,
    stroke_width: i32,
) {
    trace!(
        "draw_sector({x}, {y}, d={diameter}, start={start}, sweep={sweep}, fill={fill_color}, stroke={stroke_color}/{stroke_width})"
    );
}

pub(crate) unsafe fn draw_text(text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
    trace!(
        "draw_text({} bytes, font {} bytes, at {x}, {y}, color={color})",
        text.len(),
        font.len()
    );
}

pub(crate) unsafe fn draw_image(image: &[u8], x: i32, y: i32) {
    trace!("draw_image({} bytes, at {x}, {y})", image.len());
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
    trace!(
        "draw_sub_image({} bytes, at {x}, {y}, region {sub_x}, {sub_y}, {sub_width}x{sub_height})",
        image.len()
    );
}

pub(crate) unsafe fn set_canvas(canvas: &[u8]) {
    trace!("set_canvas({} bytes)", canvas.len());
}

pub(crate) unsafe fn unset_canvas() {
    trace!("unset_canvas()");
}
