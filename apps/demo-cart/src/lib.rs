//! Demo cart for the Lumen host.
//!
//! The host calls `boot` once and `render` every frame. The scene itself
//! is written against [`Graphics`] so it can also run on a recording
//! binding.

use std::sync::atomic::{AtomicU32, Ordering};

use lumen_draw::prelude::*;
use lumen_draw::Bindings;

static FRAME: AtomicU32 = AtomicU32::new(0);

/// Palette tweaks applied at startup.
pub const PALETTE: [(Color, RGB); 2] = [
    (Color::DarkBlue, RGB::new(0x10, 0x14, 0x30)),
    (Color::Orange, RGB::new(0xff, 0x90, 0x40)),
];

pub fn boot_scene<B: Bindings>(graphics: &mut Graphics<B>) {
    for (color, rgb) in PALETTE {
        graphics.set_color(color, rgb);
    }
}

/// Draws frame number `frame`. The pie in the middle fills up over one
/// second at 60 frames per second, then starts over.
pub fn render_scene<B: Bindings>(graphics: &mut Graphics<B>, frame: u32) {
    let outline = Style::outlined(Color::White, 1);

    graphics.clear_screen(Color::DarkBlue);
    graphics.draw_rect(Point::MIN, Size::SCREEN, outline);
    graphics.draw_line(
        Point::new(0, HEIGHT / 2),
        Point::new(WIDTH - 1, HEIGHT / 2),
        LineStyle::new(Color::Gray, 1),
    );

    graphics.draw_rounded_rect(
        Point::new(8, 8),
        Size::new(64, 32),
        Size::new(6, 6),
        Style::new(Color::Purple, Color::White, 1),
    );
    graphics.draw_ellipse(
        Point::new(80, 8),
        Size::new(64, 32),
        Style::filled(Color::Green),
    );
    graphics.draw_triangle(
        Point::new(152, 40),
        Point::new(184, 8),
        Point::new(216, 40),
        Style::new(Color::Yellow, Color::Orange, 2),
    );

    let sweep = Angle::FULL_CIRCLE.radians * ((frame % 60) as f32 / 60.0);
    graphics.draw_sector(
        Point::new(96, 96),
        48,
        Angle::ZERO,
        Angle::from_radians(sweep),
        Style::filled(Color::Red),
    );
    graphics.draw_circle(Point::new(96, 96), 48, outline);
    graphics.draw_arc(
        Point::new(160, 96),
        48,
        Angle::from_degrees(-45.0),
        Angle::HALF_CIRCLE,
        Style::outlined(Color::Cyan, 2),
    );

    for i in 0..8 {
        graphics.draw_point(Point::new(8 + i * 4, HEIGHT - 8), Color::LightGreen);
    }
}

#[no_mangle]
pub extern "C" fn boot() {
    log::info!("demo cart booting");
    boot_scene(&mut Graphics::host());
}

#[no_mangle]
pub extern "C" fn render() {
    let frame = FRAME.fetch_add(1, Ordering::Relaxed);
    render_scene(&mut Graphics::host(), frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_testing::{BindingCall, RecordingBindings};

    #[test]
    fn boot_sets_palette() {
        let mut graphics = Graphics::new(RecordingBindings::new());
        boot_scene(&mut graphics);
        assert_eq!(
            graphics.bindings().calls(),
            &[
                BindingCall::SetColor {
                    index: 9,
                    r: 0x10,
                    g: 0x14,
                    b: 0x30,
                },
                BindingCall::SetColor {
                    index: 4,
                    r: 0xff,
                    g: 0x90,
                    b: 0x40,
                },
            ]
        );
    }

    #[test]
    fn frame_starts_with_clear() {
        let mut graphics = Graphics::new(RecordingBindings::new());
        render_scene(&mut graphics, 0);
        let calls = graphics.into_bindings().take_calls();
        assert_eq!(calls[0], BindingCall::ClearScreen { color: 9 });
        assert_eq!(calls.len(), 9 + 8);
    }

    #[test]
    fn sector_sweep_follows_frame() {
        let mut graphics = Graphics::new(RecordingBindings::new());
        render_scene(&mut graphics, 30);
        let sweep = graphics
            .bindings()
            .calls()
            .iter()
            .find_map(|call| match call {
                BindingCall::DrawSector { sweep, .. } => Some(*sweep),
                _ => None,
            })
            .expect("scene draws a sector");
        assert!((sweep - std::f32::consts::PI).abs() < 1e-5);
    }
}
