//! A fake host that records the primitives it receives.

use lumen_render_common::Bindings;

/// One primitive call, with its arguments as the host would see them.
///
/// Buffers are copied so the record can outlive the borrowed slices.
#[derive(Clone, Debug, PartialEq)]
pub enum BindingCall {
    ClearScreen {
        color: i32,
    },
    SetColor {
        index: i32,
        r: i32,
        g: i32,
        b: i32,
    },
    DrawPoint {
        x: i32,
        y: i32,
        color: i32,
    },
    DrawLine {
        p1_x: i32,
        p1_y: i32,
        p2_x: i32,
        p2_y: i32,
        color: i32,
        stroke_width: i32,
    },
    DrawRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawRoundedRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        corner_width: i32,
        corner_height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawCircle {
        x: i32,
        y: i32,
        diameter: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawEllipse {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawTriangle {
        p1_x: i32,
        p1_y: i32,
        p2_x: i32,
        p2_y: i32,
        p3_x: i32,
        p3_y: i32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawArc {
        x: i32,
        y: i32,
        diameter: i32,
        start: f32,
        sweep: f32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawSector {
        x: i32,
        y: i32,
        diameter: i32,
        start: f32,
        sweep: f32,
        fill_color: i32,
        stroke_color: i32,
        stroke_width: i32,
    },
    DrawText {
        text: Vec<u8>,
        font: Vec<u8>,
        x: i32,
        y: i32,
        color: i32,
    },
    DrawImage {
        image: Vec<u8>,
        x: i32,
        y: i32,
    },
    DrawSubImage {
        image: Vec<u8>,
        x: i32,
        y: i32,
        sub_x: i32,
        sub_y: i32,
        sub_width: i32,
        sub_height: i32,
    },
    SetCanvas {
        canvas: Vec<u8>,
    },
    UnsetCanvas,
}

impl BindingCall {
    /// The host-side name of the primitive.
    pub fn name(&self) -> &'static str {
        match self {
            BindingCall::ClearScreen { .. } => "clear_screen",
            BindingCall::SetColor { .. } => "set_color",
            BindingCall::DrawPoint { .. } => "draw_point",
            BindingCall::DrawLine { .. } => "draw_line",
            BindingCall::DrawRect { .. } => "draw_rect",
            BindingCall::DrawRoundedRect { .. } => "draw_rounded_rect",
            BindingCall::DrawCircle { .. } => "draw_circle",
            BindingCall::DrawEllipse { .. } => "draw_ellipse",
            BindingCall::DrawTriangle { .. } => "draw_triangle",
            BindingCall::DrawArc { .. } => "draw_arc",
            BindingCall::DrawSector { .. } => "draw_sector",
            BindingCall::DrawText { .. } => "draw_text",
            BindingCall::DrawImage { .. } => "draw_image",
            BindingCall::DrawSubImage { .. } => "draw_sub_image",
            BindingCall::SetCanvas { .. } => "set_canvas",
            BindingCall::UnsetCanvas => "unset_canvas",
        }
    }
}

/// [`Bindings`] that draws nothing and keeps every call in order.
#[derive(Debug, Default)]
pub struct RecordingBindings {
    calls: Vec<BindingCall>,
}

impl RecordingBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[BindingCall] {
        &self.calls
    }

    /// Removes and returns everything recorded so far.
    pub fn take_calls(&mut self) -> Vec<BindingCall> {
        std::mem::take(&mut self.calls)
    }

    /// The only recorded call. Panics unless exactly one call was made.
    pub fn single_call(&self) -> &BindingCall {
        match self.calls.as_slice() {
            [call] => call,
            calls => panic!("expected exactly one binding call, got {calls:?}"),
        }
    }

    fn record(&mut self, call: BindingCall) {
        log::debug!("recorded {}", call.name());
        self.calls.push(call);
    }
}

#[allow(clippy::too_many_arguments)]
impl Bindings for RecordingBindings {
    fn clear_screen(&mut self, color: i32) {
        self.record(BindingCall::ClearScreen { color });
    }

    fn set_color(&mut self, index: i32, r: i32, g: i32, b: i32) {
        self.record(BindingCall::SetColor { index, r, g, b });
    }

    fn draw_point(&mut self, x: i32, y: i32, color: i32) {
        self.record(BindingCall::DrawPoint { x, y, color });
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
        self.record(BindingCall::DrawLine {
            p1_x,
            p1_y,
            p2_x,
            p2_y,
            color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawRect {
            x,
            y,
            width,
            height,
            fill_color,
            stroke_color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawRoundedRect {
            x,
            y,
            width,
            height,
            corner_width,
            corner_height,
            fill_color,
            stroke_color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawCircle {
            x,
            y,
            diameter,
            fill_color,
            stroke_color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawEllipse {
            x,
            y,
            width,
            height,
            fill_color,
            stroke_color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawTriangle {
            p1_x,
            p1_y,
            p2_x,
            p2_y,
            p3_x,
            p3_y,
            fill_color,
            stroke_color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawArc {
            x,
            y,
            diameter,
            start,
            sweep,
            fill_color,
            stroke_color,
            stroke_width,
        });
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
        self.record(BindingCall::DrawSector {
            x,
            y,
            diameter,
            start,
            sweep,
            fill_color,
            stroke_color,
            stroke_width,
        });
    }

    fn draw_text(&mut self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
        self.record(BindingCall::DrawText {
            text: text.to_vec(),
            font: font.to_vec(),
            x,
            y,
            color,
        });
    }

    fn draw_image(&mut self, image: &[u8], x: i32, y: i32) {
        self.record(BindingCall::DrawImage {
            image: image.to_vec(),
            x,
            y,
        });
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
        self.record(BindingCall::DrawSubImage {
            image: image.to_vec(),
            x,
            y,
            sub_x,
            sub_y,
            sub_width,
            sub_height,
        });
    }

    fn set_canvas(&mut self, canvas: &[u8]) {
        self.record(BindingCall::SetCanvas {
            canvas: canvas.to_vec(),
        });
    }

    fn unset_canvas(&mut self) {
        self.record(BindingCall::UnsetCanvas);
    }
}
