//! Typed drawing facade for the Lumen display.
//!
//! Every operation takes value types from `lumen-graphics`, breaks them
//! down into integers, floats, and byte slices, and makes exactly one
//! call on a [`Bindings`] implementation. Nothing is validated and
//! nothing is returned; the host runtime owns the framebuffer, the
//! palette, and the current render target.
//!
//! The free functions in this crate draw through the host runtime.
//! [`Graphics`] does the same against any binding, which is how the
//! facade is tested.

mod graphics;
mod host;

pub use graphics::Graphics;
pub use host::*;
pub use lumen_graphics::*;
pub use lumen_render_common::Bindings;
pub use lumen_render_host::HostBindings;

pub mod prelude {
    pub use crate::graphics::Graphics;
    pub use crate::host::*;
    pub use lumen_graphics::prelude::*;
}
