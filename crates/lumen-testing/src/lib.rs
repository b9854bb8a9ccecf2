//! Testing utilities for Lumen

pub mod recording;

pub use recording::*;

pub mod prelude {
    pub use crate::recording::{BindingCall, RecordingBindings};
}
