//! TikZ output
//!
//! Emits a `tikzpicture` that relies on the `place`, `itransition`,
//! `Itransition`, `ttransition` and `Ttransition` node styles being defined
//! by the including document.

mod label;
mod renderer;
mod shape;

pub use label::{format_label, label_text};
pub use renderer::TikzRenderer;
pub use shape::{Orientation, TransitionShape, ROTATION_TOLERANCE};
