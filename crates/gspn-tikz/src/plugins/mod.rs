//! Format plugins
//!
//! Input formats implement [`crate::core::Parser`], output formats implement
//! [`crate::core::Renderer`]; the [`Orchestrator`] wires them together.

pub mod orchestrator;
pub mod pnpro;
pub mod tikz;

pub use orchestrator::*;
pub use pnpro::PnproParser;
pub use tikz::TikzRenderer;
