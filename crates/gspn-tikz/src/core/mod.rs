//! Core abstractions for net conversion
//!
//! The model, the parser and renderer traits every format plugs into, and the
//! ambient pieces (errors, configuration, logging) shared by all plugins.

mod config;
mod error;
pub mod logging;
mod model;
mod parser;
mod renderer;
pub mod validate;

pub use config::*;
pub use error::*;
pub use model::*;
pub use parser::*;
pub use renderer::*;
pub use validate::{check_arc_references, NameIndex, NodeRef};
