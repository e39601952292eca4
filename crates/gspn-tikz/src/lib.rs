//! gspn-tikz - Draw Generalized Stochastic Petri Nets with TikZ
//!
//! Reads GreatSPN `.pnpro` projects and writes a `tikzpicture` using the
//! `place`, `itransition`/`Itransition` and `ttransition`/`Ttransition` node
//! styles.
//!
//! # Quick Start
//!
//! ```rust
//! use gspn_tikz::{parse_str, render};
//!
//! let xml = r#"<project><gspn name="demo">
//!   <nodes><place name="P1" marking="2" x="10" y="20"/></nodes>
//!   <edges/>
//! </gspn></project>"#;
//!
//! let net = parse_str(xml).unwrap();
//! let tikz = render(&net).unwrap();
//! assert!(tikz.contains("\\node[place, tokens=2, label = {$P1$}] at (5, -10)(P1) {};"));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use gspn_tikz::prelude::*;
//!
//! let mut net = Gspn::new("manual");
//! net.add_place(Place::new("P1", Position::new(0.0, 0.0)));
//! net.add_transition(Transition::immediate("T1", Position::new(40.0, 0.0)));
//! net.add_arc(Arc::from_endpoints("T1", "P1", ArcKind::Input));
//!
//! let renderer = TikzRenderer::with_config(RenderConfig::default().with_scale(0.25));
//! let mut out = Vec::new();
//! renderer.render(&net, &mut out).unwrap();
//! ```

pub mod core;
pub mod plugins;

use std::path::Path;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Arc, ArcKind, Gspn, GspnError, Parser, Place, Position, RenderConfig, Renderer,
        Transition, TransitionKind,
    };
    pub use crate::plugins::{Orchestrator, PnproParser, TikzRenderer};
}

/// Parse a PNPRO document held in memory
pub fn parse_str(input: &str) -> Result<Gspn> {
    use crate::plugins::PnproParser;

    PnproParser::new().parse(input)
}

/// Parse a file, choosing the parser from its extension
pub fn parse_file(path: impl AsRef<Path>) -> anyhow::Result<Gspn> {
    plugins::Orchestrator::default().parse_file(path.as_ref())
}

/// Render a net to TikZ with the default configuration
pub fn render(net: &Gspn) -> Result<String> {
    use crate::plugins::TikzRenderer;

    TikzRenderer::new().render_to_string(net)
}

/// Convert `input` into a TikZ file at `output`, returning the parsed net
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> anyhow::Result<Gspn> {
    plugins::Orchestrator::default().convert(input.as_ref(), output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let net = parse_str(
            r#"<project><gspn name="g"><nodes>
                 <transition name="T1" x="2" y="2"/>
               </nodes><edges/></gspn></project>"#,
        )
        .unwrap();
        let output = render(&net).unwrap();
        assert!(output.contains("\t\\node[itransition, label = {$T1$}] at (1, -1)(T1) {};\n"));
    }

    #[test]
    fn test_parse_file_unsupported() {
        let err = parse_file("net.xyz").unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }
}
