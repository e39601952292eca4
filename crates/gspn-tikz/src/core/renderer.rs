//! Core renderer trait for drawing output
//!
//! A renderer reads a [`Gspn`] and writes drawing instructions to a sink. It
//! never mutates the net.

use std::io::Write;

use super::{Gspn, Result};

/// Core trait for net renderers
///
/// # Example
/// ```
/// use gspn_tikz::core::{Gspn, Renderer};
/// use gspn_tikz::plugins::tikz::TikzRenderer;
///
/// let renderer = TikzRenderer::new();
/// let mut out = Vec::new();
/// renderer.render(&Gspn::new("empty"), &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("\\begin{tikzpicture}"));
/// ```
pub trait Renderer: Send + Sync {
    /// Write the drawing for `net` to `sink`
    fn render(&self, net: &Gspn, sink: &mut dyn Write) -> Result<()>;

    /// Checks that must pass before any sink is opened for `net`
    fn prepare(&self, _net: &Gspn) -> Result<()> {
        Ok(())
    }

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the output format identifier
    fn format(&self) -> &'static str;

    /// Render into an in-memory string
    fn render_to_string(&self, net: &Gspn) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(net, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
