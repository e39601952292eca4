//! Core parser trait for exchange formats
//!
//! A parser turns one document into exactly one [`Gspn`]. Parsers are
//! dispatched on file extension, so new formats plug in without touching the
//! model.

use std::path::Path;

use super::{Gspn, Result};

/// Core trait for net parsers
///
/// # Example
/// ```
/// use gspn_tikz::core::Parser;
/// use gspn_tikz::plugins::pnpro::PnproParser;
///
/// let parser = PnproParser::new();
/// assert!(parser.can_parse(std::path::Path::new("net.PNPRO")));
/// ```
pub trait Parser: Send + Sync {
    /// Parse a complete document into a net
    fn parse(&self, input: &str) -> Result<Gspn>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// File extensions handled by this parser, lowercase and without the dot
    fn extensions(&self) -> &'static [&'static str];

    /// Check whether `path` has one of this parser's extensions
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}
