//! Plugin orchestrator for the conversion pipeline
//!
//! The orchestrator picks a parser by file extension, then runs
//! Parser → Gspn → Renderer as one straight-line pass.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, span, warn, Level};

use crate::core::{Gspn, GspnError, Parser, RenderConfig, Renderer};
use crate::plugins::pnpro::PnproParser;
use crate::plugins::tikz::TikzRenderer;

/// Plugin orchestrator that coordinates the entire pipeline
pub struct Orchestrator {
    parsers: Vec<Box<dyn Parser>>,
    renderer: Box<dyn Renderer>,
}

impl Orchestrator {
    /// Create an orchestrator with no parsers and the given renderer
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            parsers: Vec::new(),
            renderer,
        }
    }

    /// Create an orchestrator with every built-in parser and a TikZ renderer
    pub fn with_default_plugins(config: RenderConfig) -> Self {
        let mut orchestrator = Self::new(Box::new(TikzRenderer::with_config(config)));
        orchestrator.register_parser(Box::new(PnproParser::new()));
        orchestrator
    }

    /// Register a parser plugin. Earlier registrations win on extension clashes.
    pub fn register_parser(&mut self, parser: Box<dyn Parser>) {
        debug!(parser = parser.name(), extensions = ?parser.extensions(), "Registered parser");
        self.parsers.push(parser);
    }

    /// Registered parsers in registration order
    pub fn parsers(&self) -> &[Box<dyn Parser>] {
        &self.parsers
    }

    /// Names of registered parsers
    pub fn parser_names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Every extension some registered parser accepts
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions().iter().copied())
            .collect()
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// Find the parser responsible for `path`
    pub fn parser_for(&self, path: &Path) -> Result<&dyn Parser, GspnError> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(path))
            .map(|p| &**p)
            .ok_or_else(|| {
                warn!(path = %path.display(), "No parser registered for file");
                GspnError::unsupported_format(path)
            })
    }

    /// Parse a file with the parser registered for its extension.
    ///
    /// Fails with [`GspnError::UnsupportedFormat`] before touching the file
    /// when no parser claims the extension.
    pub fn parse_file(&self, path: &Path) -> Result<Gspn> {
        let parse_span = span!(Level::INFO, "parse_file", path = %path.display());
        let _enter = parse_span.enter();

        let parser = self.parser_for(path)?;
        debug!(parser = parser.name(), "Selected parser");

        let content = fs::read_to_string(path)
            .map_err(GspnError::from)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
        let net = parser
            .parse(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;
        Ok(net)
    }

    /// Render `net` into `sink`
    pub fn render_to_writer(&self, net: &Gspn, sink: &mut dyn Write) -> Result<()> {
        self.renderer.render(net, sink)?;
        Ok(())
    }

    /// Render `net` into a newly created file.
    ///
    /// The renderer's checks run before the file is opened, so a rejected
    /// net leaves an existing file untouched. A failure partway through
    /// emission leaves a truncated file behind.
    pub fn render_to_path(&self, net: &Gspn, path: &Path) -> Result<()> {
        let render_span = span!(Level::INFO, "render_file", path = %path.display());
        let _enter = render_span.enter();

        self.renderer
            .prepare(net)
            .with_context(|| format!("Refusing to write '{}'", path.display()))?;

        let file = File::create(path)
            .map_err(GspnError::from)
            .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
        let mut sink = BufWriter::new(file);
        self.renderer
            .render(net, &mut sink)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        Ok(())
    }

    /// Parse `input` and write the drawing to `output`
    pub fn convert(&self, input: &Path, output: &Path) -> Result<Gspn> {
        let process_span = span!(Level::INFO, "convert", input = %input.display());
        let _enter = process_span.enter();

        info!("Starting conversion pipeline");
        let net = self.parse_file(input)?;
        debug!(
            places = net.place_count(),
            transitions = net.transition_count(),
            arcs = net.arc_count(),
            "Parsing completed"
        );
        self.render_to_path(&net, output)?;
        info!(output = %output.display(), "Pipeline completed successfully");
        Ok(net)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::with_default_plugins(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const NET: &str = r#"<project name="p"><gspn name="tiny">
        <nodes>
          <place name="P1" marking="1" x="2" y="4"/>
          <transition name="T1" type="EXP" delay="1" nservers="1" x="6" y="4"/>
        </nodes>
        <edges><arc head="T1" tail="P1" kind="INPUT"/></edges>
      </gspn></project>"#;

    #[test]
    fn test_orchestrator_default() {
        let orchestrator = Orchestrator::default();
        assert_eq!(orchestrator.parser_names(), vec!["pnpro"]);
        assert_eq!(orchestrator.supported_extensions(), vec!["pnpro"]);
        assert_eq!(orchestrator.renderer().name(), "tikz");
    }

    #[test]
    fn test_empty_orchestrator_rejects_everything() {
        let orchestrator = Orchestrator::new(Box::new(TikzRenderer::new()));
        assert!(orchestrator.parser_for(Path::new("a.pnpro")).is_err());
    }

    #[test]
    fn test_unsupported_extension_fails_before_reading() {
        let orchestrator = Orchestrator::default();
        // The file does not exist: the error must still be about the format
        let err = orchestrator
            .parse_file(Path::new("/nonexistent/net.xyz"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GspnError>(),
            Some(GspnError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let orchestrator = Orchestrator::default();
        let err = orchestrator
            .parse_file(Path::new("/nonexistent/net.pnpro"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
        assert!(matches!(
            err.downcast_ref::<GspnError>(),
            Some(GspnError::Io { .. })
        ));
    }

    #[test]
    fn test_convert_writes_tikz_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tiny.PNPRO");
        let output = dir.path().join("tiny.tex");
        fs::write(&input, NET).unwrap();

        let net = Orchestrator::default().convert(&input, &output).unwrap();
        assert_eq!(net.to_string(), "GSPN 'tiny' with 1 places, 1 transitions and 1 arcs");

        let tex = fs::read_to_string(&output).unwrap();
        assert_eq!(
            tex,
            "\\begin{tikzpicture}[auto]\n\
             \t\\node[place, tokens=1, label = {$P1$}] at (1, -2)(P1) {};\n\
             \n\
             \t\\node[ttransition, label = {$T1$}] at (3, -2)(T1) {};\n\
             \n\
             \t\\draw[<-] (T1) -- (P1);\n\
             \\end{tikzpicture}\n"
        );
    }

    #[test]
    fn test_dangling_arc_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.pnpro");
        let output = dir.path().join("broken.tex");
        fs::write(&input, NET.replace(r#"head="T1""#, r#"head="T9""#)).unwrap();
        fs::write(&output, "previous drawing").unwrap();

        let err = Orchestrator::default().convert(&input, &output).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GspnError>(),
            Some(GspnError::RenderIntegrity { .. })
        ));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous drawing");
    }

    #[test]
    fn test_dangling_arc_creates_no_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.pnpro");
        let output = dir.path().join("broken.tex");
        fs::write(&input, NET.replace(r#"tail="P1""#, r#"tail="P9""#)).unwrap();

        assert!(Orchestrator::default().convert(&input, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_parse_error_carries_context() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.pnpro");
        fs::write(&input, "<project/>").unwrap();

        let err = Orchestrator::default().parse_file(&input).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        assert!(matches!(
            err.downcast_ref::<GspnError>(),
            Some(GspnError::MalformedInput { .. })
        ));
    }
}
