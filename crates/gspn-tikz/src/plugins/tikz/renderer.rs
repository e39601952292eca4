//! TikZ rendering implementation
//!
//! Converts a net into a `tikzpicture` block: places, a blank line,
//! transitions, a blank line, arcs. Statements follow the net's insertion
//! order so the output is stable across runs.

use std::io::Write;

use tracing::{debug, info, span, trace, Level};

use super::label::{format_label, has_shift};
use super::shape::{Orientation, TransitionShape};
use crate::core::{
    check_arc_references, Arc, ArcKind, Gspn, Place, Position, RenderConfig, Renderer, Result,
    Transition,
};

const BEGIN: &str = "\\begin{tikzpicture}[auto]";
const END: &str = "\\end{tikzpicture}";

/// Print a coordinate, folding negative zero into zero
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// TikZ renderer
#[derive(Debug, Clone, Default)]
pub struct TikzRenderer {
    config: RenderConfig,
}

impl TikzRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Scale and flip a source position into TikZ coordinates
    fn transform(&self, position: Position) -> (String, String) {
        let scaled = position.scale(self.config.scale);
        (number(scaled.x), number(-scaled.y))
    }

    fn label(&self, name: &str, shift: Position) -> Result<String> {
        let shift = has_shift(&shift).then(|| self.transform(shift));
        format_label(name, shift)
    }

    /// Statement for one place
    pub fn place_statement(&self, place: &Place) -> Result<String> {
        let mut options = String::from("place");
        if place.tokens > 0 {
            options.push_str(&format!(", tokens={}", place.tokens));
        }
        options.push_str(", ");
        options.push_str(&self.label(&place.name, place.label_shift)?);

        let (x, y) = self.transform(place.position);
        Ok(format!(
            "\t\\node[{}] at ({}, {})({}) {{}};\n",
            options, x, y, place.name
        ))
    }

    /// Statement for one transition
    pub fn transition_statement(&self, transition: &Transition) -> Result<String> {
        let (shape, orientation) = TransitionShape::for_transition(transition);
        let mut options = String::from(shape.style());
        options.push_str(", ");
        options.push_str(&self.label(&transition.name, transition.label_shift)?);
        if orientation == Orientation::Rotated {
            options.push_str(&format!(", rotate={}", transition.rotation));
        }

        let (x, y) = self.transform(transition.position);
        Ok(format!(
            "\t\\node[{}] at ({}, {})({}) {{}};\n",
            options, x, y, transition.name
        ))
    }

    /// Statement for one arc
    pub fn arc_statement(&self, arc: &Arc) -> String {
        let tip = match arc.kind {
            ArcKind::Input => "<-",
            ArcKind::Output => "->",
            ArcKind::Inhibitor => "o-",
        };
        format!("\t\\draw[{}] ({}) -- ({});\n", tip, arc.source, arc.target)
    }
}

impl Renderer for TikzRenderer {
    fn render(&self, net: &Gspn, sink: &mut dyn Write) -> Result<()> {
        let render_span = span!(
            Level::INFO,
            "render_tikz",
            net = %net.name,
            scale = self.config.scale
        );
        let _enter = render_span.enter();

        self.prepare(net)?;

        writeln!(sink, "{}", BEGIN)?;

        for place in &net.places {
            trace!(name = %place.name, "Rendering place");
            sink.write_all(self.place_statement(place)?.as_bytes())?;
        }
        writeln!(sink)?;

        for transition in &net.transitions {
            trace!(name = %transition.name, "Rendering transition");
            sink.write_all(self.transition_statement(transition)?.as_bytes())?;
        }
        writeln!(sink)?;

        for arc in &net.arcs {
            sink.write_all(self.arc_statement(arc).as_bytes())?;
        }
        debug!(arcs = net.arc_count(), "Rendered arcs");

        writeln!(sink, "{}", END)?;
        sink.flush()?;

        info!("Rendering completed");
        Ok(())
    }

    fn prepare(&self, net: &Gspn) -> Result<()> {
        if self.config.check_references {
            check_arc_references(net)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tikz"
    }

    fn format(&self) -> &'static str {
        "tex"
    }
}
