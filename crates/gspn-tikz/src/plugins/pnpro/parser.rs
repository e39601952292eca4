//! PNPRO parser implementation
//!
//! Walks the XML tree with `roxmltree` and builds a [`Gspn`]. Any structural
//! violation aborts the parse; there is no partial recovery.

use roxmltree::{Document, Node};
use tracing::{debug, info, span, trace, Level};

use super::attributes::{
    child, describe, label_shift, marking, optional_float, position, required,
};
use crate::core::{Arc, ArcKind, Gspn, GspnError, Parser, Place, Result, Transition, TransitionKind};

const TIMED_TYPE: &str = "EXP";
const IMMEDIATE_TYPE: &str = "IMM";

/// Parser for GreatSPN `.pnpro` projects
#[derive(Debug, Default, Clone, Copy)]
pub struct PnproParser;

impl PnproParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_gspn(&self, root: Node<'_, '_>) -> Result<Gspn> {
        if !root.has_tag_name("project") {
            return Err(GspnError::malformed(
                root.tag_name().name(),
                "root element must be <project>",
            ));
        }

        let gspn_node = root
            .children()
            .find(|n| n.is_element())
            .filter(|n| n.has_tag_name("gspn"))
            .ok_or_else(|| {
                GspnError::malformed("project", "first child element must be <gspn>")
            })?;

        let mut net = Gspn::new(required(gspn_node, "name")?);
        debug!(net = %net.name, "Found gspn element");

        let nodes = child(gspn_node, "nodes")?;
        for node in nodes.children().filter(|n| n.has_tag_name("place")) {
            net.add_place(self.parse_place(node)?);
        }
        for node in nodes.children().filter(|n| n.has_tag_name("transition")) {
            net.add_transition(self.parse_transition(node)?);
        }
        debug!(
            places = net.place_count(),
            transitions = net.transition_count(),
            "Parsed nodes"
        );

        let edges = child(gspn_node, "edges")?;
        for edge in edges.children().filter(|n| n.is_element()) {
            net.add_arc(self.parse_arc(edge)?);
        }
        debug!(arcs = net.arc_count(), "Parsed edges");

        Ok(net)
    }

    fn parse_place(&self, node: Node<'_, '_>) -> Result<Place> {
        let name = required(node, "name")?;
        let place = Place::new(name, position(node)?)
            .with_tokens(marking(node)?)
            .with_label_shift(label_shift(node)?);
        trace!(name, tokens = place.tokens, "Parsed place");
        Ok(place)
    }

    fn parse_transition(&self, node: Node<'_, '_>) -> Result<Transition> {
        let name = required(node, "name")?;
        let position = position(node)?;
        let rotation = optional_float(node, "rotation")?;
        let shift = label_shift(node)?;

        let kind = match node.attribute("type") {
            Some(TIMED_TYPE) => TransitionKind::timed(
                required(node, "delay")?,
                required(node, "nservers")?,
            ),
            Some(IMMEDIATE_TYPE) | None => TransitionKind::Immediate,
            Some(other) => {
                return Err(GspnError::unsupported_value(
                    format!("transition type of {}", describe(node)),
                    other,
                    "EXP or IMM",
                ))
            }
        };

        trace!(name, timed = kind.is_timed(), ?rotation, "Parsed transition");
        Ok(Transition::new(name, kind, position, rotation).with_label_shift(shift))
    }

    fn parse_arc(&self, node: Node<'_, '_>) -> Result<Arc> {
        let head = required(node, "head")?;
        let tail = required(node, "tail")?;
        let keyword = required(node, "kind")?;
        let kind = ArcKind::from_keyword(keyword).ok_or_else(|| {
            GspnError::unsupported_value(
                format!("kind of arc {} -> {}", head, tail),
                keyword,
                "INPUT, OUTPUT or INHIBITOR",
            )
        })?;

        trace!(head, tail, %kind, "Parsed arc");
        Ok(Arc::from_endpoints(head, tail, kind))
    }
}

impl Parser for PnproParser {
    fn parse(&self, input: &str) -> Result<Gspn> {
        let parse_span = span!(Level::INFO, "parse_pnpro", input_len = input.len());
        let _enter = parse_span.enter();

        let document = Document::parse(input)
            .map_err(|e| GspnError::malformed("document", format!("invalid XML: {}", e)))?;
        let net = self.parse_gspn(document.root_element())?;

        info!(%net, "Parsing completed");
        Ok(net)
    }

    fn name(&self) -> &'static str {
        "pnpro"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pnpro"]
    }
}
