//! Arc endpoint resolution
//!
//! Arcs name their endpoints instead of owning them. [`NameIndex`] maps every
//! place and transition name to its node so arcs can be checked before any
//! output is produced.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{Arc, Gspn, GspnError, Place, Result, Transition};

/// A node resolved by name
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Place(&'a Place),
    Transition(&'a Transition),
}

/// Lookup from node name to node
#[derive(Debug)]
pub struct NameIndex<'a> {
    nodes: HashMap<&'a str, NodeRef<'a>>,
}

impl<'a> NameIndex<'a> {
    /// Index all places and transitions of `net`. A later node with a
    /// duplicate name shadows the earlier one.
    pub fn build(net: &'a Gspn) -> Self {
        let mut nodes = HashMap::with_capacity(net.place_count() + net.transition_count());
        for place in &net.places {
            if nodes.insert(place.name.as_str(), NodeRef::Place(place)).is_some() {
                warn!(name = %place.name, "Duplicate node name");
            }
        }
        for transition in &net.transitions {
            if nodes
                .insert(transition.name.as_str(), NodeRef::Transition(transition))
                .is_some()
            {
                warn!(name = %transition.name, "Duplicate node name");
            }
        }
        Self { nodes }
    }

    pub fn get(&self, name: &str) -> Option<NodeRef<'a>> {
        self.nodes.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve both endpoints of `arc`
    pub fn resolve(&self, arc: &Arc) -> Result<(NodeRef<'a>, NodeRef<'a>)> {
        let lookup = |name: &str| {
            self.get(name).ok_or_else(|| GspnError::RenderIntegrity {
                source_name: arc.source.clone(),
                target_name: arc.target.clone(),
                missing: name.to_string(),
            })
        };
        Ok((lookup(&arc.source)?, lookup(&arc.target)?))
    }
}

/// Check that every arc of `net` references an existing place or transition
pub fn check_arc_references(net: &Gspn) -> Result<()> {
    let index = NameIndex::build(net);
    for arc in &net.arcs {
        index.resolve(arc)?;
    }
    debug!(arcs = net.arc_count(), nodes = index.len(), "Arc references resolved");
    Ok(())
}
