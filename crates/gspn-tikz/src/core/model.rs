//! In-memory GSPN model
//!
//! Places, transitions and arcs as read from an exchange document. Arcs refer
//! to their endpoints by name; nothing here checks that those names resolve
//! (see [`crate::core::validate`]).

use std::fmt;

/// A point in the source document's coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// True when both components are non-zero
    pub fn is_diagonal(&self) -> bool {
        self.x != 0.0 && self.y != 0.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Passive node holding tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub tokens: u32,
    pub position: Position,
    pub label_shift: Position,
}

impl Place {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            tokens: 0,
            position,
            label_shift: Position::default(),
        }
    }

    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_label_shift(mut self, shift: Position) -> Self {
        self.label_shift = shift;
        self
    }
}

/// Firing semantics of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fires in zero time
    Immediate,
    /// Exponentially distributed delay. Both fields are kept exactly as
    /// written in the source document.
    Timed { delay: String, servers: String },
}

impl TransitionKind {
    pub fn timed(delay: impl Into<String>, servers: impl Into<String>) -> Self {
        Self::Timed {
            delay: delay.into(),
            servers: servers.into(),
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, Self::Timed { .. })
    }
}

/// Active node of the net
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub name: String,
    pub kind: TransitionKind,
    pub position: Position,
    /// Normalized rotation in degrees, `360 - degrees(raw)`; `0` when the
    /// document gives no rotation.
    pub rotation: f64,
    /// Raw rotation in radians as given by the document
    pub source_rotation: Option<f64>,
    pub label_shift: Position,
}

impl Transition {
    /// Build a transition, normalizing `rotation` (radians) into degrees.
    pub fn new(
        name: impl Into<String>,
        kind: TransitionKind,
        position: Position,
        rotation: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            rotation: rotation.map_or(0.0, |theta| 360.0 - theta.to_degrees()),
            source_rotation: rotation,
            label_shift: Position::default(),
        }
    }

    pub fn immediate(name: impl Into<String>, position: Position) -> Self {
        Self::new(name, TransitionKind::Immediate, position, None)
    }

    pub fn with_label_shift(mut self, shift: Position) -> Self {
        self.label_shift = shift;
        self
    }
}

/// How an arc connects a place and a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcKind {
    Input,
    Output,
    Inhibitor,
}

impl ArcKind {
    pub const ALL: [ArcKind; 3] = [ArcKind::Input, ArcKind::Output, ArcKind::Inhibitor];

    /// Keyword used by the exchange format
    pub fn keyword(self) -> &'static str {
        match self {
            ArcKind::Input => "INPUT",
            ArcKind::Output => "OUTPUT",
            ArcKind::Inhibitor => "INHIBITOR",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

impl fmt::Display for ArcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Directed connection between two named nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    pub source: String,
    pub target: String,
    pub kind: ArcKind,
}

impl Arc {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: ArcKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// Build an arc from the exchange format's `head`/`tail` pair.
    ///
    /// Output arcs are stored with their endpoints swapped so that the
    /// transition is always the source; input and inhibitor arcs keep
    /// `source = head`, `target = tail`.
    pub fn from_endpoints(head: impl Into<String>, tail: impl Into<String>, kind: ArcKind) -> Self {
        match kind {
            ArcKind::Input | ArcKind::Inhibitor => Self::new(head, tail, kind),
            ArcKind::Output => Self::new(tail, head, kind),
        }
    }
}

/// A complete net, with nodes and arcs in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gspn {
    pub name: String,
    pub places: Vec<Place>,
    pub transitions: Vec<Transition>,
    pub arcs: Vec<Arc>,
}

impl Gspn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_place(&mut self, place: Place) {
        self.places.push(place);
    }

    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn add_arc(&mut self, arc: Arc) {
        self.arcs.push(arc);
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn get_place(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    pub fn get_transition(&self, name: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.name == name)
    }

    /// Place names followed by transition names, in emission order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.places
            .iter()
            .map(|p| p.name.as_str())
            .chain(self.transitions.iter().map(|t| t.name.as_str()))
    }
}

impl fmt::Display for Gspn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GSPN '{}' with {} places, {} transitions and {} arcs",
            self.name,
            self.place_count(),
            self.transition_count(),
            self.arc_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_scale() {
        let p = Position::new(10.0, -4.0).scale(0.5);
        assert_eq!(p, Position::new(5.0, -2.0));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(1.5, 2.0).to_string(), "(1.5, 2)");
    }

    #[test]
    fn test_transition_without_rotation() {
        let t = Transition::immediate("T1", Position::default());
        assert_eq!(t.rotation, 0.0);
        assert!(t.source_rotation.is_none());
    }

    #[test]
    fn test_transition_rotation_normalized() {
        let t = Transition::new(
            "T1",
            TransitionKind::Immediate,
            Position::default(),
            Some(std::f64::consts::FRAC_PI_2),
        );
        assert!((t.rotation - 270.0).abs() < 1e-9);
        assert_eq!(t.source_rotation, Some(std::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn test_zero_rotation_is_distinct_from_absent() {
        let t = Transition::new("T1", TransitionKind::Immediate, Position::default(), Some(0.0));
        assert_eq!(t.rotation, 360.0);
        assert_eq!(t.source_rotation, Some(0.0));
    }

    #[test]
    fn test_arc_orientation() {
        let input = Arc::from_endpoints("h", "t", ArcKind::Input);
        assert_eq!((input.source.as_str(), input.target.as_str()), ("h", "t"));

        let inhibitor = Arc::from_endpoints("h", "t", ArcKind::Inhibitor);
        assert_eq!((inhibitor.source.as_str(), inhibitor.target.as_str()), ("h", "t"));

        let output = Arc::from_endpoints("h", "t", ArcKind::Output);
        assert_eq!((output.source.as_str(), output.target.as_str()), ("t", "h"));
    }

    #[test]
    fn test_arc_kind_keywords() {
        for kind in ArcKind::ALL {
            assert_eq!(ArcKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(ArcKind::from_keyword("input"), None);
        assert_eq!(ArcKind::from_keyword("RESET"), None);
    }

    #[test]
    fn test_summary() {
        let mut net = Gspn::new("mutex");
        net.add_place(Place::new("P1", Position::default()));
        net.add_transition(Transition::immediate("T1", Position::default()));
        net.add_arc(Arc::new("P1", "T1", ArcKind::Input));
        assert_eq!(
            net.to_string(),
            "GSPN 'mutex' with 1 places, 1 transitions and 1 arcs"
        );
    }

    #[test]
    fn test_node_names_order() {
        let mut net = Gspn::new("n");
        net.add_transition(Transition::immediate("T1", Position::default()));
        net.add_place(Place::new("P2", Position::default()));
        net.add_place(Place::new("P1", Position::default()));
        let names: Vec<_> = net.node_names().collect();
        assert_eq!(names, vec!["P2", "P1", "T1"]);
    }

    #[test]
    fn test_lookup() {
        let mut net = Gspn::new("n");
        net.add_place(Place::new("P1", Position::new(1.0, 2.0)).with_tokens(3));
        assert_eq!(net.get_place("P1").map(|p| p.tokens), Some(3));
        assert!(net.get_place("T1").is_none());
        assert!(net.get_transition("P1").is_none());
    }
}
