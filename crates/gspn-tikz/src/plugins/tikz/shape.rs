//! Transition shape selection

use std::fmt;

use crate::core::{Transition, TransitionKind};

/// Degrees within which an angle snaps to an axis
pub const ROTATION_TOLERANCE: f64 = 5.0;

/// Rotation bucket of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Rotated,
}

impl Orientation {
    /// Classify a normalized rotation angle in degrees
    pub fn classify(degrees: f64) -> Self {
        let near = |target: f64| (degrees - target).abs() <= ROTATION_TOLERANCE;
        if near(0.0) || near(180.0) || near(360.0) {
            Orientation::Horizontal
        } else if near(90.0) || near(270.0) {
            Orientation::Vertical
        } else {
            Orientation::Rotated
        }
    }
}

/// Node style used for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionShape {
    /// Immediate, horizontal or rotated
    Thin,
    /// Immediate, vertical
    ThinVertical,
    /// Timed, horizontal or rotated
    Thick,
    /// Timed, vertical
    ThickVertical,
}

impl TransitionShape {
    pub fn select(kind: &TransitionKind, orientation: Orientation) -> Self {
        let vertical = orientation == Orientation::Vertical;
        match kind {
            TransitionKind::Immediate if vertical => TransitionShape::ThinVertical,
            TransitionKind::Immediate => TransitionShape::Thin,
            TransitionKind::Timed { .. } if vertical => TransitionShape::ThickVertical,
            TransitionKind::Timed { .. } => TransitionShape::Thick,
        }
    }

    pub fn for_transition(transition: &Transition) -> (Self, Orientation) {
        let orientation = Orientation::classify(transition.rotation);
        (Self::select(&transition.kind, orientation), orientation)
    }

    /// TikZ style name
    pub fn style(self) -> &'static str {
        match self {
            TransitionShape::Thin => "itransition",
            TransitionShape::ThinVertical => "Itransition",
            TransitionShape::Thick => "ttransition",
            TransitionShape::ThickVertical => "Ttransition",
        }
    }
}

impl fmt::Display for TransitionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_bucket() {
        for angle in [0.0, 180.0, 360.0, 358.0, 2.0, 5.0, 175.0] {
            assert_eq!(Orientation::classify(angle), Orientation::Horizontal, "{angle}");
        }
    }

    #[test]
    fn test_vertical_bucket() {
        for angle in [90.0, 270.0, 92.0, 85.0, 275.0] {
            assert_eq!(Orientation::classify(angle), Orientation::Vertical, "{angle}");
        }
    }

    #[test]
    fn test_rotated_bucket() {
        for angle in [45.0, 135.0, 5.5, 84.9, 315.0] {
            assert_eq!(Orientation::classify(angle), Orientation::Rotated, "{angle}");
        }
    }

    #[test]
    fn test_four_distinct_styles() {
        let timed = TransitionKind::timed("1", "1");
        let imm = TransitionKind::Immediate;
        assert_eq!(TransitionShape::select(&imm, Orientation::Horizontal).style(), "itransition");
        assert_eq!(TransitionShape::select(&imm, Orientation::Rotated).style(), "itransition");
        assert_eq!(TransitionShape::select(&imm, Orientation::Vertical).style(), "Itransition");
        assert_eq!(TransitionShape::select(&timed, Orientation::Horizontal).style(), "ttransition");
        assert_eq!(TransitionShape::select(&timed, Orientation::Rotated).style(), "ttransition");
        assert_eq!(TransitionShape::select(&timed, Orientation::Vertical).style(), "Ttransition");
    }
}
