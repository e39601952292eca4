//! Property tests for coordinate, label and orientation rules

use gspn_tikz::plugins::tikz::{Orientation, TransitionShape, ROTATION_TOLERANCE};
use gspn_tikz::prelude::*;
use proptest::prelude::*;

fn fold(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn coordinate() -> impl Strategy<Value = f64> {
    (-4000i32..4000).prop_map(|v| f64::from(v) / 4.0)
}

proptest! {
    #[test]
    fn place_coordinates_are_halved_and_flipped(x in coordinate(), y in coordinate()) {
        let renderer = TikzRenderer::new();
        let statement = renderer
            .place_statement(&Place::new("P", Position::new(x, y)))
            .unwrap();
        let expected = format!("at ({}, {})(P)", fold(x * 0.5), fold(-(y * 0.5)));
        prop_assert!(statement.contains(&expected), "{} lacks {}", statement, expected);
    }

    #[test]
    fn label_shift_only_when_both_axes_set(x in coordinate(), y in coordinate()) {
        let renderer = TikzRenderer::new();
        let place = Place::new("P", Position::default()).with_label_shift(Position::new(x, y));
        let statement = renderer.place_statement(&place).unwrap();
        if x != 0.0 && y != 0.0 {
            let expected = format!("[xshift={}, yshift={}]", fold(x * 0.5), fold(-(y * 0.5)));
            prop_assert!(statement.contains(&expected), "{} lacks {}", statement, expected);
        } else {
            prop_assert!(!statement.contains("shift"));
        }
    }

    #[test]
    fn vertical_style_iff_vertical_bucket(degrees in 0.0f64..360.0, timed in any::<bool>()) {
        let kind = if timed {
            TransitionKind::timed("1", "1")
        } else {
            TransitionKind::Immediate
        };
        let mut transition = Transition::new("T", kind, Position::default(), None);
        transition.rotation = degrees;

        let (shape, orientation) = TransitionShape::for_transition(&transition);
        let upper = shape.style().starts_with(|c: char| c.is_ascii_uppercase());
        prop_assert_eq!(upper, orientation == Orientation::Vertical);

        let statement = TikzRenderer::new().transition_statement(&transition).unwrap();
        prop_assert_eq!(statement.contains("rotate="), orientation == Orientation::Rotated);
    }

    #[test]
    fn angles_near_vertical_axis_snap(offset in -ROTATION_TOLERANCE..ROTATION_TOLERANCE) {
        prop_assert_eq!(Orientation::classify(90.0 + offset), Orientation::Vertical);
        prop_assert_eq!(Orientation::classify(270.0 + offset), Orientation::Vertical);
        prop_assert_eq!(Orientation::classify(180.0 + offset), Orientation::Horizontal);
    }

    #[test]
    fn rotation_is_complement_of_source_degrees(radians in 0.0f64..std::f64::consts::TAU) {
        let transition =
            Transition::new("T", TransitionKind::Immediate, Position::default(), Some(radians));
        prop_assert_eq!(transition.rotation, 360.0 - radians.to_degrees());
    }
}

#[test]
fn test_rotation_buckets() {
    for angle in [0.0, 180.0, 360.0, 358.0, 2.0] {
        assert_eq!(Orientation::classify(angle), Orientation::Horizontal);
    }
    for angle in [90.0, 270.0, 92.0] {
        assert_eq!(Orientation::classify(angle), Orientation::Vertical);
    }
    for angle in [45.0, 135.0] {
        assert_eq!(Orientation::classify(angle), Orientation::Rotated);
    }
}
