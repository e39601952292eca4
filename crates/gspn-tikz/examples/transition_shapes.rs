use gspn_tikz::prelude::*;

fn main() {
    let mut net = Gspn::new("shapes");
    net.add_place(Place::new("P_1", Position::new(0.0, 0.0)).with_tokens(3));

    // One transition per style, with a rotated one thrown in
    let rotations = [None, Some(90f64.to_radians()), Some(45f64.to_radians())];
    for (i, rotation) in rotations.into_iter().enumerate() {
        let x = 20.0 * (i as f64 + 1.0);
        net.add_transition(Transition::new(
            format!("imm_{}", i),
            TransitionKind::Immediate,
            Position::new(x, 0.0),
            rotation,
        ));
        net.add_transition(Transition::new(
            format!("exp_{}", i),
            TransitionKind::timed("1.0", "1"),
            Position::new(x, 20.0),
            rotation,
        ));
        net.add_arc(Arc::from_endpoints(format!("imm_{}", i), "P_1", ArcKind::Input));
        net.add_arc(Arc::from_endpoints(format!("exp_{}", i), "P_1", ArcKind::Output));
    }

    println!("=== {} ===", net);
    match gspn_tikz::render(&net) {
        Ok(tikz) => print!("{}", tikz),
        Err(e) => eprintln!("Error: {}", e),
    }
}
