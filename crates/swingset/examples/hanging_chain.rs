//! Hanging chain — catenary fit quality across slack ratios.

use swingset::{swingset_catenary, swingset_math, Vec2};

fn main() {
    let a1 = Vec2::new(100.0, 300.0);
    let a2 = Vec2::new(500.0, 300.0);
    let dist = (a2 - a1).norm();

    println!("Catenary Solver");
    println!("===============");
    println!("Anchors: ({}, {}) -> ({}, {})", a1.x, a1.y, a2.x, a2.y);
    println!("Straight-line distance: {dist:.1}\n");

    println!("chain_len   arc_len    arc_err%   mid_sag");
    println!("------------------------------------------");
    for chain_length in [401.0, 420.0, 480.0, 550.0, 700.0, 900.0] {
        let pts = swingset_catenary::solve(&a1, &a2, chain_length);
        let arc = swingset_math::polyline_length(&pts);
        let err = 100.0 * (arc - chain_length).abs() / chain_length;
        let sag = pts[pts.len() / 2].y - a1.y;
        println!("{chain_length:8.1}   {arc:8.2}   {err:7.3}   {sag:7.1}");
    }

    // Uneven anchors exercise the fixed-point path.
    let a3 = Vec2::new(400.0, 420.0);
    println!("\nAsymmetric anchors ({}, {}) -> ({}, {}):", a1.x, a1.y, a3.x, a3.y);
    let pts = swingset_catenary::solve(&a1, &a3, 450.0);
    let arc = swingset_math::polyline_length(&pts);
    let end = pts[pts.len() - 1];
    println!("  arc length {arc:.2} (target 450), far endpoint y {:.1} (target {})", end.y, a3.y);

    // Tension annotation along the lowest and steepest segments.
    println!("\nSegment tension (mass 2.0, gravity 9.81):");
    let pts = swingset_catenary::solve(&a1, &a2, 600.0);
    for idx in [0, 25, 50] {
        let t = swingset_catenary::tension_at(&pts[idx], &pts[idx + 1], 2.0, 9.81);
        println!(
            "  sample {idx:3}: angle {:+6.3} rad, magnitude {:.3}",
            t.angle, t.magnitude
        );
    }
}
