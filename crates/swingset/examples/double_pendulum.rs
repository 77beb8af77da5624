//! Double pendulum — energy conservation and chaotic divergence.

use swingset::{swingset_pendulum, PendulumParams, PendulumState};

fn main() {
    let params = PendulumParams {
        l1: 150.0,
        l2: 150.0,
        m1: 10.0,
        m2: 10.0,
        g: 981.0,
        damping: 0.0,
    };

    let mut state = PendulumState::at_rest(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_4);
    let e0 = swingset_pendulum::energy(&state, &params).total;

    println!("Double Pendulum Simulation");
    println!("==========================");
    println!(
        "Initial angles: [{:.3}, {:.3}] rad",
        state.theta1, state.theta2
    );
    println!("Initial energy: {e0:.4}\n");

    let dt = 0.001;
    let total_steps = 10_000; // 10 seconds
    let mut max_drift: f64 = 0.0;

    println!("time(s)    th1(rad)   th2(rad)   energy        drift");
    println!("------------------------------------------------------");

    for step in 0..total_steps {
        state = swingset_pendulum::step(&state, &params, dt);

        let e = swingset_pendulum::energy(&state, &params).total;
        let drift = ((e - e0) / e0).abs();
        max_drift = max_drift.max(drift);

        if step % 1000 == 0 {
            println!(
                "{:8.3}   {:+7.4}    {:+7.4}    {:12.4}  {:.2e}",
                step as f64 * dt,
                state.theta1,
                state.theta2,
                e,
                drift
            );
        }
    }

    println!("\n-- Energy Conservation --");
    println!("Max drift over 10 s: {max_drift:.2e}");
    if max_drift < 0.01 {
        println!("PASS: Energy conserved within 1%");
    } else {
        println!("FAIL: Energy drift exceeds 1%!");
    }

    // ── Chaotic Divergence ──
    println!("\n-- Chaotic Divergence --");
    let theta = std::f64::consts::PI * 0.9;
    let base = PendulumState::at_rest(theta, theta);
    let mut fan = swingset_pendulum::overlays(&base, 5, 0.05);

    println!("5 overlays, 0.05 deg spread, dt = 0.016");
    println!("step    spread(rad)");
    for step in 1..=500 {
        swingset_pendulum::step_ensemble(&mut fan, &params, 0.016);
        if step % 100 == 0 {
            let spread = (fan[0].theta1 - fan[4].theta1).abs()
                + (fan[0].theta2 - fan[4].theta2).abs();
            println!("{step:5}   {spread:.6}");
        }
    }

    let spread =
        (fan[0].theta1 - fan[4].theta1).abs() + (fan[0].theta2 - fan[4].theta2).abs();
    if spread > 1.0 {
        println!("PASS: Nearby trajectories separated by {spread:.2} rad");
    } else {
        println!("FAIL: Trajectories still within {spread:.4} rad");
    }
}
