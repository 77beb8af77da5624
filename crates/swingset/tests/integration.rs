//! Integration tests across the swingset engines.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use swingset::{
    advance_phase, positions_at, substeps, swingset_catenary, swingset_pendulum, Circle,
    PendulumParams, PendulumState, ScalarTrace, TraceBuffer, Vec2, WaveParams, WaveString,
};

/// Pixel-scale pendulum used across the dynamics tests.
fn pendulum_params() -> PendulumParams {
    PendulumParams {
        l1: 150.0,
        l2: 150.0,
        m1: 10.0,
        m2: 10.0,
        g: 981.0,
        damping: 0.0,
    }
}

#[test]
fn catenary_straight_line_limit() {
    let a1 = Vec2::new(120.0, 240.0);
    let a2 = Vec2::new(520.0, 180.0);
    let dist = (a2 - a1).norm();

    // Within 0.1% of taut: the polyline is colinear with the anchors.
    let pts = swingset_catenary::solve(&a1, &a2, dist * 1.001);
    let dir = (a2 - a1).normalize();
    for p in &pts {
        let rel = p - a1;
        let off = rel - dir * rel.dot(&dir);
        assert_abs_diff_eq!(off.norm(), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn catenary_arc_length_tracks_the_chain_length() {
    let a1 = Vec2::new(100.0, 300.0);
    let a2 = Vec2::new(500.0, 300.0);
    for chain_length in [450.0, 550.0, 700.0] {
        let pts = swingset_catenary::solve(&a1, &a2, chain_length);
        let arc = swingset_math::polyline_length(&pts);
        assert_relative_eq!(arc, chain_length, max_relative = 0.03);
    }
}

#[test]
fn pendulum_energy_is_conserved_without_damping() {
    let params = pendulum_params();
    let mut state = PendulumState::at_rest(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_4);

    let e0 = swingset_pendulum::energy(&state, &params).total;
    for _ in 0..1000 {
        state = swingset_pendulum::step(&state, &params, 0.001);
    }
    let e = swingset_pendulum::energy(&state, &params).total;

    let drift = if e0.abs() > 1e-12 {
        ((e - e0) / e0).abs()
    } else {
        (e - e0).abs()
    };
    assert!(drift < 0.01, "energy drift {drift:.2e} exceeds 1%");
}

#[test]
fn pendulum_damping_bleeds_energy_monotonically() {
    let params = PendulumParams {
        damping: 50.0,
        ..pendulum_params()
    };
    let mut state = PendulumState::at_rest(2.0, 1.5);
    let mut prev = swingset_pendulum::energy(&state, &params).total;

    for _ in 0..2000 {
        state = swingset_pendulum::step(&state, &params, 0.004);
        let e = swingset_pendulum::energy(&state, &params).total;
        assert!(e <= prev + prev.abs() * 1e-9 + 1e-9, "energy rose: {prev} -> {e}");
        prev = e;
    }
}

#[test]
fn butterfly_effect_separates_nearby_trajectories() {
    let params = pendulum_params();
    let theta = std::f64::consts::PI * 0.9;

    let mut a = PendulumState::at_rest(theta, theta);
    // 0.01° perturbation in the first angle only.
    let mut b = PendulumState::at_rest(theta + swingset_math::deg_to_rad(0.01), theta);

    for _ in 0..500 {
        a = swingset_pendulum::step(&a, &params, 0.016);
        b = swingset_pendulum::step(&b, &params, 0.016);
    }

    let separation = (a.theta1 - b.theta1).abs() + (a.theta2 - b.theta2).abs();
    assert!(
        separation > 1.0,
        "trajectories only {separation:.4} rad apart after 500 steps"
    );
}

#[test]
fn overlay_fan_diverges_from_a_common_base() {
    let params = pendulum_params();
    let base = PendulumState::at_rest(std::f64::consts::PI * 0.9, std::f64::consts::PI * 0.9);
    let mut fan = swingset_pendulum::overlays(&base, 5, 1.0);

    for _ in 0..500 {
        swingset_pendulum::step_ensemble(&mut fan, &params, 0.016);
    }

    // The base trajectory and the widest-offset overlay have split apart.
    let spread = (fan[0].theta1 - fan[4].theta1).abs() + (fan[0].theta2 - fan[4].theta2).abs();
    assert!(spread > 1.0, "overlay spread only {spread:.4} rad");
}

#[test]
fn wave_endpoints_survive_a_full_interactive_session() {
    let mut string = WaveString::new(&WaveParams::default());
    let n = string.num_points;
    let mut time = 0.0;

    string.pluck(0.3, 40.0);
    for frame in 0..240 {
        // Frame-rate driving plus sub-stepped integration, as the
        // rendering loop does it.
        string.drive(1.5, time, 10.0);
        for dt in substeps(1.0 / 60.0, 4) {
            string.update(dt);
            time += dt;
        }
        if frame == 120 {
            string.pluck(0.7, -25.0);
        }

        let y = string.positions();
        assert_eq!(y[0], 0.0);
        assert_eq!(y[n - 1], 0.0);
    }
}

#[test]
fn wave_fundamental_frequency_matches_the_analytic_value() {
    let string = WaveString::new(&WaveParams {
        tension: 500.0,
        mass: 0.01,
        length: 1.0,
        ..WaveParams::default()
    });
    assert_relative_eq!(
        string.fundamental_frequency(),
        111.803_398_874_989_48,
        max_relative = 1e-12
    );
}

#[test]
fn plucked_string_spectrum_peaks_at_the_fundamental() {
    let mut string = WaveString::new(&WaveParams::default());
    string.pluck(0.5, 30.0);
    for dt in substeps(1.0 / 60.0, 4) {
        string.update(dt);
    }
    let spectrum = swingset_wave::analyze_harmonics(string.positions(), 5);
    assert!(spectrum[0] > spectrum[1]);
    assert!(spectrum[0] > spectrum[2]);
}

#[test]
fn epicycle_round_trip_and_phase_equivalence() {
    let circles = vec![
        Circle::new(Vec2::new(400.0, 300.0), 150.0, 1.0, 0.0),
        Circle::new(Vec2::new(0.0, 0.0), 75.0, -2.0, 0.5),
    ];

    let pts = positions_at(&circles, 0.0);
    assert_abs_diff_eq!(pts[0].x, 400.0);
    assert_abs_diff_eq!(pts[1].x, 550.0);
    assert_abs_diff_eq!(pts[1].y, 300.0);

    // Incremental phase accumulation agrees with absolute-time evaluation.
    let t = 1.7;
    let absolute = positions_at(&circles, t);
    let incremental = positions_at(&advance_phase(&circles, t), 0.0);
    for (a, b) in absolute.iter().zip(incremental.iter()) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
    }
}

#[test]
fn trail_and_energy_history_stay_bounded_over_a_run() {
    let params = pendulum_params();
    let mut state = PendulumState::at_rest(2.5, 2.0);
    let origin = Vec2::new(400.0, 100.0);

    let mut trail = TraceBuffer::new(64);
    let mut history = ScalarTrace::new(64);

    for _ in 0..500 {
        state = swingset_pendulum::step(&state, &params, 0.016);
        let (_, bob2) = swingset_pendulum::positions(&state, &params, &origin);
        trail.push(bob2);
        history.push(swingset_pendulum::energy(&state, &params).total);
    }

    assert_eq!(trail.len(), 64);
    assert_eq!(history.len(), 64);
    let (lo, hi) = history.range().unwrap();
    assert!(lo.is_finite() && hi.is_finite());
}
