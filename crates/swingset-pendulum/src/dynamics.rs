//! Equations of motion and RK4 integration.

use crate::{PendulumParams, PendulumState};
use swingset_math::Vec2;

/// Denominator magnitude floor. The Lagrangian denominators stay strictly
/// positive for physical mass ratios; the floor keeps unvalidated inputs
/// from dividing by zero.
const DEN_FLOOR: f64 = 1e-9;

#[inline]
fn guard(den: f64) -> f64 {
    if den.abs() < DEN_FLOOR {
        DEN_FLOOR.copysign(den)
    } else {
        den
    }
}

/// Time derivative of the state. The returned value holds
/// (dθ1, dθ2, dω1, dω2) in the state's own fields.
fn derivatives(s: &PendulumState, p: &PendulumParams) -> PendulumState {
    let delta = s.theta2 - s.theta1;
    let (sin_d, cos_d) = delta.sin_cos();
    let m_sum = p.m1 + p.m2;

    let den1 = guard(m_sum * p.l1 - p.m2 * p.l1 * cos_d * cos_d);
    let den2 = guard((p.l2 / p.l1) * den1);

    let d_omega1 = (p.m2 * p.l1 * s.omega1 * s.omega1 * sin_d * cos_d
        + p.m2 * p.g * s.theta2.sin() * cos_d
        + p.m2 * p.l2 * s.omega2 * s.omega2 * sin_d
        - m_sum * p.g * s.theta1.sin()
        - p.damping * s.omega1)
        / den1;

    let d_omega2 = (-p.m2 * p.l2 * s.omega2 * s.omega2 * sin_d * cos_d
        + m_sum * p.g * s.theta1.sin() * cos_d
        - m_sum * p.l1 * s.omega1 * s.omega1 * sin_d
        - m_sum * p.g * s.theta2.sin()
        - p.damping * s.omega2)
        / den2;

    PendulumState {
        theta1: s.omega1,
        theta2: s.omega2,
        omega1: d_omega1,
        omega2: d_omega2,
    }
}

#[inline]
fn advanced(s: &PendulumState, k: &PendulumState, dt: f64) -> PendulumState {
    PendulumState {
        theta1: s.theta1 + k.theta1 * dt,
        theta2: s.theta2 + k.theta2 * dt,
        omega1: s.omega1 + k.omega1 * dt,
        omega2: s.omega2 + k.omega2 * dt,
    }
}

/// Advance the double pendulum by one RK4 step. Pure: the input state is
/// untouched and the next state is returned.
pub fn step(state: &PendulumState, params: &PendulumParams, dt: f64) -> PendulumState {
    let k1 = derivatives(state, params);
    let k2 = derivatives(&advanced(state, &k1, dt / 2.0), params);
    let k3 = derivatives(&advanced(state, &k2, dt / 2.0), params);
    let k4 = derivatives(&advanced(state, &k3, dt), params);

    let combine = |a: f64, b: f64, c: f64, d: f64| (dt / 6.0) * (a + 2.0 * b + 2.0 * c + d);
    PendulumState {
        theta1: state.theta1 + combine(k1.theta1, k2.theta1, k3.theta1, k4.theta1),
        theta2: state.theta2 + combine(k1.theta2, k2.theta2, k3.theta2, k4.theta2),
        omega1: state.omega1 + combine(k1.omega1, k2.omega1, k3.omega1, k4.omega1),
        omega2: state.omega2 + combine(k1.omega2, k2.omega2, k3.omega2, k4.omega2),
    }
}

/// Cartesian bob positions for the given pivot origin. Screen convention:
/// +y grows downward, so a pendulum at rest hangs toward +y.
pub fn positions(state: &PendulumState, params: &PendulumParams, origin: &Vec2) -> (Vec2, Vec2) {
    let bob1 = origin
        + Vec2::new(
            params.l1 * state.theta1.sin(),
            params.l1 * state.theta1.cos(),
        );
    let bob2 = bob1
        + Vec2::new(
            params.l2 * state.theta2.sin(),
            params.l2 * state.theta2.cos(),
        );
    (bob1, bob2)
}
