//! swingset — real-time physics simulation engines for interactive visual
//! exploration.
//!
//! This is the umbrella crate that re-exports the four engines and their
//! supporting crates. Each engine is consumed once per animation frame by
//! a rendering layer that owns pixel mapping, color, and input handling:
//! [`swingset_catenary`] for hanging-chain shapes, [`swingset_pendulum`]
//! for double-pendulum integration, [`swingset_wave`] for the discretized
//! string, and [`swingset_epicycle`] for nested rotating-circle chains.
//!
//! No engine depends on another; all are driven from a single animation
//! loop, with [`FrameClock`] clamping wall-clock deltas and
//! [`substeps`] subdividing them for the wave integrator.

pub use swingset_catenary::{self, Anchor, CatenaryParams, Tension};
pub use swingset_epicycle::{self, advance_phase, positions_at, Circle};
pub use swingset_format::{self, FormatError, SceneConfig};
pub use swingset_math::{self, Vec2, GRAVITY};
pub use swingset_pendulum::{self, Energy, PendulumParams, PendulumState};
pub use swingset_trace::{self, ScalarTrace, TraceBuffer};
pub use swingset_wave::{self, WaveParams, WaveString};

pub mod frame;

pub use frame::{substeps, FrameClock, MAX_FRAME_DT};
