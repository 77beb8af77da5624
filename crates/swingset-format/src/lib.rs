//! JSON scene configuration.
//!
//! One [`SceneConfig`] holds a parameter set per engine. The interaction
//! layer owns which presets exist and when they load; this crate only
//! provides the (de)serialization boundary and physical-parameter
//! validation, the single fallible surface in the workspace.

pub mod error;

pub use error::{FormatError, Result};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use swingset_catenary::{Anchor, CatenaryParams};
use swingset_epicycle::Circle;
use swingset_pendulum::{PendulumParams, PendulumState};
use swingset_wave::WaveParams;

/// Catenary scene: user-placed anchors plus chain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatenaryScene {
    pub anchors: Vec<Anchor>,
    pub params: CatenaryParams,
}

/// Pendulum scene: physical constants plus the release state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendulumScene {
    pub params: PendulumParams,
    pub initial: PendulumState,
}

/// Complete scene configuration; engines not present stay untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catenary: Option<CatenaryScene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pendulum: Option<PendulumScene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave: Option<WaveParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epicycles: Option<Vec<Circle>>,
}

impl SceneConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write the configuration to a file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Reject physically meaningless parameters before they reach the
    /// engines; the engines themselves never validate.
    pub fn validate(&self) -> Result<()> {
        if let Some(catenary) = &self.catenary {
            require_positive(catenary.params.chain_length, "catenary chain_length")?;
        }
        if let Some(pendulum) = &self.pendulum {
            let p = &pendulum.params;
            require_positive(p.l1, "pendulum l1")?;
            require_positive(p.l2, "pendulum l2")?;
            require_positive(p.m1, "pendulum m1")?;
            require_positive(p.m2, "pendulum m2")?;
            require_non_negative(p.damping, "pendulum damping")?;
        }
        if let Some(wave) = &self.wave {
            require_positive(wave.tension, "wave tension")?;
            require_positive(wave.mass, "wave mass")?;
            require_positive(wave.length, "wave length")?;
            require_non_negative(wave.damping, "wave damping")?;
            if wave.num_points < 3 {
                return Err(FormatError::InvalidParameter(format!(
                    "wave num_points must be at least 3, got {}",
                    wave.num_points
                )));
            }
        }
        if let Some(circles) = &self.epicycles {
            for (i, circle) in circles.iter().enumerate() {
                if !(circle.radius >= 0.0 && circle.radius.is_finite()) {
                    return Err(FormatError::InvalidParameter(format!(
                        "epicycle circle {i} radius must be finite and non-negative"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn require_positive(value: f64, name: &str) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::InvalidParameter(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

fn require_non_negative(value: f64, name: &str) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::InvalidParameter(format!(
            "{name} must be non-negative and finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swingset_math::Vec2;

    fn full_config() -> SceneConfig {
        SceneConfig {
            catenary: Some(CatenaryScene {
                anchors: vec![
                    Anchor::new(1, Vec2::new(100.0, 200.0)),
                    Anchor::new(2, Vec2::new(500.0, 200.0)),
                ],
                params: CatenaryParams::default(),
            }),
            pendulum: Some(PendulumScene {
                params: PendulumParams::default(),
                initial: PendulumState::at_rest(2.0, 1.5),
            }),
            wave: Some(WaveParams::default()),
            epicycles: Some(vec![Circle::new(Vec2::new(400.0, 300.0), 150.0, 1.0, 0.0)]),
        }
    }

    #[test]
    fn round_trips_through_json() {
        let config = full_config();
        let json = config.to_json_string().unwrap();
        let back = SceneConfig::from_json_str(&json).unwrap();

        let anchors = back.catenary.unwrap().anchors;
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].id, 1);
        assert_eq!(back.wave.unwrap().num_points, 101);
        assert_eq!(back.epicycles.unwrap()[0].radius, 150.0);
    }

    #[test]
    fn empty_config_is_valid() {
        let back = SceneConfig::from_json_str("{}").unwrap();
        assert!(back.catenary.is_none());
        assert!(back.pendulum.is_none());
    }

    #[test]
    fn rejects_non_positive_wave_parameters() {
        let mut config = full_config();
        config.wave.as_mut().unwrap().tension = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FormatError::InvalidParameter(_)));
        assert!(err.to_string().contains("wave tension"));
    }

    #[test]
    fn rejects_too_few_wave_points() {
        let mut config = full_config();
        config.wave.as_mut().unwrap().num_points = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_pendulum_mass_from_json() {
        let json = r#"{
            "pendulum": {
                "params": {"l1": 150.0, "l2": 150.0, "m1": -1.0, "m2": 10.0, "g": 981.0, "damping": 0.0},
                "initial": {"theta1": 0.0, "theta2": 0.0, "omega1": 0.0, "omega2": 0.0}
            }
        }"#;
        assert!(SceneConfig::from_json_str(json).is_err());
    }

    #[test]
    fn malformed_json_surfaces_a_parse_error() {
        let err = SceneConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FormatError::JsonError(_)));
    }
}
