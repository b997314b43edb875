//! Auxiliary sample kinds: engine and control surfaces.
//!
//! These ride alongside the position timeline on each aircraft. Lever and
//! surface deflections are normalized to `[-1, 1]` (or `[0, 1]` where the
//! control has no reverse range); discrete switches hold their previous
//! value between samples instead of blending.

use serde::{Deserialize, Serialize};

use super::sample::{lerp, Sample};

/// Engine lever positions, up to four engines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSample {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    pub throttle: [f64; 4],
    pub propeller: [f64; 4],
    pub mixture: [f64; 4],
}

impl EngineSample {
    /// Creates a sample with all levers at idle.
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            throttle: [0.0; 4],
            propeller: [0.0; 4],
            mixture: [0.0; 4],
        }
    }
}

fn blend_levers(prev: &[f64; 4], next: &[f64; 4], fraction: f64) -> [f64; 4] {
    [
        lerp(prev[0], next[0], fraction),
        lerp(prev[1], next[1], fraction),
        lerp(prev[2], next[2], fraction),
        lerp(prev[3], next[3], fraction),
    ]
}

impl Sample for EngineSample {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn blend(prev: &Self, next: &Self, fraction: f64, timestamp: i64) -> Self {
        Self {
            timestamp,
            throttle: blend_levers(&prev.throttle, &next.throttle, fraction),
            propeller: blend_levers(&prev.propeller, &next.propeller, fraction),
            mixture: blend_levers(&prev.mixture, &next.mixture, fraction),
        }
    }
}

/// Primary flight control and high-lift surface positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlsSample {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
    /// Flaps handle position, `[0, 1]`.
    pub flaps: f64,
    /// Landing gear switch; discrete, held between samples.
    pub gear_down: bool,
}

impl ControlsSample {
    /// Creates a neutral sample with gear up.
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            aileron: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            flaps: 0.0,
            gear_down: false,
        }
    }
}

impl Sample for ControlsSample {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn blend(prev: &Self, next: &Self, fraction: f64, timestamp: i64) -> Self {
        Self {
            timestamp,
            aileron: lerp(prev.aileron, next.aileron, fraction),
            elevator: lerp(prev.elevator, next.elevator, fraction),
            rudder: lerp(prev.rudder, next.rudder, fraction),
            flaps: lerp(prev.flaps, next.flaps, fraction),
            // The switch flips when the next sample is reached, not midway
            gear_down: prev.gear_down,
        }
    }
}
