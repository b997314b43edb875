//! Aircraft position samples.

use serde::{Deserialize, Serialize};

use super::sample::{lerp, shortest_arc_degrees, Sample};

/// A single recorded aircraft state: position, attitude and body velocity.
///
/// Latitude and longitude are degrees, altitude is feet above mean sea
/// level, attitude angles are degrees, body velocities are feet per second
/// along the aircraft body axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    /// Degrees, positive nose up.
    pub pitch: f64,
    /// Degrees, positive right wing down.
    pub bank: f64,
    /// True heading in degrees, `[0, 360)`.
    pub heading: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
}

impl PositionSample {
    /// Creates a zeroed sample at `timestamp`.
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            pitch: 0.0,
            bank: 0.0,
            heading: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            velocity_z: 0.0,
        }
    }
}

impl Sample for PositionSample {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn blend(prev: &Self, next: &Self, fraction: f64, timestamp: i64) -> Self {
        Self {
            timestamp,
            latitude: lerp(prev.latitude, next.latitude, fraction),
            longitude: lerp(prev.longitude, next.longitude, fraction),
            altitude: lerp(prev.altitude, next.altitude, fraction),
            pitch: lerp(prev.pitch, next.pitch, fraction),
            bank: lerp(prev.bank, next.bank, fraction),
            // Heading wraps at north; take the shorter arc
            heading: shortest_arc_degrees(prev.heading, next.heading, fraction),
            velocity_x: lerp(prev.velocity_x, next.velocity_x, fraction),
            velocity_y: lerp(prev.velocity_y, next.velocity_y, fraction),
            velocity_z: lerp(prev.velocity_z, next.velocity_z, fraction),
        }
    }
}
