//! A single recorded aircraft and its sample timelines.

use serde::{Deserialize, Serialize};

use crate::sync::BindingState;
use crate::timeline::{ControlsSample, EngineSample, PositionSample, Timeline};

/// Stable aircraft identity within a flight.
///
/// Assigned by the persistence layer when the flight is stored; recordings
/// that were never stored use ids handed out by [`Flight::add_aircraft`].
/// This id is what the synchronizer's correlation table refers to, never a
/// pointer or an index that could go stale when the formation changes.
///
/// [`Flight::add_aircraft`]: super::Flight::add_aircraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftId(pub i64);

impl std::fmt::Display for AircraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive aircraft data carried into creation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftInfo {
    /// Simulator aircraft type identifier (e.g. a container title).
    pub aircraft_type: String,
    /// Registration painted on the aircraft.
    pub tail_number: String,
}

impl AircraftInfo {
    pub fn new(aircraft_type: impl Into<String>, tail_number: impl Into<String>) -> Self {
        Self {
            aircraft_type: aircraft_type.into(),
            tail_number: tail_number.into(),
        }
    }
}

/// One recorded aircraft: identity, timelines and live object binding.
#[derive(Debug, Clone)]
pub struct Aircraft {
    id: AircraftId,
    info: AircraftInfo,
    position: Timeline<PositionSample>,
    engine: Timeline<EngineSample>,
    controls: Timeline<ControlsSample>,
    binding: BindingState,
}

impl Aircraft {
    /// Creates an aircraft with empty timelines, not bound to any live object.
    pub fn new(id: AircraftId, info: AircraftInfo) -> Self {
        Self {
            id,
            info,
            position: Timeline::new(),
            engine: Timeline::new(),
            controls: Timeline::new(),
            binding: BindingState::Unbound,
        }
    }

    pub fn id(&self) -> AircraftId {
        self.id
    }

    pub fn info(&self) -> &AircraftInfo {
        &self.info
    }

    pub fn position(&self) -> &Timeline<PositionSample> {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Timeline<PositionSample> {
        &mut self.position
    }

    pub fn engine(&self) -> &Timeline<EngineSample> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Timeline<EngineSample> {
        &mut self.engine
    }

    pub fn controls(&self) -> &Timeline<ControlsSample> {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Timeline<ControlsSample> {
        &mut self.controls
    }

    /// The aircraft's relationship to a live object in the host simulator.
    pub fn binding(&self) -> &BindingState {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut BindingState {
        &mut self.binding
    }

    /// Returns true if any timeline holds recorded data.
    pub fn has_recording(&self) -> bool {
        !self.position.is_empty() || !self.engine.is_empty() || !self.controls.is_empty()
    }

    /// The duration of the recording in milliseconds, 0 when empty.
    ///
    /// Auxiliary timelines may outlast the position timeline (e.g. engine
    /// shutdown recorded after the final position), so the maximum over all
    /// timelines is reported.
    pub fn duration_millis(&self) -> i64 {
        [
            self.position.last_timestamp(),
            self.engine.last_timestamp(),
            self.controls.last_timestamp(),
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
    }
}
