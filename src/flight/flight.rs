//! Flight container and user aircraft designation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aircraft::{Aircraft, AircraftId, AircraftInfo};

/// Flight metadata.
///
/// Filled in by the persistence layer for stored flights; freshly recorded
/// flights start with a generated title and the current wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub title: String,
    pub creation_time: DateTime<Utc>,
}

impl FlightInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            creation_time: Utc::now(),
        }
    }
}

impl Default for FlightInfo {
    fn default() -> Self {
        Self::new("New flight")
    }
}

/// An ordered formation of recorded aircraft.
///
/// Exactly one aircraft is flagged as the user aircraft: the one whose point
/// of view the replay follows. The flight exclusively owns its aircraft;
/// other components refer to them by [`AircraftId`].
#[derive(Debug, Clone)]
pub struct Flight {
    info: FlightInfo,
    aircraft: Vec<Aircraft>,
    user_aircraft_index: usize,
    next_aircraft_id: i64,
}

impl Default for Flight {
    fn default() -> Self {
        Self::new(FlightInfo::default())
    }
}

impl Flight {
    pub fn new(info: FlightInfo) -> Self {
        Self {
            info,
            aircraft: Vec::new(),
            user_aircraft_index: 0,
            next_aircraft_id: 1,
        }
    }

    pub fn info(&self) -> &FlightInfo {
        &self.info
    }

    /// Adds an aircraft to the formation and returns its id.
    ///
    /// The first aircraft added becomes the user aircraft.
    pub fn add_aircraft(&mut self, info: AircraftInfo) -> AircraftId {
        let id = AircraftId(self.next_aircraft_id);
        self.next_aircraft_id += 1;
        self.aircraft.push(Aircraft::new(id, info));
        debug!(aircraft = %id, count = self.aircraft.len(), "aircraft added to formation");
        id
    }

    /// Removes an aircraft from the formation, returning it.
    ///
    /// Removing the user aircraft promotes the first remaining aircraft to
    /// user aircraft. Returns `None` if the id is not part of the flight.
    pub fn remove_aircraft(&mut self, id: AircraftId) -> Option<Aircraft> {
        let index = self.aircraft.iter().position(|a| a.id() == id)?;
        let removed = self.aircraft.remove(index);
        if index < self.user_aircraft_index {
            self.user_aircraft_index -= 1;
        } else if index == self.user_aircraft_index {
            self.user_aircraft_index = 0;
        }
        debug!(aircraft = %id, remaining = self.aircraft.len(), "aircraft removed from formation");
        Some(removed)
    }

    /// Number of aircraft in the flight.
    pub fn count(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Returns true if more than one aircraft is replayed simultaneously.
    pub fn is_formation(&self) -> bool {
        self.aircraft.len() > 1
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn aircraft_mut(&mut self) -> &mut [Aircraft] {
        &mut self.aircraft
    }

    pub fn aircraft_by_id(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.id() == id)
    }

    pub fn aircraft_by_id_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.iter_mut().find(|a| a.id() == id)
    }

    /// The user aircraft, if the flight is non-empty.
    pub fn user_aircraft(&self) -> Option<&Aircraft> {
        self.aircraft.get(self.user_aircraft_index)
    }

    pub fn user_aircraft_id(&self) -> Option<AircraftId> {
        self.user_aircraft().map(Aircraft::id)
    }

    /// Designates `id` as the user aircraft.
    ///
    /// Returns false (and changes nothing) if the id is not part of the
    /// flight.
    pub fn set_user_aircraft(&mut self, id: AircraftId) -> bool {
        match self.aircraft.iter().position(|a| a.id() == id) {
            Some(index) => {
                self.user_aircraft_index = index;
                debug!(aircraft = %id, "user aircraft switched");
                true
            }
            None => false,
        }
    }

    /// The total recording duration over all aircraft, in milliseconds.
    pub fn duration_millis(&self) -> i64 {
        self.aircraft
            .iter()
            .map(Aircraft::duration_millis)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tail: &str) -> AircraftInfo {
        AircraftInfo::new("Pitts Special", tail)
    }

    fn three_ship() -> (Flight, AircraftId, AircraftId, AircraftId) {
        let mut flight = Flight::new(FlightInfo::new("Airshow"));
        let lead = flight.add_aircraft(info("N1"));
        let left = flight.add_aircraft(info("N2"));
        let right = flight.add_aircraft(info("N3"));
        (flight, lead, left, right)
    }

    #[test]
    fn test_first_aircraft_becomes_user_aircraft() {
        let (flight, lead, ..) = three_ship();
        assert_eq!(flight.user_aircraft_id(), Some(lead));
        assert!(flight.is_formation());
        assert_eq!(flight.count(), 3);
    }

    #[test]
    fn test_switch_user_aircraft() {
        let (mut flight, _, left, _) = three_ship();
        assert!(flight.set_user_aircraft(left));
        assert_eq!(flight.user_aircraft_id(), Some(left));

        assert!(!flight.set_user_aircraft(AircraftId(99)));
        assert_eq!(flight.user_aircraft_id(), Some(left));
    }

    #[test]
    fn test_remove_non_user_aircraft_keeps_designation() {
        let (mut flight, lead, left, _) = three_ship();
        assert!(flight.remove_aircraft(left).is_some());
        assert_eq!(flight.user_aircraft_id(), Some(lead));
        assert_eq!(flight.count(), 2);
    }

    #[test]
    fn test_remove_user_aircraft_promotes_first_remaining() {
        let (mut flight, lead, left, _) = three_ship();
        assert!(flight.remove_aircraft(lead).is_some());
        assert_eq!(flight.user_aircraft_id(), Some(left));
    }

    #[test]
    fn test_remove_before_user_index_keeps_same_user() {
        let (mut flight, lead, _, right) = three_ship();
        flight.set_user_aircraft(right);
        flight.remove_aircraft(lead);
        assert_eq!(flight.user_aircraft_id(), Some(right));
    }

    #[test]
    fn test_remove_unknown_aircraft() {
        let (mut flight, ..) = three_ship();
        assert!(flight.remove_aircraft(AircraftId(42)).is_none());
        assert_eq!(flight.count(), 3);
    }

    #[test]
    fn test_empty_flight_has_no_user_aircraft() {
        let flight = Flight::default();
        assert!(flight.user_aircraft().is_none());
        assert!(flight.is_empty());
        assert!(!flight.is_formation());
        assert_eq!(flight.duration_millis(), 0);
    }

    #[test]
    fn test_aircraft_ids_are_unique() {
        let (mut flight, lead, ..) = three_ship();
        flight.remove_aircraft(lead);
        let late = flight.add_aircraft(info("N4"));
        assert_ne!(late, lead);
        assert_eq!(flight.count(), 3);
    }
}
