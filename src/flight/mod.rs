//! Flights, aircraft and the formation model.
//!
//! A [`Flight`] owns an ordered list of [`Aircraft`], each with its own
//! position, engine and control-surface timelines. Exactly one aircraft is
//! designated the *user aircraft*: the one whose point of view the replay
//! follows and whose live representation already exists in the simulator.
//! Every other aircraft is an AI formation member that the synchronizer
//! injects into the host during replay.

mod aircraft;
#[allow(clippy::module_inception)]
mod flight;

pub use aircraft::{Aircraft, AircraftId, AircraftInfo};
pub use flight::{Flight, FlightInfo};
