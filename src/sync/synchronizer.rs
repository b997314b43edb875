//! Formation-wide live object synchronization.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::binding::{CorrelationId, ObjectId};
use super::error::SyncError;
use super::host::SimulatorHost;
use crate::flight::{AircraftId, Flight};
use crate::timeline::{Access, PositionSample};

/// Correlation ids below this value are reserved for other request
/// categories (object removal, info queries); creation requests are
/// allocated from here upwards so the two ranges can never collide.
const CREATE_REQUEST_BASE: u64 = 1_000;

/// Drives the live object bindings for every aircraft in a flight.
///
/// Owns the correlation table mapping each outstanding creation request to
/// the aircraft it concerns. Entries refer to aircraft by id, never by
/// pointer or index: a late callback for an aircraft that has since been
/// torn down simply finds nothing to apply to.
///
/// All calls must come from the thread that pumps the host's event queue;
/// the table is a plain, unsynchronized map.
#[derive(Debug)]
pub struct ObjectSynchronizer {
    /// The host's fixed identifier for the user's own aircraft.
    user_object_id: ObjectId,
    /// Monotonically increasing creation request counter.
    next_request: u64,
    /// Outstanding creation requests.
    requests: HashMap<CorrelationId, AircraftId>,
    /// Requests whose aircraft was torn down while the request was still
    /// outstanding. Their eventual callback must not resurrect a binding.
    orphaned: HashSet<CorrelationId>,
}

impl Default for ObjectSynchronizer {
    fn default() -> Self {
        Self::new(ObjectId::USER)
    }
}

impl ObjectSynchronizer {
    /// Creates a synchronizer with the given user object identifier.
    ///
    /// The identifier comes from configuration
    /// ([`ReplayConfig::user_object_id`]); hosts modelled on SimConnect use
    /// [`ObjectId::USER`].
    ///
    /// [`ReplayConfig::user_object_id`]: crate::config::ReplayConfig
    pub fn new(user_object_id: ObjectId) -> Self {
        Self {
            user_object_id,
            next_request: 0,
            requests: HashMap::new(),
            orphaned: HashSet::new(),
        }
    }

    /// Number of outstanding creation requests.
    pub fn outstanding_requests(&self) -> usize {
        self.requests.len()
    }

    /// Binds every aircraft in the flight to a live object.
    ///
    /// Aircraft that are already bound or have a creation outstanding are
    /// left alone. The user aircraft binds directly to the fixed user object
    /// identifier without a request, unless `include_user_aircraft` asks for
    /// an independent AI object for it as well. Every other aircraft gets a
    /// creation request carrying its type, tail number and the interpolated
    /// spawn position at `timestamp`; aircraft with no recorded position at
    /// that point are skipped.
    ///
    /// # Errors
    ///
    /// If the host rejects a submission synchronously the bind aborts
    /// immediately with [`SyncError::CreateRejected`]. Requests issued
    /// before the rejection stay pending and resolve through their
    /// callbacks as usual.
    pub fn bind_formation(
        &mut self,
        flight: &mut Flight,
        host: &mut dyn SimulatorHost,
        timestamp: i64,
        include_user_aircraft: bool,
    ) -> Result<(), SyncError> {
        let user_id = flight.user_aircraft_id();
        for aircraft in flight.aircraft_mut() {
            if !aircraft.binding().is_unbound() {
                continue;
            }
            let is_user = Some(aircraft.id()) == user_id;
            if is_user && !include_user_aircraft {
                // The user's own aircraft already exists in the host
                aircraft.binding_mut().bind_existing(self.user_object_id);
                debug!(aircraft = %aircraft.id(), object = %self.user_object_id,
                       "user aircraft bound to host user object");
                continue;
            }

            let Some(spawn_position) = aircraft.position_mut().interpolate(timestamp, Access::Seek)
            else {
                debug!(aircraft = %aircraft.id(), "no recorded position, skipping creation");
                continue;
            };

            let request = CorrelationId(CREATE_REQUEST_BASE + self.next_request);
            self.next_request += 1;

            let accepted = host.submit_create(
                &aircraft.info().aircraft_type,
                &aircraft.info().tail_number,
                &spawn_position,
                request,
            );
            if !accepted {
                warn!(aircraft = %aircraft.id(), %request, "host rejected creation request");
                return Err(SyncError::CreateRejected {
                    aircraft: aircraft.id(),
                });
            }
            self.requests.insert(request, aircraft.id());
            aircraft.binding_mut().begin_creation(request);
            debug!(aircraft = %aircraft.id(), %request, timestamp,
                   "creation request issued");
        }
        Ok(())
    }

    /// Applies a successful creation callback from the host.
    ///
    /// Looks up and removes the correlation entry and binds the aircraft to
    /// `object`. A stale, duplicate or orphaned callback is a no-op apart
    /// from removing the freshly created object again, so nothing leaks
    /// into the host. Returns true if a binding was advanced.
    pub fn on_object_created(
        &mut self,
        flight: &mut Flight,
        host: &mut dyn SimulatorHost,
        request: CorrelationId,
        object: ObjectId,
    ) -> bool {
        if self.orphaned.remove(&request) {
            self.requests.remove(&request);
            debug!(%request, %object, "creation resolved after teardown, removing object");
            host.submit_remove(object);
            return false;
        }
        let Some(aircraft_id) = self.requests.remove(&request) else {
            debug!(%request, %object, "ignoring unknown creation callback");
            return false;
        };
        let Some(aircraft) = flight.aircraft_by_id_mut(aircraft_id) else {
            debug!(aircraft = %aircraft_id, %object,
                   "aircraft left the formation, removing object");
            host.submit_remove(object);
            return false;
        };
        if aircraft.binding_mut().complete_creation(object) {
            debug!(aircraft = %aircraft_id, %request, %object, "aircraft bound to live object");
            true
        } else {
            // The table said a request was outstanding but the binding
            // disagrees; do not leave the created object behind
            warn!(aircraft = %aircraft_id, %request, %object,
                  "binding not pending on creation callback, removing object");
            host.submit_remove(object);
            false
        }
    }

    /// Applies a failed creation callback from the host.
    ///
    /// The affected aircraft resolves back to unbound; the replay controller
    /// decides whether a missing formation member is fatal. Stale or
    /// orphaned callbacks are a no-op. Returns true if a binding was
    /// advanced.
    pub fn on_object_creation_failed(&mut self, flight: &mut Flight, request: CorrelationId) -> bool {
        if self.orphaned.remove(&request) {
            self.requests.remove(&request);
            debug!(%request, "creation failure resolved after teardown");
            return false;
        }
        let Some(aircraft_id) = self.requests.remove(&request) else {
            debug!(%request, "ignoring unknown creation failure callback");
            return false;
        };
        let Some(aircraft) = flight.aircraft_by_id_mut(aircraft_id) else {
            return false;
        };
        let failed = aircraft.binding_mut().fail_creation();
        if failed {
            warn!(aircraft = %aircraft_id, %request, "host could not create live object");
        }
        failed
    }

    /// Destroys every live object of the flight.
    ///
    /// Bound aircraft get a removal request and become unbound. The one
    /// exception is the host's own user object, which this engine never
    /// destroys; an independent AI object created for the user aircraft
    /// (see [`bind_formation`](Self::bind_formation)) is removed like any
    /// other. Aircraft with a creation still outstanding are flagged
    /// orphaned: their table entry stays until the late callback arrives
    /// and is discarded.
    ///
    /// # Errors
    ///
    /// Teardown always runs to completion; if the host rejected any removal
    /// submission the last rejection is reported as
    /// [`SyncError::RemoveRejected`].
    pub fn release_formation(
        &mut self,
        flight: &mut Flight,
        host: &mut dyn SimulatorHost,
    ) -> Result<(), SyncError> {
        let mut rejected = None;
        for aircraft in flight.aircraft_mut() {
            if let Some(request) = aircraft.binding().pending_request() {
                self.orphaned.insert(request);
                aircraft.binding_mut().fail_creation();
                debug!(aircraft = %aircraft.id(), %request, "pending creation orphaned");
                continue;
            }
            if let Some(object) = aircraft.binding_mut().release() {
                if object == self.user_object_id {
                    debug!(aircraft = %aircraft.id(), "user object unbound, kept alive in host");
                    continue;
                }
                debug!(aircraft = %aircraft.id(), %object, "live object removal submitted");
                if !host.submit_remove(object) {
                    warn!(aircraft = %aircraft.id(), %object, "host rejected removal");
                    rejected = Some(object);
                }
            }
        }
        match rejected {
            Some(object) => Err(SyncError::RemoveRejected { object }),
            None => Ok(()),
        }
    }

    /// Destroys the live object of a single aircraft.
    ///
    /// Used when one aircraft is removed from the formation while replay
    /// continues for the rest. Same orphaning and error semantics as
    /// [`release_formation`](Self::release_formation); unknown ids and
    /// already-unbound aircraft are a no-op.
    pub fn release_aircraft(
        &mut self,
        flight: &mut Flight,
        host: &mut dyn SimulatorHost,
        aircraft_id: AircraftId,
    ) -> Result<(), SyncError> {
        let Some(aircraft) = flight.aircraft_by_id_mut(aircraft_id) else {
            return Ok(());
        };
        if let Some(request) = aircraft.binding().pending_request() {
            self.orphaned.insert(request);
            aircraft.binding_mut().fail_creation();
            debug!(aircraft = %aircraft_id, %request, "pending creation orphaned");
            return Ok(());
        }
        if let Some(object) = aircraft.binding_mut().release() {
            if object == self.user_object_id {
                return Ok(());
            }
            if !host.submit_remove(object) {
                warn!(aircraft = %aircraft_id, %object, "host rejected removal");
                return Err(SyncError::RemoveRejected { object });
            }
        }
        Ok(())
    }

    /// Interpolated positions of all bound aircraft at `timestamp`.
    ///
    /// Used by the replay loop to reposition live objects; advances each
    /// aircraft's export cursor, so replay-time queries stay O(n) over the
    /// whole session. The user aircraft's own object is included.
    pub fn bound_positions(
        &self,
        flight: &mut Flight,
        timestamp: i64,
    ) -> Vec<(ObjectId, PositionSample)> {
        flight
            .aircraft_mut()
            .iter_mut()
            .filter_map(|aircraft| {
                let object = aircraft.binding().object_id()?;
                let position = aircraft.position_mut().interpolate(timestamp, Access::Export)?;
                Some((object, position))
            })
            .collect()
    }
}
