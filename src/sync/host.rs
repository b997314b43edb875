//! The host simulator object-control interface.

use super::binding::{CorrelationId, ObjectId};
use crate::timeline::PositionSample;

/// Object-control surface of the host simulator process.
///
/// Submissions return immediately: `true` means the host accepted the call,
/// `false` means it rejected it synchronously. The outcome of an accepted
/// creation arrives later through
/// [`ObjectSynchronizer::on_object_created`] /
/// [`ObjectSynchronizer::on_object_creation_failed`], driven by whoever
/// pumps the host's event queue on the engine's thread.
///
/// [`ObjectSynchronizer::on_object_created`]: super::ObjectSynchronizer::on_object_created
/// [`ObjectSynchronizer::on_object_creation_failed`]: super::ObjectSynchronizer::on_object_creation_failed
pub trait SimulatorHost {
    /// Submits an AI aircraft creation request.
    ///
    /// `initial_position` is the spawn position; the host answers with the
    /// created object's id under `request`.
    fn submit_create(
        &mut self,
        aircraft_type: &str,
        tail_number: &str,
        initial_position: &PositionSample,
        request: CorrelationId,
    ) -> bool;

    /// Submits removal of a live object.
    fn submit_remove(&mut self, object: ObjectId) -> bool;
}
