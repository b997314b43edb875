//! Synchronizer error types.

use thiserror::Error;

use super::binding::ObjectId;
use crate::flight::AircraftId;

/// Synchronous request rejections surfaced by the host.
///
/// These cover only the immediate submission path. Asynchronous creation
/// failures are not errors: they resolve the affected aircraft back to
/// unbound, and the replay controller decides whether a missing formation
/// member matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The host refused to accept a creation request.
    #[error("host rejected creation request for aircraft {aircraft}")]
    CreateRejected { aircraft: AircraftId },
    /// The host refused to accept a removal request.
    #[error("host rejected removal of live object {object}")]
    RemoveRejected { object: ObjectId },
}
