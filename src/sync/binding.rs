//! Per-aircraft live object binding state machine.

use serde::{Deserialize, Serialize};

/// Identifier of a live object inside the host simulator.
///
/// Assigned by the host when a creation request resolves. The host reserves
/// a fixed identifier for the user's own aircraft ([`ObjectId::USER`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// The host's fixed identifier for the user's own aircraft.
    pub const USER: ObjectId = ObjectId(0);
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locally generated identifier attached to an outbound request so the
/// host's asynchronous response can be matched back to the aircraft that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(pub u64);

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relationship between a recorded aircraft and a live simulator object.
///
/// ```text
///            issue create              create succeeded
/// Unbound ─────────────► PendingCreation ─────────────► Bound
///    ▲                        │                           │
///    │     create failed /    │                           │
///    └────────────────────────┘◄──────────────────────────┘
///          teardown                 destroy / teardown
/// ```
///
/// There is no pending-destroy state: removal has no meaningful failure
/// path in the host, so `Bound -> Unbound` applies immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingState {
    /// No live object exists for this aircraft. Initial and terminal state.
    #[default]
    Unbound,
    /// A creation request is outstanding under the given correlation id.
    PendingCreation(CorrelationId),
    /// The aircraft is represented by the given live object.
    Bound(ObjectId),
}

impl BindingState {
    pub fn is_unbound(&self) -> bool {
        matches!(self, BindingState::Unbound)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, BindingState::PendingCreation(_))
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, BindingState::Bound(_))
    }

    /// The live object id, when bound.
    pub fn object_id(&self) -> Option<ObjectId> {
        match self {
            BindingState::Bound(object) => Some(*object),
            _ => None,
        }
    }

    /// The outstanding correlation id, when a creation is pending.
    pub fn pending_request(&self) -> Option<CorrelationId> {
        match self {
            BindingState::PendingCreation(request) => Some(*request),
            _ => None,
        }
    }

    /// `Unbound -> PendingCreation`. Returns false from any other state;
    /// an aircraft cannot be asked to create a second live object while its
    /// first request is outstanding.
    pub fn begin_creation(&mut self, request: CorrelationId) -> bool {
        match self {
            BindingState::Unbound => {
                *self = BindingState::PendingCreation(request);
                true
            }
            _ => false,
        }
    }

    /// `PendingCreation -> Bound`. Returns false from any other state.
    pub fn complete_creation(&mut self, object: ObjectId) -> bool {
        match self {
            BindingState::PendingCreation(_) => {
                *self = BindingState::Bound(object);
                true
            }
            _ => false,
        }
    }

    /// `PendingCreation -> Unbound`. Returns false from any other state.
    pub fn fail_creation(&mut self) -> bool {
        match self {
            BindingState::PendingCreation(_) => {
                *self = BindingState::Unbound;
                true
            }
            _ => false,
        }
    }

    /// `Unbound -> Bound` without a request round-trip.
    ///
    /// Only the user aircraft takes this path: its live object already
    /// exists in the host. Returns false from any other state.
    pub fn bind_existing(&mut self, object: ObjectId) -> bool {
        match self {
            BindingState::Unbound => {
                *self = BindingState::Bound(object);
                true
            }
            _ => false,
        }
    }

    /// `Bound -> Unbound`, returning the object id that was bound.
    ///
    /// Fire-and-forget from the engine's point of view; the caller submits
    /// the host removal. Returns `None` from any other state.
    pub fn release(&mut self) -> Option<ObjectId> {
        match *self {
            BindingState::Bound(object) => {
                *self = BindingState::Unbound;
                Some(object)
            }
            _ => None,
        }
    }
}
