//! Live object bindings and the host request/callback protocol.
//!
//! During replay every non-user aircraft in a formation is represented by an
//! "AI" object injected into the host simulator. Creation is asynchronous:
//! the engine submits a request tagged with a correlation id and the host
//! answers later, on the same thread that pumps its event queue, with either
//! the assigned object id or a failure. Removal is fire-and-forget.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐  submit_create(type, tail, pos, id)  ┌──────────┐
//! │ ObjectSynchronizer │─────────────────────────────────────►│          │
//! │                    │  submit_remove(object)               │   Host   │
//! │  correlation table │─────────────────────────────────────►│ simulator│
//! │  id -> aircraft    │                                      │          │
//! │                    │◄─────────────────────────────────────│          │
//! └────────────────────┘  on_object_created(id, object)       └──────────┘
//!                         on_object_creation_failed(id)
//! ```
//!
//! The engine is single-threaded by design: callbacks arrive on the thread
//! that owns the synchronizer, so the correlation table is a plain map with
//! no internal locking. A host that dispatches events elsewhere must marshal
//! the calls onto the owning thread.

mod binding;
mod error;
mod host;
mod synchronizer;

pub use binding::{BindingState, CorrelationId, ObjectId};
pub use error::SyncError;
pub use host::SimulatorHost;
pub use synchronizer::ObjectSynchronizer;
