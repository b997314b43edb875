//! SkyReplay - flight trajectory recording and replay engine
//!
//! This library provides the core functionality for replaying recorded
//! aircraft flight trajectories against a live flight simulator process.
//!
//! # Architecture
//!
//! Recorded flights are held in memory as per-aircraft sample timelines.
//! During replay the engine interpolates each timeline at the current replay
//! timestamp and keeps the simulator's "AI" objects in sync with the recorded
//! formation through an asynchronous create/remove request exchange.
//!
//! - [`timeline`] - Time-indexed sample storage with interpolation and resampling
//! - [`flight`] - Flights, aircraft and the formation model
//! - [`sync`] - Live object bindings and the host request/callback protocol
//! - [`sample_rate`] - Recording sample rates and export resampling periods
//! - [`config`] - Engine configuration passed in at construction
//! - [`logging`] - Tracing subscriber setup for embedding applications
//!
//! # High-Level API
//!
//! ```ignore
//! use skyreplay::config::ReplayConfig;
//! use skyreplay::sync::ObjectSynchronizer;
//!
//! let config = ReplayConfig::default();
//! let mut synchronizer = ObjectSynchronizer::new(config.user_object_id);
//!
//! // Spawn AI objects for every recorded formation member
//! synchronizer.bind_formation(&mut flight, &mut host, 0, false)?;
//! ```
//!
//! The persistence layer, format importers/exporters and all UI concerns are
//! collaborators outside this crate: they produce and consume the in-memory
//! flight data through the timeline and flight APIs.

pub mod config;
pub mod flight;
pub mod logging;
pub mod sample_rate;
pub mod sync;
pub mod timeline;

/// Version of the SkyReplay library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
