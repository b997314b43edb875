//! Time-indexed sample storage with interpolation and resampling.
//!
//! Each recorded aircraft owns one [`Timeline`] per sample kind (position,
//! engine, control surfaces). A timeline is an append-mostly sequence of
//! timestamped samples with three access operations:
//!
//! - [`Timeline::insert_or_append`] - upsert-last insertion used by recorders
//!   and format importers
//! - [`Timeline::interpolate`] - the simulator state at an arbitrary
//!   timestamp, with [`Access::Seek`] for random access (scrubbing) and
//!   [`Access::Export`] for monotone sweeps over the whole recording
//! - [`Timeline::resample`] - a lazy fixed-period (or original-rate) sweep
//!   used by exporters
//!
//! Importers may emit two partial records sharing one timestamp (a timestamp
//! element and a coordinate element arriving as separate records); the
//! upsert-last rule merges them into a single stored sample.

mod error;
mod position;
mod sample;
mod surfaces;
#[allow(clippy::module_inception)]
mod timeline;

pub use error::TimelineError;
pub use position::PositionSample;
pub use sample::{lerp, shortest_arc_degrees, Sample};
pub use surfaces::{ControlsSample, EngineSample};
pub use timeline::{Access, Resample, Timeline};
