//! Engine configuration.
//!
//! The engine holds no process-wide settings state: whatever it needs is
//! passed in here at construction time, so independent engines can run with
//! different configurations (and tests can run them in parallel). The
//! surrounding application's settings layer owns persistence and hands a
//! value of this type down.

use serde::{Deserialize, Serialize};

use crate::sample_rate::{ResamplingPeriod, SampleRate};
use crate::sync::ObjectId;

/// Configuration for one replay engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Recording sample rate.
    pub sample_rate: SampleRate,
    /// Default resampling granularity offered to exporters.
    pub resampling_period: ResamplingPeriod,
    /// The host's fixed identifier for the user's own aircraft.
    pub user_object_id: ObjectId,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            sample_rate: SampleRate::Auto,
            resampling_period: ResamplingPeriod::default(),
            user_object_id: ObjectId::USER,
        }
    }
}
