//! Generic time-indexed sample timeline.

use super::error::TimelineError;
use super::sample::Sample;

/// How a timeline is being interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Random access: locate the bracketing pair with a binary search.
    ///
    /// Used while scrubbing the replay position.
    Seek,
    /// Monotone access: advance a cached cursor instead of re-searching.
    ///
    /// Query timestamps are expected to be non-decreasing; sweeping a whole
    /// recording this way is O(n) in total rather than O(n log n). A
    /// backwards query falls back to a rescan from the start.
    Export,
}

/// An ordered, per-aircraft sequence of timestamped samples.
///
/// Samples are keyed by timestamp, unique per timestamp: appending a sample
/// whose timestamp equals the last stored one replaces it (upsert-last).
/// Timestamps otherwise strictly increase.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    samples: Vec<T>,
    /// Index of the most recently used bracketing sample.
    cursor: usize,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            cursor: 0,
        }
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The stored samples, in timestamp order.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// The first stored sample, if any.
    pub fn first(&self) -> Option<&T> {
        self.samples.first()
    }

    /// The last stored sample, if any.
    pub fn last(&self) -> Option<&T> {
        self.samples.last()
    }

    /// Removes all samples and resets the access cursor.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.cursor = 0;
    }
}

impl<T: Sample> Timeline<T> {
    /// The timestamp of the last stored sample, if any.
    pub fn last_timestamp(&self) -> Option<i64> {
        self.samples.last().map(Sample::timestamp)
    }

    /// Inserts a sample at the end of the timeline.
    ///
    /// If the timeline is non-empty and the new sample's timestamp equals the
    /// last stored timestamp, the new sample replaces the last one. A sample
    /// with a strictly earlier timestamp is rejected; producers must emit in
    /// non-decreasing timestamp order.
    pub fn insert_or_append(&mut self, sample: T) -> Result<(), TimelineError> {
        if let Some(last) = self.samples.last_mut() {
            let last_timestamp = last.timestamp();
            if sample.timestamp() == last_timestamp {
                // Importers may deliver one logical sample as two partial
                // records sharing a timestamp; the later record wins
                *last = sample;
                return Ok(());
            }
            if sample.timestamp() < last_timestamp {
                return Err(TimelineError::DecreasingTimestamp {
                    last: last_timestamp,
                    timestamp: sample.timestamp(),
                });
            }
        }
        self.samples.push(sample);
        Ok(())
    }

    /// Returns the interpolated sample at `timestamp`.
    ///
    /// An exact timestamp hit returns the stored sample unmodified. A
    /// timestamp before the first or after the last stored sample returns
    /// the respective boundary sample unchanged; no extrapolation is
    /// performed. Returns `None` only when the timeline is empty.
    pub fn interpolate(&mut self, timestamp: i64, access: Access) -> Option<T> {
        interpolate_at(&self.samples, timestamp, &mut self.cursor, access)
    }

    /// Returns a lazy, restartable resampling of the timeline.
    ///
    /// A period of 0 yields the stored samples unchanged. A positive period
    /// yields interpolated samples at `0, p, 2p, ...` up to the last stored
    /// timestamp. Each call walks the timeline with its own export cursor,
    /// leaving the timeline's interpolation state untouched.
    pub fn resample(&self, period_millis: i64) -> Resample<'_, T> {
        Resample {
            samples: &self.samples,
            period_millis,
            next_timestamp: 0,
            cursor: 0,
            index: 0,
            last_yielded: None,
        }
    }
}

/// Locates the bracketing pair for `timestamp` and blends it.
///
/// `cursor` is the caller-owned access cache; it is left pointing at the
/// lower bracketing sample so that subsequent monotone queries resume there.
fn interpolate_at<T: Sample>(
    samples: &[T],
    timestamp: i64,
    cursor: &mut usize,
    access: Access,
) -> Option<T> {
    let first = samples.first()?;
    if timestamp <= first.timestamp() {
        *cursor = 0;
        return Some(first.clone());
    }
    let last_index = samples.len() - 1;
    if timestamp >= samples[last_index].timestamp() {
        *cursor = last_index;
        return Some(samples[last_index].clone());
    }

    // timestamp is now strictly inside (first, last)
    let index = match access {
        Access::Seek => samples.partition_point(|s| s.timestamp() <= timestamp) - 1,
        Access::Export => {
            let mut index = *cursor;
            if index > last_index || samples[index].timestamp() > timestamp {
                // Backwards query; rescan from the start
                index = 0;
            }
            while samples[index + 1].timestamp() <= timestamp {
                index += 1;
            }
            index
        }
    };
    *cursor = index;

    let prev = &samples[index];
    if prev.timestamp() == timestamp {
        return Some(prev.clone());
    }
    let next = &samples[index + 1];
    let span = (next.timestamp() - prev.timestamp()) as f64;
    let fraction = (timestamp - prev.timestamp()) as f64 / span;
    Some(T::blend(prev, next, fraction, timestamp))
}

/// Lazy resampling iterator returned by [`Timeline::resample`].
///
/// Finite and restartable: a fresh `resample` call re-walks from zero.
#[derive(Debug)]
pub struct Resample<'a, T> {
    samples: &'a [T],
    period_millis: i64,
    next_timestamp: i64,
    cursor: usize,
    index: usize,
    last_yielded: Option<i64>,
}

impl<T: Sample> Iterator for Resample<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.period_millis <= 0 {
            // Original rate: pass the stored samples through unchanged
            let sample = self.samples.get(self.index)?.clone();
            self.index += 1;
            return Some(sample);
        }

        let last_timestamp = self.samples.last()?.timestamp();
        while self.next_timestamp <= last_timestamp {
            let timestamp = self.next_timestamp;
            self.next_timestamp += self.period_millis;

            let Some(sample) =
                interpolate_at(self.samples, timestamp, &mut self.cursor, Access::Export)
            else {
                continue;
            };
            // Queries before the first stored sample all clamp to it; yield
            // the boundary sample once, not per grid point
            if self.last_yielded.is_some_and(|t| sample.timestamp() <= t) {
                continue;
            }
            self.last_yielded = Some(sample.timestamp());
            return Some(sample);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::PositionSample;

    fn sample(timestamp: i64, latitude: f64, altitude: f64) -> PositionSample {
        PositionSample {
            latitude,
            altitude,
            ..PositionSample::new(timestamp)
        }
    }

    fn climb_timeline() -> Timeline<PositionSample> {
        let mut timeline = Timeline::new();
        timeline.insert_or_append(sample(0, 0.0, 0.0)).unwrap();
        timeline.insert_or_append(sample(1000, 1.0, 100.0)).unwrap();
        timeline.insert_or_append(sample(3000, 2.0, 400.0)).unwrap();
        timeline.insert_or_append(sample(4000, 4.0, 800.0)).unwrap();
        timeline
    }

    #[test]
    fn test_empty_timeline_interpolates_to_none() {
        let mut timeline: Timeline<PositionSample> = Timeline::new();
        assert!(timeline.interpolate(0, Access::Seek).is_none());
        assert!(timeline.interpolate(500, Access::Export).is_none());
    }

    #[test]
    fn test_append_keeps_increasing_timestamps() {
        let timeline = climb_timeline();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.last_timestamp(), Some(4000));
    }

    #[test]
    fn test_upsert_replaces_last_sample() {
        let mut timeline = Timeline::new();
        timeline.insert_or_append(sample(1000, 0.0, 100.0)).unwrap();
        timeline.insert_or_append(sample(1000, 0.0, 200.0)).unwrap();

        assert_eq!(timeline.len(), 1);
        let hit = timeline.interpolate(1000, Access::Seek).unwrap();
        assert_eq!(hit.altitude, 200.0);
    }

    #[test]
    fn test_decreasing_timestamp_rejected() {
        let mut timeline = climb_timeline();
        let result = timeline.insert_or_append(sample(2000, 0.0, 0.0));
        assert_eq!(
            result,
            Err(TimelineError::DecreasingTimestamp {
                last: 4000,
                timestamp: 2000
            })
        );
        // The timeline is unchanged
        assert_eq!(timeline.len(), 4);
    }

    #[test]
    fn test_exact_hit_returns_stored_sample() {
        let mut timeline = climb_timeline();
        for stored in climb_timeline().samples().to_vec() {
            let hit = timeline.interpolate(stored.timestamp, Access::Seek).unwrap();
            assert_eq!(hit, stored);
        }
    }

    #[test]
    fn test_midpoint_interpolation() {
        let mut timeline = Timeline::new();
        timeline.insert_or_append(sample(0, 0.0, 0.0)).unwrap();
        timeline.insert_or_append(sample(1000, 1.0, 100.0)).unwrap();

        let mid = timeline.interpolate(500, Access::Seek).unwrap();
        assert_eq!(mid.timestamp, 500);
        assert!((mid.latitude - 0.5).abs() < 1e-12);
        assert!((mid.altitude - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation_stays_between_neighbours() {
        let mut timeline = climb_timeline();
        for timestamp in [1, 999, 1001, 2999, 3500, 3999] {
            let value = timeline.interpolate(timestamp, Access::Seek).unwrap();
            let samples = climb_timeline();
            let prev = samples
                .samples()
                .iter()
                .rev()
                .find(|s| s.timestamp <= timestamp)
                .unwrap()
                .altitude;
            let next = samples
                .samples()
                .iter()
                .find(|s| s.timestamp >= timestamp)
                .unwrap()
                .altitude;
            assert!(value.altitude >= prev.min(next));
            assert!(value.altitude <= prev.max(next));
        }
    }

    #[test]
    fn test_boundary_clamp_no_extrapolation() {
        let mut timeline = climb_timeline();

        let before = timeline.interpolate(-500, Access::Seek).unwrap();
        assert_eq!(before, *timeline.first().unwrap());

        let after = timeline.interpolate(10_000, Access::Seek).unwrap();
        assert_eq!(after, *timeline.last().unwrap());
    }

    #[test]
    fn test_export_access_matches_seek() {
        let mut monotone = climb_timeline();
        let mut random = climb_timeline();
        for timestamp in (0..=4000).step_by(250) {
            let export = monotone.interpolate(timestamp, Access::Export).unwrap();
            let seek = random.interpolate(timestamp, Access::Seek).unwrap();
            assert_eq!(export, seek, "diverged at {timestamp} ms");
        }
    }

    #[test]
    fn test_export_access_recovers_from_backwards_query() {
        let mut timeline = climb_timeline();
        timeline.interpolate(3500, Access::Export).unwrap();

        let value = timeline.interpolate(500, Access::Export).unwrap();
        assert!((value.altitude - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_resample_zero_period_is_identity() {
        let timeline = climb_timeline();
        let resampled: Vec<_> = timeline.resample(0).collect();
        assert_eq!(resampled, timeline.samples().to_vec());

        // Restartable: a second pass yields the same sequence
        let again: Vec<_> = timeline.resample(0).collect();
        assert_eq!(again, resampled);
    }

    #[test]
    fn test_resample_fixed_period_spacing() {
        let timeline = climb_timeline();
        let resampled: Vec<_> = timeline.resample(500).collect();

        let timestamps: Vec<i64> = resampled.iter().map(|s| s.timestamp).collect();
        assert_eq!(
            timestamps,
            vec![0, 500, 1000, 1500, 2000, 2500, 3000, 3500, 4000]
        );
        assert!(timestamps.windows(2).all(|w| w[1] - w[0] == 500));
        assert!(*timestamps.last().unwrap() <= timeline.last_timestamp().unwrap());
    }

    #[test]
    fn test_resample_period_beyond_recording_yields_start_only() {
        let timeline = climb_timeline();
        let resampled: Vec<_> = timeline.resample(10_000).collect();
        assert_eq!(resampled.len(), 1);
        assert_eq!(resampled[0].timestamp, 0);
    }

    #[test]
    fn test_resample_empty_timeline() {
        let timeline: Timeline<PositionSample> = Timeline::new();
        assert_eq!(timeline.resample(0).count(), 0);
        assert_eq!(timeline.resample(1000).count(), 0);
    }

    #[test]
    fn test_resample_late_first_sample_not_duplicated() {
        let mut timeline = Timeline::new();
        timeline.insert_or_append(sample(250, 0.0, 10.0)).unwrap();
        timeline.insert_or_append(sample(1000, 1.0, 100.0)).unwrap();

        // Grid points 0, 100, 200 all clamp to the first stored sample;
        // it must appear exactly once
        let timestamps: Vec<i64> = timeline.resample(100).map(|s| s.timestamp).collect();
        assert_eq!(timestamps[0], 250);
        assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_clear_resets_state() {
        let mut timeline = climb_timeline();
        timeline.interpolate(3500, Access::Export).unwrap();
        timeline.clear();
        assert!(timeline.is_empty());
        assert!(timeline.interpolate(0, Access::Export).is_none());
        timeline.insert_or_append(sample(0, 0.0, 0.0)).unwrap();
        assert_eq!(timeline.len(), 1);
    }
}
