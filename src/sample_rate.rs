//! Recording sample rates and export resampling periods.
//!
//! Recording runs either at a fixed frequency or in "auto" mode, where a
//! sample is taken on every simulator update tick rather than on a timer.
//! Export resampling is expressed as a symbolic granularity so exporters
//! never deal in raw millisecond periods directly.

use serde::{Deserialize, Serialize};

/// Sample rate used when "auto" is selected and a numeric frequency is
/// nevertheless required (e.g. for interval estimation in the UI).
pub const DEFAULT_AUTO_HZ: f64 = 60.0;

/// Recording sample rate.
///
/// `Auto` enables event-based sampling ("as fast as simulator updates
/// arrive") instead of a fixed period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleRate {
    #[default]
    Auto,
    Hz1,
    Hz2,
    Hz5,
    Hz10,
    Hz15,
    Hz20,
    Hz24,
    Hz25,
    Hz30,
    Hz45,
    Hz50,
    Hz60,
}

impl SampleRate {
    /// Returns the sample rate in Hz.
    ///
    /// `Auto` has no period of its own and maps to [`DEFAULT_AUTO_HZ`].
    pub fn to_hz(self) -> f64 {
        match self {
            SampleRate::Auto => DEFAULT_AUTO_HZ,
            SampleRate::Hz1 => 1.0,
            SampleRate::Hz2 => 2.0,
            SampleRate::Hz5 => 5.0,
            SampleRate::Hz10 => 10.0,
            SampleRate::Hz15 => 15.0,
            SampleRate::Hz20 => 20.0,
            SampleRate::Hz24 => 24.0,
            SampleRate::Hz25 => 25.0,
            SampleRate::Hz30 => 30.0,
            SampleRate::Hz45 => 45.0,
            SampleRate::Hz50 => 50.0,
            SampleRate::Hz60 => 60.0,
        }
    }

    /// Returns the wall-clock sampling interval in milliseconds,
    /// `round(1000 / rate)`.
    pub fn interval_millis(self) -> u64 {
        (1000.0 / self.to_hz()).round() as u64
    }

    /// Returns the closest sample rate for a numeric frequency in Hz.
    ///
    /// Out-of-range input maps to `Auto`, the defined default.
    pub fn from_hz(hz: f64) -> Self {
        if hz <= 1.0 {
            SampleRate::Hz1
        } else if hz <= 2.0 {
            SampleRate::Hz2
        } else if hz <= 5.0 {
            SampleRate::Hz5
        } else if hz <= 10.0 {
            SampleRate::Hz10
        } else if hz <= 15.0 {
            SampleRate::Hz15
        } else if hz <= 20.0 {
            SampleRate::Hz20
        } else if hz <= 24.0 {
            SampleRate::Hz24
        } else if hz <= 25.0 {
            SampleRate::Hz25
        } else if hz <= 30.0 {
            SampleRate::Hz30
        } else if hz <= 45.0 {
            SampleRate::Hz45
        } else if hz <= 50.0 {
            SampleRate::Hz50
        } else if hz <= 60.0 {
            SampleRate::Hz60
        } else {
            SampleRate::Auto
        }
    }
}

impl std::fmt::Display for SampleRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleRate::Auto => write!(f, "auto"),
            rate => write!(f, "{} Hz", rate.to_hz()),
        }
    }
}

/// Resampling granularity for export.
///
/// `Original` means "do not resample, export the stored samples unchanged".
/// All other variants resample the timeline at a fixed period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResamplingPeriod {
    Original,
    TenHz,
    FiveHz,
    TwoHz,
    #[default]
    OneHz,
    AFifthHz,
    ATenthHz,
}

impl ResamplingPeriod {
    /// Returns the resampling period in milliseconds.
    ///
    /// `Original` maps to 0, meaning "use the original samples".
    pub fn millis(self) -> i64 {
        match self {
            ResamplingPeriod::Original => 0,
            ResamplingPeriod::TenHz => 100,
            ResamplingPeriod::FiveHz => 200,
            ResamplingPeriod::TwoHz => 500,
            ResamplingPeriod::OneHz => 1000,
            ResamplingPeriod::AFifthHz => 5000,
            ResamplingPeriod::ATenthHz => 10000,
        }
    }
}

impl std::fmt::Display for ResamplingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResamplingPeriod::Original => write!(f, "original"),
            ResamplingPeriod::TenHz => write!(f, "10 Hz"),
            ResamplingPeriod::FiveHz => write!(f, "5 Hz"),
            ResamplingPeriod::TwoHz => write!(f, "2 Hz"),
            ResamplingPeriod::OneHz => write!(f, "1 Hz"),
            ResamplingPeriod::AFifthHz => write!(f, "1/5 Hz"),
            ResamplingPeriod::ATenthHz => write!(f, "1/10 Hz"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_millis_fixed_rates() {
        assert_eq!(SampleRate::Hz1.interval_millis(), 1000);
        assert_eq!(SampleRate::Hz2.interval_millis(), 500);
        assert_eq!(SampleRate::Hz10.interval_millis(), 100);
        assert_eq!(SampleRate::Hz30.interval_millis(), 33);
        assert_eq!(SampleRate::Hz60.interval_millis(), 17);
    }

    #[test]
    fn test_auto_maps_to_default_frequency() {
        // "auto" samples on every simulator tick; the numeric interval is
        // derived from the default frequency
        assert_eq!(SampleRate::Auto.to_hz(), DEFAULT_AUTO_HZ);
        assert_eq!(
            SampleRate::Auto.interval_millis(),
            SampleRate::Hz60.interval_millis()
        );
    }

    #[test]
    fn test_from_hz_round_trip() {
        for rate in [
            SampleRate::Hz1,
            SampleRate::Hz5,
            SampleRate::Hz24,
            SampleRate::Hz45,
            SampleRate::Hz60,
        ] {
            assert_eq!(SampleRate::from_hz(rate.to_hz()), rate);
        }
    }

    #[test]
    fn test_from_hz_out_of_range_is_auto() {
        assert_eq!(SampleRate::from_hz(120.0), SampleRate::Auto);
    }

    #[test]
    fn test_resampling_period_millis() {
        assert_eq!(ResamplingPeriod::Original.millis(), 0);
        assert_eq!(ResamplingPeriod::TenHz.millis(), 100);
        assert_eq!(ResamplingPeriod::OneHz.millis(), 1000);
        assert_eq!(ResamplingPeriod::ATenthHz.millis(), 10000);
    }

    #[test]
    fn test_default_resampling_period() {
        assert_eq!(ResamplingPeriod::default(), ResamplingPeriod::OneHz);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SampleRate::Auto), "auto");
        assert_eq!(format!("{}", SampleRate::Hz10), "10 Hz");
        assert_eq!(format!("{}", ResamplingPeriod::Original), "original");
        assert_eq!(format!("{}", ResamplingPeriod::AFifthHz), "1/5 Hz");
    }
}
