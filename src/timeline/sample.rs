//! The `Sample` trait and interpolation helpers.

/// A timestamped sample that can be blended with a neighbouring sample.
///
/// Timestamps are milliseconds since the start of the recording. The blend
/// is only ever evaluated between two adjacent stored samples with the
/// fraction derived from the query timestamp, so implementations never see
/// fractions outside `[0, 1]`.
pub trait Sample: Clone {
    /// The sample timestamp in milliseconds.
    fn timestamp(&self) -> i64;

    /// Blends `prev` and `next` at `fraction`, stamped with `timestamp`.
    ///
    /// Continuous fields interpolate linearly; circular fields (headings)
    /// interpolate along the shorter angular path; discrete fields (switch
    /// positions) hold the `prev` value until the next sample is reached.
    fn blend(prev: &Self, next: &Self, fraction: f64, timestamp: i64) -> Self;
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    a + (b - a) * fraction
}

/// Angular interpolation along the shorter arc, in degrees.
///
/// The result is normalized to `[0, 360)`. Crossing north (e.g. 350° to 10°)
/// takes the 20° arc, not the 340° one.
pub fn shortest_arc_degrees(a: f64, b: f64, fraction: f64) -> f64 {
    let mut delta = (b - a).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    (a + delta * fraction).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(-4.0, 4.0, 0.25), -2.0);
    }

    #[test]
    fn test_shortest_arc_no_wrap() {
        assert_eq!(shortest_arc_degrees(10.0, 30.0, 0.5), 20.0);
        assert_eq!(shortest_arc_degrees(30.0, 10.0, 0.5), 20.0);
    }

    #[test]
    fn test_shortest_arc_across_north() {
        // 350 -> 10 is a 20 degree arc through north
        assert_eq!(shortest_arc_degrees(350.0, 10.0, 0.5), 0.0);
        assert_eq!(shortest_arc_degrees(10.0, 350.0, 0.5), 0.0);
        assert_eq!(shortest_arc_degrees(350.0, 10.0, 0.25), 355.0);
    }

    #[test]
    fn test_shortest_arc_result_normalized() {
        let heading = shortest_arc_degrees(359.0, 3.0, 0.75);
        assert!((0.0..360.0).contains(&heading));
        assert!((heading - 2.0).abs() < 1e-9);
    }
}
