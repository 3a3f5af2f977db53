//! Geographic coordinate type and the straight-line mileage fallback.
//!
//! Real road distances come from an external routing service.  When that
//! service is unavailable the caller falls back to a flat-earth estimate:
//! Euclidean distance in degrees times 69 miles per degree.  Crude, but it
//! keeps a trip plannable offline.

/// Miles per degree of latitude (and, loosely, of longitude).
pub const MILES_PER_DEGREE: f64 = 69.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Flat-earth distance in miles.  Overestimates east-west distance away
    /// from the equator; only used when no routed distance is available.
    pub fn straight_line_miles(self, other: GeoPoint) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        d_lat.hypot(d_lon) * MILES_PER_DEGREE
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
