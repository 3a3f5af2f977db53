//! `RouteLeg` — one resolved origin → destination segment of a trip.

use crate::{GeoPoint, HosError, HosResult};

/// Routing output for one leg, owned by the caller.
///
/// `distance_miles` and `duration_hours` come from the external routing
/// lookup (or [`RouteLeg::straight_line`] when it fails).  The labels are the
/// free-text place names the driver typed; they seed the region codes used
/// in interpolated highway labels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub start_location: String,
    pub end_location:   String,
}

impl RouteLeg {
    pub fn new(
        distance_miles: f64,
        duration_hours: f64,
        start_location: impl Into<String>,
        end_location:   impl Into<String>,
    ) -> Self {
        Self {
            distance_miles,
            duration_hours,
            start_location: start_location.into(),
            end_location:   end_location.into(),
        }
    }

    /// Fallback leg when the routing service is down: straight-line miles
    /// driven at `speed_mph`.
    pub fn straight_line(
        start_location: impl Into<String>,
        from:           GeoPoint,
        end_location:   impl Into<String>,
        to:             GeoPoint,
        speed_mph:      f64,
    ) -> Self {
        let distance_miles = from.straight_line_miles(to);
        Self::new(distance_miles, distance_miles / speed_mph, start_location, end_location)
    }

    /// Average speed over the leg, or `fallback_mph` when the routed duration
    /// is zero or negative.
    pub fn avg_speed_mph(&self, fallback_mph: f64) -> f64 {
        if self.duration_hours > 0.0 {
            self.distance_miles / self.duration_hours
        } else {
            fallback_mph
        }
    }

    /// Numeric sanity only: both quantities finite and non-negative.
    pub fn validate(&self) -> HosResult<()> {
        if !self.distance_miles.is_finite() || self.distance_miles < 0.0 {
            return Err(HosError::InvalidLeg(format!(
                "{} → {}: distance_miles must be finite and ≥ 0 (got {})",
                self.start_location, self.end_location, self.distance_miles
            )));
        }
        if !self.duration_hours.is_finite() || self.duration_hours < 0.0 {
            return Err(HosError::InvalidLeg(format!(
                "{} → {}: duration_hours must be finite and ≥ 0 (got {})",
                self.start_location, self.end_location, self.duration_hours
            )));
        }
        Ok(())
    }
}
