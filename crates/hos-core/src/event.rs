//! The ledger entry type.

use chrono::{NaiveDateTime, TimeDelta};

use crate::time::{SECS_PER_MINUTE, secs_to_hours};
use crate::DutyStatus;

/// One contiguous span of a single duty status.
///
/// Immutable once appended to a ledger.  `end == start + duration_secs`
/// always holds; [`DutyEvent::new`] is the only constructor and computes
/// `end` itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyEvent {
    pub status:        DutyStatus,
    pub start:         NaiveDateTime,
    pub end:           NaiveDateTime,
    /// Whole seconds, never negative.
    pub duration_secs: i64,
    /// Free-text place label ("Chicago, IL", "Highway I-80, IA", …).
    pub location:      String,
    pub remark:        String,
}

impl DutyEvent {
    pub fn new(
        status:        DutyStatus,
        start:         NaiveDateTime,
        duration_secs: i64,
        location:      impl Into<String>,
        remark:        impl Into<String>,
    ) -> Self {
        let duration_secs = duration_secs.max(0);
        Self {
            status,
            start,
            end: start + TimeDelta::seconds(duration_secs),
            duration_secs,
            location: location.into(),
            remark: remark.into(),
        }
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.duration_secs)
    }

    #[inline]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_secs as f64 / SECS_PER_MINUTE as f64
    }

    #[inline]
    pub fn duration_hours(&self) -> f64 {
        secs_to_hours(self.duration_secs)
    }
}
