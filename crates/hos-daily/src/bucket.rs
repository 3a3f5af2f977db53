//! Output types of the daily aggregator.
//!
//! These are plain data consumed by the log-sheet renderer: the header fields
//! (date, miles, from/to), the 4-row grid (`events`), the row totals, the
//! remarks block, and the recap table.

use chrono::NaiveDate;

use hos_core::DutyStatus;

/// One grid segment, already clipped to its calendar day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayEvent {
    pub status:         DutyStatus,
    /// Hours since midnight at which the segment starts.
    pub start_hour:     f64,
    pub duration_hours: f64,
}

/// The rolling-cycle recap printed at the bottom of each sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recap {
    /// Rule label, e.g. `"70 / 8"`.
    pub limit:              String,
    /// Cycle hours used before this day.
    pub used_last_7:        f64,
    pub available_today:    f64,
    /// Driving + on-duty hours on this day's sheet.
    pub worked_today:       f64,
    /// `used_last_7 + worked_today`.
    pub total_since_start:  f64,
    pub available_tomorrow: f64,
}

/// Everything the renderer needs for one calendar day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayBucket {
    pub date:         NaiveDate,
    pub events:       Vec<DayEvent>,
    /// Hours per status, indexed by [`DutyStatus::index`].  Rounded to two
    /// decimals and always summing to 24.00.
    pub totals:       [f64; 4],
    pub miles_driven: f64,
    /// `"HH:MM - location - remark"`, one per event starting on this day.
    pub remarks:      Vec<String>,
    pub from_city:    String,
    pub to_city:      String,
    pub recap:        Recap,
}

impl DayBucket {
    #[inline]
    pub fn total(&self, status: DutyStatus) -> f64 {
        self.totals[status.index()]
    }
}
