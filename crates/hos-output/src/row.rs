//! Plain data row types written by output backends.

use hos_core::{DutyEvent, DutyStatus};
use hos_daily::DayBucket;

/// Timestamp layout used in every backend.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ledger event, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// Position in the ledger, starting at 0.
    pub seq:           u32,
    /// [`DutyStatus::as_str`] value, e.g. `"sleeper_berth"`.
    pub status:        &'static str,
    pub start:         String,
    pub end:           String,
    pub duration_secs: i64,
    pub location:      String,
    pub remark:        String,
}

impl EventRow {
    pub fn from_event(seq: u32, event: &DutyEvent) -> Self {
        Self {
            seq,
            status:        event.status.as_str(),
            start:         event.start.format(TIMESTAMP_FORMAT).to_string(),
            end:           event.end.format(TIMESTAMP_FORMAT).to_string(),
            duration_secs: event.duration_secs,
            location:      event.location.clone(),
            remark:        event.remark.clone(),
        }
    }
}

/// One daily log sheet: header, row totals and recap.  The grid segments and
/// remarks are not flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    /// `YYYY-MM-DD`.
    pub date:               String,
    pub off_duty_hours:     f64,
    pub sleeper_hours:      f64,
    pub driving_hours:      f64,
    pub on_duty_hours:      f64,
    pub miles_driven:       f64,
    pub from_city:          String,
    pub to_city:            String,
    pub cycle_limit:        String,
    pub used_last_7:        f64,
    pub available_today:    f64,
    pub worked_today:       f64,
    pub total_since_start:  f64,
    pub available_tomorrow: f64,
}

impl DayRow {
    pub fn from_bucket(day: &DayBucket) -> Self {
        let r = &day.recap;
        Self {
            date:               day.date.format("%Y-%m-%d").to_string(),
            off_duty_hours:     day.total(DutyStatus::OffDuty),
            sleeper_hours:      day.total(DutyStatus::SleeperBerth),
            driving_hours:      day.total(DutyStatus::Driving),
            on_duty_hours:      day.total(DutyStatus::OnDuty),
            miles_driven:       day.miles_driven,
            from_city:          day.from_city.clone(),
            to_city:            day.to_city.clone(),
            cycle_limit:        r.limit.clone(),
            used_last_7:        r.used_last_7,
            available_today:    r.available_today,
            worked_today:       r.worked_today,
            total_since_start:  r.total_since_start,
            available_tomorrow: r.available_tomorrow,
        }
    }
}
