//! Ledger → day buckets.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use hos_core::time::{delta_hours, hour_of_day, next_midnight};
use hos_core::{DutyEvent, DutyStatus, HosRules};

use crate::{DayBucket, DayEvent, Recap};

/// Row totals must sum to this many hours.
const HOURS_PER_DAY: f64 = 24.0;
/// Drift below this is left alone.
const NORMALIZE_TOLERANCE: f64 = 0.001;

// ── Public API ────────────────────────────────────────────────────────────────

/// [`aggregate_with`] using the default rule set.
pub fn aggregate(ledger: &[DutyEvent], initial_cycle_used_hours: f64) -> Vec<DayBucket> {
    aggregate_with(ledger, initial_cycle_used_hours, &HosRules::default())
}

/// Bucket `ledger` by calendar day, ascending.
///
/// Events crossing midnight are split so each piece lands on its own day.
/// Mileage is `driving hours × rules.log_speed_mph`, independent of the
/// speed the leg was actually driven at.
pub fn aggregate_with(
    ledger:                   &[DutyEvent],
    initial_cycle_used_hours: f64,
    rules:                    &HosRules,
) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, DayAccum> = BTreeMap::new();

    for event in ledger {
        for (i, (start, end)) in day_segments(event).into_iter().enumerate() {
            let hours = delta_hours(end - start);
            let day = days.entry(start.date()).or_default();

            day.totals[event.status.index()] += hours;
            if event.status == DutyStatus::Driving {
                day.miles += hours * rules.log_speed_mph;
            }
            if i == 0 {
                day.remarks.push(format_remark(event));
            }
            day.events.push(DayEvent {
                status:         event.status,
                start_hour:     hour_of_day(start),
                duration_hours: hours,
            });
            if day.from_city.is_none() {
                day.from_city = Some(event.location.clone());
            }
            day.to_city = Some(event.location.clone());
        }
    }

    let mut cycle_used = initial_cycle_used_hours;
    days.into_iter()
        .map(|(date, acc)| {
            let totals = normalize_totals(acc.totals);
            let recap = recap_for(&totals, cycle_used, rules);
            cycle_used = recap.total_since_start;
            DayBucket {
                date,
                events:       acc.events,
                totals,
                miles_driven: acc.miles,
                remarks:      acc.remarks,
                from_city:    acc.from_city.unwrap_or_default(),
                to_city:      acc.to_city.unwrap_or_default(),
                recap,
            }
        })
        .collect()
}

/// `"HH:MM - location - remark"` for the remarks block.
pub fn format_remark(event: &DutyEvent) -> String {
    format!("{} - {} - {}", event.start.format("%H:%M"), event.location, event.remark)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct DayAccum {
    totals:    [f64; 4],
    miles:     f64,
    events:    Vec<DayEvent>,
    remarks:   Vec<String>,
    from_city: Option<String>,
    to_city:   Option<String>,
}

/// `[start, end)` pieces of `event`, one per calendar day it touches.
/// A zero-length event yields a single empty piece.
fn day_segments(event: &DutyEvent) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut pieces = Vec::with_capacity(1);
    let mut start = event.start;
    loop {
        let end = next_midnight(start).min(event.end);
        pieces.push((start, end));
        if end >= event.end || end <= start {
            break;
        }
        start = end;
    }
    pieces
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round each total to 0.01 h, then absorb any remaining gap to 24 h into
/// Off Duty.  Off Duty never goes below zero; an overshoot it cannot absorb
/// is taken from the largest other row.
fn normalize_totals(raw: [f64; 4]) -> [f64; 4] {
    let mut totals = raw.map(round2);
    let sum: f64 = totals.iter().sum();
    if (sum - HOURS_PER_DAY).abs() <= NORMALIZE_TOLERANCE {
        return totals;
    }

    let off = DutyStatus::OffDuty.index();
    let padded = round2(totals[off] + (HOURS_PER_DAY - sum));
    if padded >= 0.0 {
        totals[off] = padded;
        return totals;
    }

    totals[off] = 0.0;
    let largest = (0..totals.len())
        .filter(|&i| i != off)
        .max_by(|&a, &b| totals[a].total_cmp(&totals[b]))
        .unwrap_or(off);
    totals[largest] = round2((totals[largest] + padded).max(0.0));
    totals
}

fn recap_for(totals: &[f64; 4], used_before: f64, rules: &HosRules) -> Recap {
    let limit = rules.cycle_limit_hours;
    let worked = totals[DutyStatus::Driving.index()] + totals[DutyStatus::OnDuty.index()];
    let total = used_before + worked;
    Recap {
        limit:              rules.cycle_label(),
        used_last_7:        used_before,
        available_today:    (limit - used_before).max(0.0),
        worked_today:       worked,
        total_since_start:  total,
        available_tomorrow: (limit - total).max(0.0),
    }
}
