//! Duty-status enum shared by the ledger, the aggregator, and output writers.

/// The four mutually exclusive states a driver can be in, in log-grid row
/// order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DutyStatus {
    /// Row 1.
    OffDuty,
    /// Row 2.
    SleeperBerth,
    /// Row 3.
    Driving,
    /// Row 4 — working, not driving (inspections, loading, fueling).
    OnDuty,
}

impl DutyStatus {
    /// All statuses in grid order; `ALL[s.index()] == s`.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Zero-based grid row, used to index per-day totals.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            DutyStatus::OffDuty      => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving      => 2,
            DutyStatus::OnDuty       => 3,
        }
    }

    /// `true` for the two statuses that count against the cycle.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }

    /// `true` for statuses that can satisfy a rest requirement.
    #[inline]
    pub fn is_rest(self) -> bool {
        matches!(self, DutyStatus::OffDuty | DutyStatus::SleeperBerth)
    }

    /// Column value used by CSV/SQLite output.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty      => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving      => "driving",
            DutyStatus::OnDuty       => "on_duty",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
