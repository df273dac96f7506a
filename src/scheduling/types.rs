use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// Half-open time interval `[start, end)`.
///
/// Reversed or zero-length intervals are carried as-is; they simply never
/// overlap anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Build an interval from a start time and an optional recorded end.
    /// A missing end means the booking occupies `default_duration` from start.
    pub fn with_default_duration(
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        default_duration: Duration,
    ) -> Self {
        Self {
            start,
            end: end.unwrap_or(start + default_duration),
        }
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Lifecycle stage of a match, computed from its stored times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl MatchStatus {
    /// A recorded end time always wins; otherwise the start time decides
    /// whether the match is still ahead of `now`.
    pub fn derive(start: NaiveDateTime, end: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        if end.is_some() {
            MatchStatus::Completed
        } else if start > now {
            MatchStatus::Upcoming
        } else {
            MatchStatus::Ongoing
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(MatchStatus::Upcoming),
            "ongoing" => Some(MatchStatus::Ongoing),
            "completed" => Some(MatchStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn end_set_means_completed_regardless_of_start() {
        let now = at(12, 0);
        // Ended ten minutes ago
        assert_eq!(
            MatchStatus::derive(at(10, 0), Some(at(11, 50)), now),
            MatchStatus::Completed
        );
        // End recorded even though start is in the future still reads completed
        assert_eq!(
            MatchStatus::derive(at(14, 0), Some(at(15, 0)), now),
            MatchStatus::Completed
        );
    }

    #[test]
    fn future_start_without_end_is_upcoming() {
        let now = at(12, 0);
        assert_eq!(
            MatchStatus::derive(at(13, 0), None, now),
            MatchStatus::Upcoming
        );
    }

    #[test]
    fn past_or_present_start_without_end_is_ongoing() {
        let now = at(12, 0);
        assert_eq!(
            MatchStatus::derive(at(11, 0), None, now),
            MatchStatus::Ongoing
        );
        // Start exactly at now is not "in the future"
        assert_eq!(
            MatchStatus::derive(at(12, 0), None, now),
            MatchStatus::Ongoing
        );
    }

    #[test]
    fn status_parse_round_trip() {
        for status in [
            MatchStatus::Upcoming,
            MatchStatus::Ongoing,
            MatchStatus::Completed,
        ] {
            assert_eq!(MatchStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MatchStatus::parse("cancelled"), None);
    }

    #[test]
    fn interval_default_duration_fills_missing_end() {
        let interval = Interval::with_default_duration(at(10, 0), None, Duration::minutes(60));
        assert_eq!(interval.end, at(11, 0));

        let explicit = Interval::with_default_duration(
            at(10, 0),
            Some(at(10, 20)),
            Duration::minutes(60),
        );
        assert_eq!(explicit.end, at(10, 20));
    }
}
