use chrono::{Duration, NaiveDateTime};

use super::types::Interval;

/// An existing booking for one player, as loaded from storage.
#[derive(Debug, Clone, Copy)]
pub struct BookedSlot {
    pub match_id: i64,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// True iff any booked slot (other than `exclude_match_id`) occupies time
/// that intersects `candidate`.
///
/// A slot without a recorded end is treated as running for
/// `default_duration` from its start.
pub fn has_conflict(
    booked: &[BookedSlot],
    candidate: Interval,
    exclude_match_id: Option<i64>,
    default_duration: Duration,
) -> bool {
    booked
        .iter()
        .filter(|slot| exclude_match_id != Some(slot.match_id))
        .any(|slot| {
            Interval::with_default_duration(slot.start, slot.end, default_duration)
                .overlaps(&candidate)
        })
}
