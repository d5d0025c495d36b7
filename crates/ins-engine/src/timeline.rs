//! Occurrence timeline builder.
//!
//! Turns an insight's occurrences into fixed-granularity faulty / not-faulty
//! spans over a window. Spans are produced lazily and the timeline can be
//! iterated any number of times.

use chrono::{DateTime, TimeDelta, Utc};
use ins_core::entities::Occurrence;
use ins_core::responses::TimelineSpan;

use crate::interval::effective_interval;

/// One occurrence clipped to the window.
#[derive(Debug, Clone)]
struct Segment {
    start: DateTime<Utc>,
    is_faulted: bool,
    spans: u64,
}

/// Fixed-granularity timeline of one insight's occurrences over a window.
#[derive(Debug, Clone)]
pub struct OccurrenceTimeline {
    segments: Vec<Segment>,
    interval: TimeDelta,
}

impl OccurrenceTimeline {
    /// Build a timeline, resolving the interval from an optional request string.
    ///
    /// The window is used verbatim; an empty or inverted window yields no spans.
    #[must_use]
    pub fn build(
        occurrences: &[Occurrence],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        requested_interval: Option<&str>,
    ) -> Self {
        let interval = effective_interval(requested_interval, start, end);
        Self::with_interval(occurrences, start, end, interval)
    }

    /// Build a timeline with an already-resolved positive interval.
    #[must_use]
    pub fn with_interval(
        occurrences: &[Occurrence],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: TimeDelta,
    ) -> Self {
        let mut overlapping: Vec<&Occurrence> = occurrences
            .iter()
            .filter(|occurrence| occurrence.overlaps(start, end))
            .collect();
        overlapping.sort_by_key(|occurrence| occurrence.started);

        let segments = overlapping
            .into_iter()
            .map(|occurrence| {
                let clipped_start = occurrence.started.max(start);
                let clipped_end = occurrence.ended.min(end);
                Segment {
                    start: clipped_start,
                    is_faulted: occurrence.is_faulted,
                    spans: span_count(clipped_end - clipped_start, interval),
                }
            })
            .collect();

        Self { segments, interval }
    }

    #[must_use]
    pub const fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// Total number of spans the timeline yields.
    #[must_use]
    pub fn span_count(&self) -> u64 {
        self.segments.iter().map(|segment| segment.spans).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span_count() == 0
    }

    /// Iterate the spans in occurrence order, then chunk order.
    #[must_use]
    pub fn iter(&self) -> TimelineIter<'_> {
        TimelineIter {
            segments: self.segments.iter(),
            interval: self.interval,
            cursor: None,
        }
    }
}

impl<'a> IntoIterator for &'a OccurrenceTimeline {
    type Item = TimelineSpan;
    type IntoIter = TimelineIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `ceil(clipped / interval)`, zero for an empty clip.
fn span_count(clipped: TimeDelta, interval: TimeDelta) -> u64 {
    if clipped <= TimeDelta::zero() {
        return 0;
    }
    let (Ok(clipped), Ok(interval)) = (
        u128::try_from(total_nanos(clipped)),
        u128::try_from(total_nanos(interval).max(1)),
    ) else {
        return 0;
    };
    u64::try_from(clipped.div_ceil(interval)).unwrap_or(u64::MAX)
}

/// Exact length in nanoseconds; `TimeDelta::num_nanoseconds` overflows past ~292 years.
fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * 1_000_000_000 + i128::from(delta.subsec_nanos())
}

#[derive(Debug, Clone)]
struct Cursor {
    next_start: DateTime<Utc>,
    remaining: u64,
    is_faulty: bool,
}

/// Lazy iterator over the spans of an [`OccurrenceTimeline`].
#[derive(Debug, Clone)]
pub struct TimelineIter<'a> {
    segments: std::slice::Iter<'a, Segment>,
    interval: TimeDelta,
    cursor: Option<Cursor>,
}

impl Iterator for TimelineIter<'_> {
    type Item = TimelineSpan;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cursor) = self.cursor.as_mut() {
                if cursor.remaining > 0 {
                    let start = cursor.next_start;
                    let Some(end) = start.checked_add_signed(self.interval) else {
                        cursor.remaining = 0;
                        continue;
                    };
                    cursor.remaining -= 1;
                    cursor.next_start = end;
                    return Some(TimelineSpan {
                        start,
                        end,
                        is_faulty: cursor.is_faulty,
                    });
                }
            }
            let segment = self.segments.next()?;
            self.cursor = Some(Cursor {
                next_start: segment.start,
                remaining: segment.spans,
                is_faulty: segment.is_faulted,
            });
        }
    }
}
