//! Derived views over a snapshot of the event log.
//!
//! Everything here is a pure function of its arguments. Operations that
//! bucket by calendar day or hour take the time zone explicitly; nothing
//! reads the process's ambient zone.

use std::collections::HashMap;

use jiff::{Span, Timestamp, civil::Date, tz::TimeZone};

use crate::model::{Event, Outcome};

/// Default rolling window length, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Number of points in [`daily_average_series`].
pub const SERIES_DAYS: i64 = 7;

/// The calendar date of `timestamp` in `tz`.
pub fn local_date(timestamp: Timestamp, tz: &TimeZone) -> Date {
    timestamp.to_zoned(tz.clone()).date()
}

/// Events that share one local calendar date, in input order.
#[derive(Debug)]
pub struct DayGroup<'a> {
    pub date: Date,
    pub events: Vec<&'a Event>,
}

/// Partitions events by local date.
///
/// Groups appear in the order their date is first seen, so a newest-first
/// log yields newest-first groups.
pub fn group_by_day<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    tz: &TimeZone,
) -> Vec<DayGroup<'a>> {
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    let mut index: HashMap<Date, usize> = HashMap::new();

    for event in events {
        let date = local_date(event.timestamp, tz);
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DayGroup {
                date,
                events: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].events.push(event);
    }

    groups
}

/// The earliest instant inside a window of `days` calendar days ending at `now`.
///
/// Falls back to [`Timestamp::MIN`] when the subtraction leaves jiff's range.
pub fn window_start(now: Timestamp, days: u32, tz: &TimeZone) -> Timestamp {
    Span::new()
        .try_days(i64::from(days))
        .and_then(|span| now.to_zoned(tz.clone()).checked_sub(span))
        .map_or(Timestamp::MIN, |start| start.timestamp())
}

/// Events at or after `now - days`. Future events are kept.
pub fn rolling_window<'a>(
    events: &'a [Event],
    now: Timestamp,
    days: u32,
    tz: &TimeZone,
) -> Vec<&'a Event> {
    let start = window_start(now, days, tz);
    events.iter().filter(|e| e.timestamp >= start).collect()
}

/// Counts and averages for a slice of the log.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub not_acted: usize,
    pub smoked: usize,
    /// `None` when there are no events; never reported as zero.
    pub average_intensity: Option<f64>,
    /// Percentage of events not acted on, 0 when there are no events.
    pub restraint_rate: u8,
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn summarize<'a>(events: impl IntoIterator<Item = &'a Event>) -> Summary {
    let mut total = 0usize;
    let mut not_acted = 0usize;
    let mut intensity_sum = 0u64;

    for event in events {
        total += 1;
        intensity_sum += u64::from(event.intensity);
        if event.outcome == Outcome::NotActed {
            not_acted += 1;
        }
    }

    let (average_intensity, restraint_rate) = if total == 0 {
        (None, 0)
    } else {
        let rate = (not_acted as f64 / total as f64 * 100.0).round();
        // Bounded to 0..=100 by construction.
        (Some(intensity_sum as f64 / total as f64), rate as u8)
    };

    Summary {
        total,
        not_acted,
        smoked: total - not_acted,
        average_intensity,
        restraint_rate,
    }
}

/// Mean intensity, or `None` for no events.
pub fn average_intensity<'a>(events: impl IntoIterator<Item = &'a Event>) -> Option<f64> {
    summarize(events).average_intensity
}

/// Rounded percentage of events not acted on. 0 for no events.
pub fn restraint_rate<'a>(events: impl IntoIterator<Item = &'a Event>) -> u8 {
    summarize(events).restraint_rate
}

/// One point of the daily average chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: Date,
    /// Short label, e.g. `16 Oct`.
    pub label: String,
    /// Mean intensity for the day; 0 when nothing was logged.
    pub average: f64,
}

/// Mean intensity for each of the last seven local days, oldest first.
///
/// Always returns exactly [`SERIES_DAYS`] points, today included.
pub fn daily_average_series(events: &[Event], now: Timestamp, tz: &TimeZone) -> Vec<DailyPoint> {
    let today = local_date(now, tz);

    let mut per_day: HashMap<Date, (u64, u32)> = HashMap::new();
    for event in events {
        let (sum, count) = per_day.entry(local_date(event.timestamp, tz)).or_default();
        *sum += u64::from(event.intensity);
        *count += 1;
    }

    (0..SERIES_DAYS)
        .rev()
        .map(|back| {
            let date = today.checked_sub(Span::new().days(back)).unwrap_or(today);
            #[allow(clippy::cast_precision_loss)]
            let average = match per_day.get(&date) {
                Some(&(sum, count)) if count > 0 => sum as f64 / f64::from(count),
                _ => 0.0,
            };
            DailyPoint {
                date,
                label: date.strftime("%d %b").to_string(),
                average,
            }
        })
        .collect()
}

/// Share of events per local hour of day, scaled so the busiest hour is 1.
///
/// Covers the whole log. All zeros for an empty log.
pub fn hourly_distribution(events: &[Event], tz: &TimeZone) -> [f64; 24] {
    let mut counts = [0u32; 24];
    for event in events {
        let hour = event.timestamp.to_zoned(tz.clone()).hour();
        if let Some(slot) = usize::try_from(hour).ok().and_then(|h| counts.get_mut(h)) {
            *slot += 1;
        }
    }

    let max = counts.iter().copied().max().unwrap_or(0).max(1);
    counts.map(|c| f64::from(c) / f64::from(max))
}

/// Events whose factors, location, notes or mood contain `query`, ignoring case.
///
/// An empty query matches everything.
pub fn search<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    if query.is_empty() {
        return events.iter().collect();
    }
    let needle = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    events
        .iter()
        .filter(|e| {
            e.factors.iter().any(|f| hit(f.as_str()))
                || hit(e.location.as_str())
                || hit(e.notes.as_str())
                || hit(e.mood.as_str())
        })
        .collect()
}
