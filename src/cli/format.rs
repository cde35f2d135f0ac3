//! Output formatting for CLI display.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use uuid::Uuid;

use crate::model::{Event, IntensityLevel, Outcome, intensity_label};
use crate::stats::Summary;

/// Shown in place of an average when there is nothing to average.
pub(super) const NO_DATA: &str = "—";

/// Blocks used for the hourly heat strip, faintest first.
const HEAT: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub(super) fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// One decimal place, or [`NO_DATA`].
pub(super) fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| NO_DATA.to_string(), |a| format!("{a:.1}"))
}

/// Day heading, e.g. `16/10/2026`.
pub(super) fn format_date_heading(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Clock time in `tz`, e.g. `08:30 AM`.
pub(super) fn format_time(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp.to_zoned(tz.clone()).strftime("%I:%M %p").to_string()
}

pub(super) fn format_intensity(intensity: u8) -> String {
    let marker = match IntensityLevel::of(intensity) {
        IntensityLevel::Low => ' ',
        IntensityLevel::Elevated => '!',
        IntensityLevel::High => '‼',
    };
    format!("{intensity:>2}/10{marker} {}", intensity_label(intensity))
}

pub(super) fn format_outcome(event: &Event) -> String {
    match (event.outcome, event.quantity) {
        (Outcome::Smoked, Some(q)) => format!("{} ×{q}", event.outcome.label()),
        (outcome, _) => outcome.label().to_string(),
    }
}

/// A single entry as one line (plus an indented note line when present).
pub(super) fn format_entry(event: &Event, tz: &TimeZone) -> String {
    let mut line = format!(
        "{}  {}  {:<15} {}",
        format_time(event.timestamp, tz),
        short_id(event.id),
        format_intensity(event.intensity),
        format_outcome(event),
    );
    if !event.factors.is_empty() {
        line.push_str(&format!("  [{}]", event.factors.join(", ")));
    }
    if !event.location.is_empty() {
        line.push_str(&format!("  @{}", event.location));
    }
    if !event.mood.is_empty() {
        line.push_str(&format!("  mood: {}", event.mood));
    }
    if let Some(coping) = event.coping_methods.as_deref()
        && !coping.is_empty()
    {
        line.push_str(&format!("  helped: {}", coping.join(", ")));
    }
    if !event.notes.is_empty() {
        line.push_str(&format!("\n      {}", event.notes));
    }
    line
}

/// Restraint rate as a percentage, or `empty` when nothing was logged.
pub(super) fn format_restraint(summary: &Summary, empty: &str) -> String {
    if summary.total > 0 {
        format!("{}%", summary.restraint_rate)
    } else {
        empty.to_string()
    }
}

/// A horizontal bar of up to `width` cells for `value` out of `max`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(super) fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max).min(1.0) * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}

/// The 24 normalized hourly values as a strip of block characters.
/// Empty hours render as `·`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(super) fn heat_strip(hours: &[f64; 24]) -> String {
    hours
        .iter()
        .map(|&v| {
            if v <= 0.0 {
                '·'
            } else {
                let step = (v.min(1.0) * (HEAT.len() - 1) as f64).round() as usize;
                HEAT[step]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_shows_sentinel_when_empty() {
        assert_eq!(format_average(None), "—");
        assert_eq!(format_average(Some(5.5)), "5.5");
        assert_eq!(format_average(Some(16.0 / 3.0)), "5.3");
    }

    #[test]
    fn restraint_uses_caller_placeholder_when_empty() {
        let empty = Summary {
            total: 0,
            not_acted: 0,
            smoked: 0,
            average_intensity: None,
            restraint_rate: 0,
        };
        assert_eq!(format_restraint(&empty, NO_DATA), "—");
        assert_eq!(format_restraint(&empty, "0%"), "0%");

        let logged = Summary {
            total: 4,
            not_acted: 3,
            smoked: 1,
            average_intensity: Some(4.0),
            restraint_rate: 75,
        };
        assert_eq!(format_restraint(&logged, NO_DATA), "75%");
    }

    #[test]
    fn dates_and_times() {
        let ts: Timestamp = "2026-10-16T03:05:00Z".parse().unwrap();
        assert_eq!(format_time(ts, &TimeZone::UTC), "03:05 AM");
        assert_eq!(
            format_date_heading(Date::constant(2026, 10, 6)),
            "06/10/2026"
        );
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0.0, 10.0, 20), "");
        assert_eq!(bar(5.0, 10.0, 20).chars().count(), 10);
        assert_eq!(bar(12.0, 10.0, 20).chars().count(), 20);
        assert_eq!(bar(0.01, 10.0, 20).chars().count(), 1);
    }

    #[test]
    fn heat_strip_has_one_cell_per_hour() {
        let mut hours = [0.0; 24];
        hours[9] = 1.0;
        hours[21] = 0.5;

        let strip = heat_strip(&hours);

        assert_eq!(strip.chars().count(), 24);
        assert_eq!(strip.chars().nth(9), Some('█'));
        assert_eq!(strip.chars().nth(0), Some('·'));
    }
}
