//! Read-only views: today, history, stats.

use jiff::{Timestamp, tz::TimeZone};

use crate::journal::Journal;
use crate::stats::{self, Summary};
use crate::storage::EventStore;

use super::format::{
    NO_DATA, bar, format_average, format_date_heading, format_entry, format_restraint, heat_strip,
};

/// Intensity scale maximum, used to size chart bars.
const CHART_MAX: f64 = 10.0;
const CHART_WIDTH: usize = 20;

pub(super) fn cmd_today<S: EventStore>(journal: &Journal<S>, tz: &TimeZone) {
    let now = Timestamp::now();
    let today = journal.today(now, tz);
    let summary = stats::summarize(today.iter().copied());

    println!("Today ({})", format_date_heading(stats::local_date(now, tz)));
    print_summary(&summary, NO_DATA);

    if !today.is_empty() {
        println!();
        for event in &today {
            println!("{}", format_entry(event, tz));
        }
    }
}

pub(super) fn cmd_history<S: EventStore>(
    journal: &Journal<S>,
    tz: &TimeZone,
    window_days: u32,
    search: Option<&str>,
) {
    let events = journal.events();
    let window = stats::rolling_window(events, Timestamp::now(), window_days, tz);
    println!(
        "{window_days}-day avg: {}   Restraint rate: {}%",
        format_average(stats::average_intensity(window.iter().copied())),
        stats::restraint_rate(window),
    );

    let matches = stats::search(events, search.unwrap_or_default());
    if matches.is_empty() {
        println!();
        println!("No entries");
        return;
    }

    for group in stats::group_by_day(matches, tz) {
        println!();
        println!("{}", format_date_heading(group.date));
        for event in group.events {
            println!("  {}", format_entry(event, tz));
        }
    }
}

pub(super) fn cmd_stats<S: EventStore>(journal: &Journal<S>, tz: &TimeZone, window_days: u32) {
    let events = journal.events();
    let now = Timestamp::now();

    let window = stats::rolling_window(events, now, window_days, tz);
    let summary = stats::summarize(window.iter().copied());
    println!("Last {window_days} days");
    print_summary(&summary, "0%");

    println!();
    println!("Daily average intensity");
    for point in stats::daily_average_series(events, now, tz) {
        println!(
            "  {:<6}  {:>4.1}  {}",
            point.label,
            point.average,
            bar(point.average, CHART_MAX, CHART_WIDTH)
        );
    }

    if !events.is_empty() {
        println!();
        println!("Peak hours");
        println!("  {}", heat_strip(&stats::hourly_distribution(events, tz)));
        println!("  12AM  6AM   12PM  6PM");
    }
}

/// `empty_rate` stands in for the restraint rate when nothing was logged.
fn print_summary(summary: &Summary, empty_rate: &str) {
    println!("  Logged          {}", summary.total);
    println!(
        "  Avg intensity   {}/10",
        format_average(summary.average_intensity)
    );
    println!("  Not acted on    {}", summary.not_acted);
    println!("  Smoked          {}", summary.smoked);
    println!("  Restraint rate  {}", format_restraint(summary, empty_rate));
}
