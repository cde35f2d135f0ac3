//! Entry commands: log and remove.

use clap::Args;
use jiff::{Timestamp, civil, tz::TimeZone};
use uuid::Uuid;

use crate::journal::{Journal, Lookup};
use crate::model::{Event, Outcome};
use crate::stats;
use crate::storage::EventStore;

use super::OutcomeArg;
use super::format::short_id;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Craving intensity, 1 (minimal) to 10 (severe).
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub intensity: u8,

    /// Contributing factor. Can be specified multiple times.
    #[arg(long = "factor")]
    pub factors: Vec<String>,

    /// Where it happened.
    #[arg(long, default_value = "")]
    pub location: String,

    /// How you felt (e.g. "Low", "Neutral").
    #[arg(long, default_value = "")]
    pub mood: String,

    /// Whether the urge was acted on.
    #[arg(long, value_enum)]
    pub outcome: OutcomeArg,

    /// How many were smoked. Only with `--outcome smoked`; defaults to 1.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: Option<u32>,

    /// What helped. Only with `--outcome not-acted`. Can be specified multiple times.
    #[arg(long = "coping")]
    pub coping: Vec<String>,

    /// Free-form note.
    #[arg(long, default_value = "")]
    pub notes: String,

    /// When it happened: `HH:MM` today, or a full timestamp
    /// (e.g. `2026-10-16T08:30:00Z`). Defaults to now.
    #[arg(long)]
    pub at: Option<String>,
}

pub(super) fn cmd_log<S: EventStore>(
    journal: &mut Journal<S>,
    tz: &TimeZone,
    args: LogArgs,
) -> Result<(), String> {
    let event = build_event(args, Timestamp::now(), tz)?;
    let id = event.id;
    let outcome = event.outcome;

    journal.add(event);

    println!("{id}");
    match outcome {
        Outcome::NotActed => eprintln!("Entry saved. Urge not acted on."),
        Outcome::Smoked => eprintln!("Entry saved."),
    }
    Ok(())
}

pub(super) fn cmd_remove<S: EventStore>(
    journal: &mut Journal<S>,
    reference: &str,
) -> Result<(), String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err("an entry id is required".to_string());
    }

    // A full id is removed unconditionally; removing an unknown id is a no-op.
    if let Ok(id) = reference.parse::<Uuid>() {
        let existed = journal.events().iter().any(|e| e.id == id);
        journal.remove(id);
        if existed {
            eprintln!("Entry {} removed", short_id(id));
        } else {
            eprintln!("No entry {}; nothing removed", short_id(id));
        }
        return Ok(());
    }

    let id = match journal.find_by_prefix(reference) {
        Lookup::Found(event) => event.id,
        Lookup::NotFound => return Err(format!("no entry matching '{reference}'")),
        Lookup::Ambiguous(matches) => {
            let ids: Vec<String> = matches.iter().map(|e| short_id(e.id)).collect();
            return Err(format!(
                "'{reference}' is ambiguous: matches {} entries: {}",
                matches.len(),
                ids.join(", ")
            ));
        }
    };

    journal.remove(id);
    eprintln!("Entry {} removed", short_id(id));
    Ok(())
}

/// Turns parsed arguments into an event, enforcing the outcome-specific fields.
fn build_event(args: LogArgs, now: Timestamp, tz: &TimeZone) -> Result<Event, String> {
    let outcome = args.outcome.to_domain();

    let (quantity, coping_methods) = match outcome {
        Outcome::Smoked => {
            if !args.coping.is_empty() {
                return Err("--coping only applies to --outcome not-acted".to_string());
            }
            (Some(args.quantity.unwrap_or(1)), None)
        }
        Outcome::NotActed => {
            if args.quantity.is_some() {
                return Err("--quantity only applies to --outcome smoked".to_string());
            }
            (None, Some(args.coping))
        }
    };

    let timestamp = match args.at.as_deref() {
        Some(at) => parse_at(at, now, tz)?,
        None => now,
    };

    Ok(Event {
        id: Uuid::new_v4(),
        timestamp,
        intensity: args.intensity,
        factors: args.factors,
        location: args.location,
        mood: args.mood,
        outcome,
        quantity,
        coping_methods,
        notes: args.notes,
    })
}

/// Parses `--at`: a full timestamp, or a wall-clock time on today's date in `tz`.
fn parse_at(at: &str, now: Timestamp, tz: &TimeZone) -> Result<Timestamp, String> {
    if let Ok(timestamp) = at.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let time: civil::Time = at
        .parse()
        .map_err(|_| format!("invalid --at '{at}': expected HH:MM or a full timestamp"))?;

    stats::local_date(now, tz)
        .to_datetime(time)
        .to_zoned(tz.clone())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| format!("invalid --at '{at}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::tz;

    use crate::storage::Storage;

    fn args(outcome: OutcomeArg) -> LogArgs {
        LogArgs {
            intensity: 6,
            factors: vec!["After meal".into()],
            location: "Home".into(),
            mood: "Neutral".into(),
            outcome,
            quantity: None,
            coping: vec![],
            notes: String::new(),
            at: None,
        }
    }

    fn now() -> Timestamp {
        "2026-10-16T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn smoked_defaults_quantity_to_one() {
        let event = build_event(args(OutcomeArg::Smoked), now(), &TimeZone::UTC).unwrap();

        assert_eq!(event.outcome, Outcome::Smoked);
        assert_eq!(event.quantity, Some(1));
        assert_eq!(event.coping_methods, None);
        assert_eq!(event.timestamp, now());
    }

    #[test]
    fn not_acted_keeps_coping_methods() {
        let mut a = args(OutcomeArg::NotActed);
        a.coping = vec!["Drank water".into()];

        let event = build_event(a, now(), &TimeZone::UTC).unwrap();

        assert_eq!(event.quantity, None);
        assert_eq!(event.coping_methods, Some(vec!["Drank water".to_string()]));
    }

    #[test]
    fn rejects_fields_for_the_other_outcome() {
        let mut a = args(OutcomeArg::NotActed);
        a.quantity = Some(3);
        assert!(build_event(a, now(), &TimeZone::UTC).is_err());

        let mut b = args(OutcomeArg::Smoked);
        b.coping = vec!["Distraction".into()];
        assert!(build_event(b, now(), &TimeZone::UTC).is_err());
    }

    #[test]
    fn at_accepts_wall_clock_time_in_zone() {
        let plus_five = TimeZone::fixed(tz::offset(5));

        let at = parse_at("08:30", now(), &plus_five).unwrap();

        assert_eq!(at, "2026-10-16T03:30:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn at_accepts_full_timestamp() {
        let at = parse_at("2026-10-01T07:00:00Z", now(), &TimeZone::UTC).unwrap();
        assert_eq!(at, "2026-10-01T07:00:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn at_rejects_garbage() {
        assert!(parse_at("half past", now(), &TimeZone::UTC).is_err());
    }

    #[test]
    fn remove_by_prefix_and_unknown_full_id() {
        let storage = Storage::open_in_memory().unwrap();
        let mut journal = Journal::open(&storage);
        let mut a = args(OutcomeArg::Smoked);
        a.at = Some("2026-10-16T08:00:00Z".into());
        let event = build_event(a, now(), &TimeZone::UTC).unwrap();
        let prefix = event.id.to_string()[..8].to_string();
        journal.add(event);

        cmd_remove(&mut journal, &Uuid::new_v4().to_string()).unwrap();
        assert_eq!(journal.events().len(), 1);

        cmd_remove(&mut journal, &prefix).unwrap();
        assert!(journal.events().is_empty());
        assert!(storage.load().is_empty());

        assert!(cmd_remove(&mut journal, "abc").is_err());
    }

    #[test]
    fn remove_rejects_blank_reference() {
        let storage = Storage::open_in_memory().unwrap();
        let mut journal = Journal::open(&storage);
        let event = build_event(args(OutcomeArg::NotActed), now(), &TimeZone::UTC).unwrap();
        journal.add(event);

        assert!(cmd_remove(&mut journal, "").is_err());
        assert!(cmd_remove(&mut journal, "  ").is_err());
        assert_eq!(journal.events().len(), 1);
        assert_eq!(storage.load().len(), 1);
    }
}
