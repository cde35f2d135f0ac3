//! Suggested values offered when logging. None of them are enforced.

pub const FACTORS: &[&str] = &[
    "Work stress",
    "Deadline",
    "Boredom",
    "After meal",
    "Tea/coffee",
    "Smell of smoke",
    "Seeing others smoke",
    "Fatigue",
    "Interpersonal tension",
    "Social context",
    "Habit",
    "Other",
];

pub const LOCATIONS: &[&str] = &[
    "Home",
    "Workplace",
    "Commute",
    "Outdoors",
    "Social setting",
    "Other",
];

/// Mood labels, lowest to highest.
pub const MOODS: &[&str] = &["Very Low", "Low", "Neutral", "Good", "High"];

pub const COPING_METHODS: &[&str] = &[
    "Controlled breathing",
    "Drank water",
    "Distraction",
    "Brief walk",
    "Called someone",
    "Waited it out",
    "NRT used",
    "Other",
];
