//! Event types: one logged craving and how it ended.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged craving. Immutable once created.
///
/// Serialized with camelCase keys so blobs written by earlier versions of
/// the journal load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,

    /// When the craving happened, as an absolute instant.
    pub timestamp: Timestamp,

    /// How strong the craving was, 1 through 10.
    pub intensity: u8,

    /// Contributing factors (e.g. "Work stress", "After meal").
    #[serde(default)]
    pub factors: Vec<String>,

    /// Where it happened. Empty when not recorded.
    #[serde(default)]
    pub location: String,

    /// Mood label. Empty when not recorded.
    #[serde(default)]
    pub mood: String,

    pub outcome: Outcome,

    /// How many were smoked. Only set when `outcome` is `Smoked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// What helped. Only set when `outcome` is `NotActed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coping_methods: Option<Vec<String>>,

    #[serde(default)]
    pub notes: String,
}

/// Whether the urge was acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The urge passed without smoking.
    NotActed,

    Smoked,
}

impl Outcome {
    /// The serialized name, also used in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotActed => "not_acted",
            Self::Smoked => "smoked",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotActed => "Not acted on",
            Self::Smoked => "Smoked",
        }
    }
}

/// Descriptive band for an intensity value.
pub fn intensity_label(intensity: u8) -> &'static str {
    match intensity {
        0..=2 => "Minimal",
        3..=4 => "Noticeable",
        5..=6 => "Moderate",
        7..=8 => "High",
        _ => "Severe",
    }
}

/// Three-step severity used to mark intensities in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityLevel {
    Low,
    Elevated,
    High,
}

impl IntensityLevel {
    pub fn of(intensity: u8) -> Self {
        match intensity {
            0..=4 => Self::Low,
            5..=7 => Self::Elevated,
            _ => Self::High,
        }
    }
}
