//! Data models for the card deck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single magic card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Face color, always one of [`crate::color::PALETTE`]
    pub color: String,
    pub created_at: DateTime<Utc>,
    /// Whether the card currently shows its back
    #[serde(default)]
    pub flipped: bool,
}

impl CardRecord {
    pub fn new(title: String, description: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            color,
            created_at: Utc::now(),
            flipped: false,
        }
    }
}

/// Aggregate counters for a deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    /// Cards currently in the deck
    pub count: usize,
    /// Flips performed over the deck's lifetime
    pub flips: u64,
}
