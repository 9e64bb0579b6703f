//! Ordered in-memory card store

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use super::models::{CardRecord, DeckStats};

#[derive(Error, Debug)]
pub enum CardStoreError {
    #[error("Card not found: {0}")]
    CardNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, CardStoreError>;

/// Insertion-ordered card collection with lifetime counters.
///
/// The store is a plain owned value handed to whatever front end drives
/// it. Counters only increase; no operation removes a card.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<CardRecord>,
    total_created: u64,
    total_flips: u64,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the deck and count it
    pub fn add(&mut self, record: CardRecord) {
        log::debug!("Adding card \"{}\" ({})", record.title, record.id);
        self.cards.push(record);
        self.total_created += 1;
    }

    /// Toggle a card's flipped flag, returning the updated record
    pub fn flip(&mut self, id: Uuid) -> Result<CardRecord> {
        let card = match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => card,
            None => {
                log::warn!("Flip requested for unknown card {}", id);
                return Err(CardStoreError::CardNotFound(id));
            }
        };

        card.flipped = !card.flipped;
        self.total_flips += 1;
        Ok(card.clone())
    }

    /// Toggle every card in the deck, returning how many were flipped
    pub fn flip_all(&mut self) -> usize {
        for card in &mut self.cards {
            card.flipped = !card.flipped;
        }
        self.total_flips += self.cards.len() as u64;
        self.cards.len()
    }

    /// Randomly permute the deck's display order
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Cards in display order
    pub fn all(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn stats(&self) -> DeckStats {
        DeckStats {
            count: self.cards.len(),
            flips: self.total_flips,
        }
    }

    /// Cards added over the store's lifetime
    pub fn total_created(&self) -> u64 {
        self.total_created
    }
}
