use anyhow::{bail, Result};
use uuid::Uuid;

use arcana_lib::cards::{CardFactory, CardRecord, CardStore, DeckStats};
use arcana_lib::validation::{is_valid_title, MAX_TITLE_LEN};

/// Shared application state for CLI commands
pub struct App {
    factory: CardFactory,
    pub store: CardStore,
}

impl App {
    pub fn new() -> Self {
        Self {
            factory: CardFactory::new(),
            store: CardStore::new(),
        }
    }

    /// Create a card and add it to the deck.
    ///
    /// A supplied title must pass validation; a missing one is generated.
    pub fn add_card(&mut self, title: Option<&str>) -> Result<CardRecord> {
        if title.is_some() && !is_valid_title(title) {
            bail!("Title must be 1-{} characters after trimming", MAX_TITLE_LEN);
        }

        let title = title.map(|t| t.trim().to_string());
        let card = self.factory.create(title, None, None);
        self.store.add(card.clone());
        Ok(card)
    }

    /// Flip the card at a 1-based deck position
    pub fn flip_position(&mut self, position: usize) -> Result<CardRecord> {
        let id = match position
            .checked_sub(1)
            .and_then(|idx| self.store.all().get(idx))
        {
            Some(card) => card.id,
            None => bail!(
                "No card #{} (the deck has {} cards)",
                position,
                self.store.all().len()
            ),
        };
        self.flip(id)
    }

    /// Flip a card by id
    pub fn flip(&mut self, id: Uuid) -> Result<CardRecord> {
        Ok(self.store.flip(id)?)
    }

    /// Flip every card, returning how many were flipped
    pub fn flip_all(&mut self) -> usize {
        self.store.flip_all()
    }

    /// Randomly reorder the deck
    pub fn shuffle(&mut self) {
        self.store.shuffle(&mut rand::thread_rng());
    }

    pub fn stats(&self) -> DeckStats {
        self.store.stats()
    }
}
