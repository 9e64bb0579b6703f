//! Card construction with randomized defaults

use uuid::Uuid;

use crate::color;
use crate::description;

use super::models::CardRecord;

/// Builds cards, numbering untitled ones in creation order
#[derive(Debug, Default)]
pub struct CardFactory {
    sequence: u64,
}

impl CardFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card, filling any missing field with generated content.
    ///
    /// The face color is always drawn from the palette, even when title
    /// and description are supplied. Every call advances the sequence
    /// number used for default titles.
    pub fn create(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        id: Option<Uuid>,
    ) -> CardRecord {
        self.sequence += 1;

        let title = title.unwrap_or_else(|| format!("Magic Card {}", self.sequence));
        let description = description.unwrap_or_else(description::random_description);

        let mut card = CardRecord::new(title, description, color::random_color());
        if let Some(id) = id {
            card.id = id;
        }
        card
    }

    /// How many cards this factory has created
    pub fn created(&self) -> u64 {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    #[test]
    fn test_default_titles_are_numbered() {
        let mut factory = CardFactory::new();

        let first = factory.create(None, None, None);
        let second = factory.create(None, None, None);

        assert_eq!(first.title, "Magic Card 1");
        assert_eq!(second.title, "Magic Card 2");
    }

    #[test]
    fn test_custom_title_advances_sequence() {
        let mut factory = CardFactory::new();

        let named = factory.create(Some("MyTitle".to_string()), None, None);
        let next = factory.create(None, None, None);

        assert_eq!(named.title, "MyTitle");
        assert!(!named.description.is_empty());
        assert_eq!(next.title, "Magic Card 2");
        assert_eq!(factory.created(), 2);
    }

    #[test]
    fn test_color_always_from_palette() {
        let mut factory = CardFactory::new();

        for _ in 0..50 {
            let card = factory.create(Some("Named".to_string()), Some("Text".to_string()), None);
            assert!(PALETTE.contains(&card.color.as_str()));
        }
    }

    #[test]
    fn test_explicit_id_is_kept() {
        let mut factory = CardFactory::new();
        let id = Uuid::new_v4();

        let card = factory.create(None, None, Some(id));

        assert_eq!(card.id, id);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let mut factory = CardFactory::new();

        let a = factory.create(None, None, None);
        let b = factory.create(None, None, None);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_cards_start_face_up() {
        let mut factory = CardFactory::new();
        let card = factory.create(None, None, None);

        assert!(!card.flipped);
    }
}
