use arcana_lib::cards::{CardRecord, DeckStats};
use arcana_lib::color;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GRAY: &str = "\x1b[90m";
}

/// How much a card back is darkened relative to its face color
const BACK_SHADE_PERCENT: i32 = -25;

/// Render one card as a numbered two-line entry.
///
/// A face-down card shows a darkened swatch and hides its text, like the
/// back of a real card.
pub fn render_card(position: usize, card: &CardRecord, use_color: bool) -> String {
    let face = if card.flipped { "face down" } else { "face up" };
    let body = if card.flipped {
        "?".to_string()
    } else {
        card.description.clone()
    };

    if !use_color {
        return format!("{:>2}. {} [{}]\n    {}", position, card.title, face, body);
    }

    let shade = if card.flipped {
        color::adjust_brightness(&card.color, BACK_SHADE_PERCENT)
            .unwrap_or_else(|_| card.color.clone())
    } else {
        card.color.clone()
    };
    let swatch = match color::parse_hex(&shade) {
        Ok((r, g, b)) => format!("\x1b[38;2;{};{};{}m\u{25a0}{}", r, g, b, Color::RESET),
        Err(_) => "\u{25a0}".to_string(),
    };

    format!(
        "{:>2}. {} {}{}{} {}[{}]{}\n    {}{}{}",
        position,
        swatch,
        Color::BOLD,
        card.title,
        Color::RESET,
        Color::GRAY,
        face,
        Color::RESET,
        Color::DIM,
        body,
        Color::RESET,
    )
}

pub fn render_stats(stats: &DeckStats) -> String {
    format!("{} cards, {} flips", stats.count, stats.flips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_lib::cards::CardFactory;

    #[test]
    fn test_plain_rendering_has_no_ansi() {
        let mut factory = CardFactory::new();
        let card = factory.create(Some("Test".to_string()), None, None);

        let rendered = render_card(1, &card, false);

        assert!(!rendered.contains('\x1b'));
        assert!(rendered.contains("Test"));
        assert!(rendered.contains("face up"));
    }

    #[test]
    fn test_face_down_card_hides_description() {
        let mut factory = CardFactory::new();
        let mut card = factory.create(None, None, None);
        card.flipped = true;

        let rendered = render_card(1, &card, false);

        assert!(rendered.contains("face down"));
        assert!(!rendered.contains(&card.description));
    }

    #[test]
    fn test_stats_line() {
        let stats = DeckStats { count: 3, flips: 7 };
        assert_eq!(render_stats(&stats), "3 cards, 7 flips");
    }
}
