//! Card face palette and hex color helpers

use rand::Rng;
use thiserror::Error;

/// The six face colors a card can be dealt
pub const PALETTE: [&str; 6] = [
    "#8e44ad", // amethyst
    "#2980b9", // sapphire
    "#16a085", // deep teal
    "#d35400", // ember
    "#c0392b", // ruby
    "#f39c12", // gold
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}

/// Pick a palette color uniformly at random
pub fn random_color() -> String {
    let idx = rand::thread_rng().gen_range(0..PALETTE.len());
    PALETTE[idx].to_string()
}

/// Decompose a `#rrggbb` color into its channels. The leading `#` is
/// optional on input.
pub fn parse_hex(color: &str) -> Result<(u8, u8, u8), ColorError> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColor(color.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ColorError::InvalidColor(color.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Lighten (positive percent) or darken (negative percent) a hex color.
///
/// Each channel moves by `channel * percent / 100`, rounded to the
/// nearest integer and clamped to [0, 255].
pub fn adjust_brightness(color: &str, percent: i32) -> Result<String, ColorError> {
    let (r, g, b) = parse_hex(color)?;

    let adjust = |channel: u8| -> u8 {
        let scaled = f64::from(channel) * (1.0 + f64::from(percent) / 100.0);
        scaled.round().clamp(0.0, 255.0) as u8
    };

    Ok(format!("#{:02x}{:02x}{:02x}", adjust(r), adjust(g), adjust(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_stays_in_palette() {
        for _ in 0..100 {
            let color = random_color();
            assert!(PALETTE.contains(&color.as_str()));
        }
    }

    #[test]
    fn test_parse_hex_accepts_optional_hash() {
        assert_eq!(parse_hex("#8e44ad").unwrap(), (0x8e, 0x44, 0xad));
        assert_eq!(parse_hex("8e44ad").unwrap(), (0x8e, 0x44, 0xad));
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        assert!(parse_hex("#8e44a").is_err());
        assert!(parse_hex("#8e44adf0").is_err());
        assert!(parse_hex("#8g44ad").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_adjust_brightness_zero_is_identity() {
        assert_eq!(adjust_brightness("#8e44ad", 0).unwrap(), "#8e44ad");
    }

    #[test]
    fn test_adjust_brightness_darkens() {
        // Each 0x80 channel halves to 0x40
        assert_eq!(adjust_brightness("#808080", -50).unwrap(), "#404040");
    }

    #[test]
    fn test_adjust_brightness_rounds_to_nearest() {
        // 10 * 1.05 = 10.5, rounds up to 11
        assert_eq!(adjust_brightness("#0a0a0a", 5).unwrap(), "#0b0b0b");
    }

    #[test]
    fn test_adjust_brightness_clamps_extremes() {
        assert_eq!(adjust_brightness("#000000", 1000).unwrap(), "#000000");
        assert_eq!(adjust_brightness("#ffffff", -1000).unwrap(), "#000000");
        assert_eq!(adjust_brightness("#808080", 1000).unwrap(), "#ffffff");
    }

    #[test]
    fn test_adjust_brightness_keeps_channels_valid() {
        for percent in [-500, -100, -1, 0, 1, 100, 500] {
            for color in PALETTE {
                let adjusted = adjust_brightness(color, percent).unwrap();
                assert_eq!(adjusted.len(), 7);
                assert!(parse_hex(&adjusted).is_ok());
            }
        }
    }
}
