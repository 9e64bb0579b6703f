//! Randomized card flavor text

use rand::Rng;

const ADJECTIVES: [&str; 6] = [
    "mystical",
    "enchanted",
    "ancient",
    "radiant",
    "shadowy",
    "celestial",
];

const NOUNS: [&str; 6] = [
    "crystal",
    "phoenix",
    "talisman",
    "grimoire",
    "serpent",
    "amulet",
];

const VERBS: [&str; 6] = [
    "channels",
    "unleashes",
    "summons",
    "radiates",
    "conceals",
    "awakens",
];

/// Build a card description from one random entry of each word list
pub fn random_description() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let verb = VERBS[rng.gen_range(0..VERBS.len())];

    format!(
        "This {} {} {} incredible magical powers when activated.",
        adjective, noun, verb
    )
}
