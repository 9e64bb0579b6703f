//! Arcana core library
//!
//! An in-memory "magic card" deck: card records with randomized content,
//! an ordered store with flip and shuffle operations, and the pure helpers
//! the front ends build on (palette colors, templated flavor text, input
//! validation).

pub mod cards;
pub mod color;
pub mod description;
pub mod validation;
