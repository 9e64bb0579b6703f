//! Input validation for user-supplied card fields

/// Longest accepted card title, in characters
pub const MAX_TITLE_LEN: usize = 50;

/// Whether a user-supplied title is usable: non-blank after trimming and
/// at most [`MAX_TITLE_LEN`] characters long. `None` counts as blank.
pub fn is_valid_title(input: Option<&str>) -> bool {
    let trimmed = input.unwrap_or("").trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MAX_TITLE_LEN
}
