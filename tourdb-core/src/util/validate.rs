/// Non-empty after trimming.
pub fn is_valid_text(s: &str) -> bool {
    !s.trim().is_empty()
}
