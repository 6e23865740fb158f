/// Characters that may survive sanitization.
pub const VALID_CHARACTERS: &str = "+-*/().0123456789 ";

/// Deletes every character outside of [`VALID_CHARACTERS`] from the raw text,
/// keeping the remaining characters in their original order.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::sanitizer::sanitize;
///
/// assert_eq!(sanitize("l + 2 = ?\n"), " + 2  ");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|character| VALID_CHARACTERS.contains(*character))
        .collect()
}
