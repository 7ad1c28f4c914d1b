/// Découpe gloutonne en mots.
///
/// Words are packed into a running line, joined by single spaces, while the
/// line stays within `max_cols` characters. A word that does not fit closes
/// the line and starts the next one. Words are never split: a word longer than
/// `max_cols` gets a line of its own and is cut later, at encode time.
///
/// Only the first `max_rows` lines are returned; the rest is dropped.
///
/// Lengths are counted in `char`s.
///
/// # Example
/// ```
/// use vb_compose::wrap::wrap_words;
/// let lines = wrap_words("the quick brown fox", 10, 6);
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
#[must_use]
pub fn wrap_words(message: &str, max_cols: usize, max_rows: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in message.split_whitespace() {
        let word_len = word.chars().count();
        let sep = usize::from(current_len > 0);
        if current_len + sep + word_len <= max_cols {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_len += sep + word_len;
        } else {
            // Ferme la ligne courante, même vide (mot trop long en tête).
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    if lines.len() > max_rows {
        log::debug!(
            "Message wraps to {} lines, keeping the first {max_rows}",
            lines.len()
        );
        lines.truncate(max_rows);
    }
    lines
}
