/// Number of characters of a history term shown before it is truncated.
pub const HISTORY_LABEL_CHARS: usize = 5;

/// Ellipsis appended to truncated labels.
pub const ELLIPSIS: &str = "...";

/// Shortens `text` to its first `max_chars` characters followed by an ellipsis.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Renders a term on a single line, replacing line breaks with a visible marker.
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", "⏎").replace('\n', "⏎")
}
