/// Extract the TL;DR headline: the first sentence or the first line,
/// whichever ends sooner.
///
/// `!` and `?` always end the sentence. `.` does too, unless it sits
/// between two ASCII digits, so decimals like `$250.00` stay inside the
/// headline. The terminator is kept; a newline is not. Surrounding
/// whitespace is trimmed, and text with neither terminator nor newline is
/// returned whole.
#[must_use]
pub fn extract_headline(text: &str) -> &str {
    let text = text.trim_start();
    let mut chars = text.char_indices().peekable();
    let mut prev: Option<char> = None;

    while let Some((idx, c)) = chars.next() {
        match c {
            '\n' | '\r' => return text[..idx].trim(),
            '!' | '?' => return text[..=idx].trim(),
            '.' => {
                let decimal_point = prev.is_some_and(|p| p.is_ascii_digit())
                    && chars.peek().is_some_and(|&(_, next)| next.is_ascii_digit());
                if !decimal_point {
                    return text[..=idx].trim();
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    text.trim()
}
