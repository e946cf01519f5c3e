//! Cleanup for text that reaches the composer outside of single key presses.

/// Normalize pasted text before it is inserted into the composer.
///
/// Line endings (`\r\n`, `\r`) become `\n`, tabs become four spaces and other
/// control characters are dropped so they cannot corrupt the terminal.
pub fn sanitize_pasted_text(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                sanitized.push('\n');
            }
            '\t' => sanitized.push_str("    "),
            '\n' => sanitized.push('\n'),
            _ if c.is_control() => {}
            _ => sanitized.push(c),
        }
    }

    sanitized
}
