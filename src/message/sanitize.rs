//! Message cleanup before layout.
//!
//! Tabs become spaces, the trailing newline goes, the text is split at line
//! separators and every line loses its C0 control characters and DEL. Each
//! line is then terminated with `\n`, which the renderers treat as a line
//! break.

/// Normalize a raw message.
///
/// `\n`, `\r`, `\r\n`, vertical tab, form feed, `\x1c`-`\x1e`, NEL,
/// U+2028 and U+2029 each end a line. Never fails; empty input gives an
/// empty string.
pub fn sanitize(raw: &str) -> String {
    let text = raw.replace('\t', " ");
    let text = text.trim_end_matches('\n');

    let mut result = String::with_capacity(text.len() + 1);
    for line in split_lines(text) {
        result.extend(line.chars().filter(|c| !is_control(*c)));
        result.push('\n');
    }
    result
}

/// Number of lines in a sanitized message, at least 1.
pub fn line_count(message: &str) -> usize {
    message.matches('\n').count().max(1)
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{1f}' | '\u{7f}')
}

/// Line and paragraph separators, including the vertical tab, form feed,
/// the file/group/record separators, NEL and U+2028/U+2029.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'..='\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split on line breaks without yielding an empty piece after a final break.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
