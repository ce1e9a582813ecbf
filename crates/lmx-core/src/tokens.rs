//! Line and token scanning over single-byte text.

/// Returns `true` for a byte that ends a line. `\n` and `\r` each terminate a
/// line on their own, so `\r\n` produces an extra empty line.
pub fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Returns `true` for a byte that separates tokens: space, tab, line feed,
/// vertical tab, form feed or carriage return.
pub fn is_token_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Strip leading and trailing bytes at or below `0x20`, control bytes
/// included.
fn trim_line(line: &[u8]) -> &[u8] {
    let Some(first) = line.iter().position(|b| *b > b' ') else {
        return &[];
    };
    let last = line.iter().rposition(|b| *b > b' ').unwrap_or(first);
    &line[first..=last]
}

/// Number of non-empty whitespace-delimited tokens in `line`.
///
/// The ends of the line are trimmed of every byte at or below `0x20`, then
/// the remainder is split on separator bytes. A control byte inside the line
/// is part of a token; at either end it is dropped.
pub fn count_tokens(line: &[u8]) -> u64 {
    trim_line(line)
        .split(|b| is_token_separator(*b))
        .filter(|token| !token.is_empty())
        .count() as u64
}

/// Largest token count over the lines of `span`, or `0` when `span` holds no
/// non-blank line.
pub fn max_tokens_per_line(span: &[u8]) -> u64 {
    span.split(|b| is_line_terminator(*b))
        .map(count_tokens)
        .max()
        .unwrap_or(0)
}
