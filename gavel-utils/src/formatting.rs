/// Marker the game client uses to start a formatting code.
pub const SECTION_SIGN: char = '\u{00A7}';
/// Marker used in templates and config files in place of [`SECTION_SIGN`].
pub const ALT_COLOR_CHAR: char = '&';

fn is_format_code(code: char) -> bool {
    matches!(code.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Translate `&`-prefixed formatting codes (e.g. `&c`) into the client's section-sign form.
///
/// An `&` not followed by a valid code is kept as-is.
pub fn colorize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ALT_COLOR_CHAR {
            if let Some(&code) = chars.peek() {
                if is_format_code(code) {
                    out.push(SECTION_SIGN);
                    out.push(code);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }

    out
}

/// Remove section-sign formatting codes, leaving plain text.
pub fn strip_color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == SECTION_SIGN && chars.peek().is_some_and(|code| is_format_code(*code)) {
            chars.next();
            continue;
        }
        out.push(ch);
    }

    out
}

/// Format seconds into a compact human-readable duration using the largest unit and,
/// if non-zero, the unit directly below it (e.g. 59s, 1m 1s, 1h 30m, 2w 3d).
///
/// A zero in the second position ends the output: 1h 0m 5s renders as `1h`.
pub fn format_compact_duration(total_seconds: u64) -> String {
    const UNITS: [(u64, &str); 6] = [
        (365 * 86_400, "y"),
        (7 * 86_400, "w"),
        (86_400, "d"),
        (3_600, "h"),
        (60, "m"),
        (1, "s"),
    ];

    let mut remaining = total_seconds;
    let mut parts = Vec::with_capacity(2);
    for (size, label) in UNITS {
        let count = remaining / size;
        if count > 0 {
            parts.push(format!("{}{}", count, label));
            remaining %= size;
        } else if !parts.is_empty() {
            break;
        }
        if parts.len() == 2 {
            break;
        }
    }

    if parts.is_empty() {
        return "0s".to_owned();
    }

    parts.join(" ")
}
