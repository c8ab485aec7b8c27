//! Brace-depth scanner that cuts a script into `$v{...}` segments.

const SEGMENT_OPEN: &[u8] = b"$v{";

/// Return the bodies of every complete `$v{...}` segment, in order, without
/// the `$v{` opener and the closing brace.
///
/// Braces inside a segment nest, so placeholders such as `{user.avatar}` stay
/// part of the segment. Text between segments is skipped and an unterminated
/// trailing segment is dropped.
pub fn split_segments(script: &str) -> Vec<&str> {
    let bytes = script.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if depth == 0 {
            if bytes[i..].starts_with(SEGMENT_OPEN) {
                depth = 1;
                i += SEGMENT_OPEN.len();
                start = i;
                continue;
            }
        } else {
            match bytes[i] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        // Both ends sit on ASCII bytes, so these are char boundaries.
                        segments.push(&script[start..i]);
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }

    segments
}
