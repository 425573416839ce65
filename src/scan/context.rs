/// Width of the context window on each side of a match, in bytes.
pub const DEFAULT_WINDOW: usize = 30;

/// Extract a bounded context window around a match span within a line.
///
/// The window is clamped to the line, the slice is trimmed of surrounding
/// whitespace, and a `...` marker is added on each side that was actually
/// clipped. Offsets are byte offsets as produced by the regex engine;
/// clamped positions are nudged to the nearest char boundary so slicing a
/// multi-byte character never panics.
pub fn extract_context(line: &str, match_start: usize, match_end: usize, window: usize) -> String {
    let start = floor_char_boundary(line, match_start.saturating_sub(window));
    let end = ceil_char_boundary(line, (match_end + window).min(line.len()));

    let snippet = line[start..end].trim();
    let mut context = String::with_capacity(snippet.len() + 6);
    if start > 0 {
        context.push_str("...");
    }
    context.push_str(snippet);
    if end < line.len() {
        context.push_str("...");
    }
    context
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
