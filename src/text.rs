//! Substring search over a manifest buffer.
//!
//! The buffer is edited between searches, so callers pass the current
//! contents every time and never hold on to offsets across edits.

/// Returns the byte offset of the first occurrence of `needle` in `haystack`
/// at or after `start`.
///
/// With `ignore_case`, characters are compared after lowercasing.
///
/// Returns `None` when there is no match, when `needle` is empty, or when
/// `start` is past the end or not on a character boundary.
///
/// ```
/// use add_urp::text::find;
///
/// assert_eq!(find("\"Dependencies\": {", "dependencies", 0, true), Some(1));
/// assert_eq!(find("\"Dependencies\": {", "dependencies", 0, false), None);
/// ```
pub fn find(haystack: &str, needle: &str, start: usize, ignore_case: bool) -> Option<usize> {
    if needle.is_empty() || !haystack.is_char_boundary(start) {
        return None;
    }

    let tail = &haystack[start..];
    tail.char_indices()
        .map(|(offset, _)| offset)
        .find(|&offset| matches_at(&tail[offset..], needle, ignore_case))
        .map(|offset| start + offset)
}

fn matches_at(candidate: &str, needle: &str, ignore_case: bool) -> bool {
    if !ignore_case {
        return candidate.starts_with(needle);
    }

    let mut chars = candidate.chars();
    needle.chars().all(|expected| {
        chars
            .next()
            .is_some_and(|actual| chars_eq_ignore_case(actual, expected))
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
