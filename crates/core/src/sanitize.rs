//! Character denylist applied to free-text fields before validation.

/// Characters removed from every free-text field.
pub const DENYLIST: &[char] = &['<', '>'];

/// Remove every denylisted character, leaving everything else untouched.
///
/// Stripping only ever shortens the input, and the output never contains a
/// denylisted character, so applying it twice is the same as applying it once.
pub fn sanitize_text(input: &str) -> String {
    input.chars().filter(|c| !DENYLIST.contains(c)).collect()
}
