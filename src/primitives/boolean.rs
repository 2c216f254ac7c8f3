/// Recognize `true` / `false`, ignoring case, surrounding whitespace and
/// trailing NUL characters.
pub(crate) fn parse(text: &str) -> Option<bool> {
    let trimmed = text.trim_end_matches('\0').trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
