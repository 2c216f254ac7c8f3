/// Accept exactly one Unicode scalar value. No trimming.
pub(crate) fn parse(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    if chars.next().is_some() { None } else { Some(first) }
}
