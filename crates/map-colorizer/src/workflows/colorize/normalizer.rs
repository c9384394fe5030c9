/// Lookup key for a province name: whitespace runs collapsed, trimmed and
/// lowercased. Zero-width characters such as U+200B and U+FEFF are not
/// whitespace and stay part of the key.
pub fn normalize_name(value: &str) -> String {
    let collapsed = value
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapsed.to_lowercase()
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
