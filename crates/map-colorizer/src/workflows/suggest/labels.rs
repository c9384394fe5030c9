use std::collections::BTreeSet;
use std::io::BufRead;

const LABEL_MARKER: &str = " (#";

/// Distinct province names from a label dump such as `Paris (#183)`, sorted.
/// Lines without the ` (#` marker are ignored.
pub fn parse_labels<R: BufRead>(reader: R) -> std::io::Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        if !line.contains(LABEL_MARKER) {
            continue;
        }
        let trimmed = line.trim();
        let name = trimmed
            .split_once(LABEL_MARKER)
            .map(|(name, _)| name)
            .unwrap_or(trimmed);
        names.insert(name.to_string());
    }
    Ok(names)
}
