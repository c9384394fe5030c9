use regex::Regex;
use std::sync::OnceLock;

fn numbered_title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?P<name>.+?)\s*\(#\d+\)\s*$").expect("valid regex"))
}

/// Recovers the province name from a shape title such as `Paris (#183)`.
/// Titles without a numeric suffix are returned trimmed.
pub fn extract_province_name(title: &str) -> &str {
    let title = title.trim();
    numbered_title_regex()
        .captures(title)
        .and_then(|captures| captures.name("name"))
        .map(|name| name.as_str().trim())
        .unwrap_or(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numeric_suffix() {
        assert_eq!(extract_province_name("Paris (#183)"), "Paris");
        assert_eq!(extract_province_name("  Paris   (#183)  "), "Paris");
        assert_eq!(extract_province_name("Paris(#7)"), "Paris");
    }

    #[test]
    fn keeps_plain_titles() {
        assert_eq!(extract_province_name(" Lyon "), "Lyon");
        assert_eq!(extract_province_name("Lyon (north)"), "Lyon (north)");
    }

    #[test]
    fn only_the_trailing_suffix_is_removed() {
        assert_eq!(extract_province_name("Fort (#1) Annex (#22)"), "Fort (#1) Annex");
        assert_eq!(extract_province_name("Toul (#12) old"), "Toul (#12) old");
    }

    #[test]
    fn suffix_without_name_is_kept_verbatim() {
        assert_eq!(extract_province_name("(#183)"), "(#183)");
        assert_eq!(extract_province_name("Metz (#)"), "Metz (#)");
    }
}
