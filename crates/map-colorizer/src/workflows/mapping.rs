//! The territory color mapping document read by both tools.
//!
//! ```json
//! {
//!   "France": { "color": "#1f4fa8", "provinces": ["Paris", "Orleans"] },
//!   "Burgundy": { "color": "#8a2b2b", "provinces": ["Dijon"] }
//! }
//! ```
//!
//! Territory order is kept as written so reports list entries in file order.

use indexmap::IndexMap;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MappingDocument {
    pub territories: IndexMap<String, TerritoryPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerritoryPayload {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub provinces: Vec<String>,
}

impl MappingDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TerritoryPayload)> {
        self.territories
            .iter()
            .map(|(territory, payload)| (territory.as_str(), payload))
    }
}

impl TerritoryPayload {
    /// The configured color, treating an empty string like an absent one.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref().filter(|color| !color.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_territory_order_from_the_file() {
        let doc = MappingDocument::from_json(
            r##"{"Zeta": {"color": "#000"}, "Alpha": {"color": "#fff", "provinces": ["A"]}}"##,
        )
        .expect("valid mapping");
        let names: Vec<&str> = doc.iter().map(|(territory, _)| territory).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[test]
    fn provinces_default_to_empty() {
        let doc = MappingDocument::from_json(r##"{"Zeta": {"color": "#000"}}"##)
            .expect("valid mapping");
        let (_, payload) = doc.iter().next().expect("one territory");
        assert!(payload.provinces.is_empty());
        assert_eq!(payload.color(), Some("#000"));
    }

    #[test]
    fn empty_color_counts_as_missing() {
        let doc = MappingDocument::from_json(r#"{"Zeta": {"color": "", "provinces": ["A"]}}"#)
            .expect("valid mapping");
        let (_, payload) = doc.iter().next().expect("one territory");
        assert_eq!(payload.color(), None);
    }

    #[test]
    fn rejects_non_object_payloads() {
        assert!(MappingDocument::from_json(r#"{"Zeta": ["A"]}"#).is_err());
        assert!(MappingDocument::from_json("[]").is_err());
    }
}
