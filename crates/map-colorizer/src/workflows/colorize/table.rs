use super::normalizer::normalize_name;
use super::ValidationError;
use crate::workflows::mapping::MappingDocument;
use indexmap::IndexMap;
use tracing::debug;

/// One province coloring rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub normalized: String,
    pub label: String,
    pub territory: String,
    pub color: String,
}

/// A province listed again by a later territory, which takes it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEvent {
    pub province: String,
    pub new_territory: String,
    pub old_territory: String,
}

/// Province rules keyed by normalized name, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: IndexMap<String, ColorEntry>,
    overrides: Vec<OverrideEvent>,
}

impl ColorTable {
    pub fn from_document(document: &MappingDocument) -> Result<Self, ValidationError> {
        let mut table = Self::default();

        for (territory, payload) in document.iter() {
            let color = payload
                .color()
                .ok_or_else(|| ValidationError::MissingColor {
                    territory: territory.to_string(),
                })?;

            for province in &payload.provinces {
                table.insert(province, territory, color);
            }
        }

        Ok(table)
    }

    fn insert(&mut self, province: &str, territory: &str, color: &str) {
        let normalized = normalize_name(province);
        if normalized.is_empty() {
            return;
        }

        if let Some(previous) = self.entries.get(&normalized) {
            debug!(
                province,
                old = %previous.territory,
                new = territory,
                "province listed by more than one territory"
            );
            self.overrides.push(OverrideEvent {
                province: province.to_string(),
                new_territory: territory.to_string(),
                old_territory: previous.territory.clone(),
            });
        }

        // Replacing an existing key keeps its original position.
        self.entries.insert(
            normalized.clone(),
            ColorEntry {
                normalized,
                label: province.to_string(),
                territory: territory.to_string(),
                color: color.to_string(),
            },
        );
    }

    pub fn get(&self, normalized: &str) -> Option<&ColorEntry> {
        self.entries.get(normalized)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.values()
    }

    pub fn overrides(&self) -> &[OverrideEvent] {
        &self.overrides
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
