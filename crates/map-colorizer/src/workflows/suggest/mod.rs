//! Suggests known labels for mapping entries that do not appear in a label dump.

mod labels;
mod similarity;

pub use labels::parse_labels;
pub use similarity::{close_matches, similarity_ratio};

use crate::config::SuggestConfig;
use crate::workflows::mapping::MappingDocument;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed mapping document {}: {source}", path.display())]
    Mapping {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cutoff must be in [0.0, 1.0], got {0}")]
    InvalidCutoff(f64),
    #[error("suggestion limit must be positive")]
    InvalidLimit,
}

/// One mapping entry missing from the label dump, with its nearest labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRow {
    pub territory: String,
    pub province: String,
    pub matches: Vec<String>,
}

impl fmt::Display for SuggestionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matches = if self.matches.is_empty() {
            "\u{2014}".to_string()
        } else {
            self.matches.join(", ")
        };
        write!(
            f,
            "{:25} | {:20} -> {}",
            self.territory, self.province, matches
        )
    }
}

/// Rows for every province whose exact name is absent from `labels`, in
/// mapping order.
pub fn suggest(
    labels: &BTreeSet<String>,
    mapping: &MappingDocument,
    limit: usize,
    cutoff: f64,
) -> Result<Vec<SuggestionRow>, SuggestError> {
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(SuggestError::InvalidCutoff(cutoff));
    }
    if limit == 0 {
        return Err(SuggestError::InvalidLimit);
    }

    let mut rows = Vec::new();
    for (territory, payload) in mapping.iter() {
        for province in &payload.provinces {
            if labels.contains(province) {
                continue;
            }
            let matches = close_matches(
                province,
                labels.iter().map(String::as_str),
                limit,
                cutoff,
            );
            debug!(territory, province = %province, candidates = matches.len(), "unmatched province");
            rows.push(SuggestionRow {
                territory: territory.to_string(),
                province: province.clone(),
                matches: matches.into_iter().map(str::to_string).collect(),
            });
        }
    }
    Ok(rows)
}

/// Reads the label dump and mapping named by `config` and ranks suggestions.
pub fn run(config: &SuggestConfig) -> Result<Vec<SuggestionRow>, SuggestError> {
    let labels = File::open(&config.labels_path)
        .and_then(|file| parse_labels(BufReader::new(file)))
        .map_err(|source| SuggestError::Io {
            path: config.labels_path.clone(),
            source,
        })?;

    let mapping = File::open(&config.mapping_path)
        .map_err(|source| SuggestError::Io {
            path: config.mapping_path.clone(),
            source,
        })
        .and_then(|file| {
            MappingDocument::from_reader(BufReader::new(file)).map_err(|source| {
                SuggestError::Mapping {
                    path: config.mapping_path.clone(),
                    source,
                }
            })
        })?;

    info!(
        labels = labels.len(),
        territories = mapping.territories.len(),
        "loaded suggestion inputs"
    );
    suggest(&labels, &mapping, config.limit, config.cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn verbatim_names_produce_no_row() {
        let mapping = MappingDocument::from_json(
            r##"{"France": {"color": "#00f", "provinces": ["Paris", "Lyon"]}}"##,
        )
        .expect("valid mapping");
        let rows = suggest(&labels(&["Paris", "Lyon", "Dijon"]), &mapping, 5, 0.6)
            .expect("suggests");
        assert!(rows.is_empty());
    }

    #[test]
    fn near_names_are_listed_and_misses_use_a_dash() {
        let mapping = MappingDocument::from_json(
            r##"{"France": {"provinces": ["Pariss", "paris", "Qwerty"]}}"##,
        )
        .expect("valid mapping");
        let rows = suggest(&labels(&["Paris", "Lyon"]), &mapping, 5, 0.6).expect("suggests");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matches, ["Paris"]);
        assert_eq!(rows[1].matches, ["Paris"]);
        assert!(rows[2].matches.is_empty());
        assert_eq!(
            rows[2].to_string(),
            "France                    | Qwerty               -> \u{2014}"
        );
        assert_eq!(
            rows[0].to_string(),
            "France                    | Pariss               -> Paris"
        );
    }

    #[test]
    fn rejects_out_of_range_cutoff() {
        let mapping = MappingDocument::default();
        let err = suggest(&labels(&[]), &mapping, 5, 1.2).expect_err("invalid cutoff");
        assert!(matches!(err, SuggestError::InvalidCutoff(_)));
    }
}
