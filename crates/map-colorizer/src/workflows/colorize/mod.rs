//! Recolors province shapes in an SVG map from a territory color mapping.

mod document;
mod encoding;
mod normalizer;
mod report;
mod table;
mod title;

pub use document::{ProvinceShape, SvgDocument, SHAPE_TAGS};
pub use encoding::{decode_svg, declared_encoding, DecodeError};
pub use normalizer::normalize_name;
pub use report::ColorizeReport;
pub use table::{ColorEntry, ColorTable, OverrideEvent};
pub use title::extract_province_name;

use crate::workflows::mapping::MappingDocument;
use indexmap::IndexMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ColorizeError {
    #[error("SVG not found: {}", path.display())]
    SvgNotFound { path: PathBuf },
    #[error("config not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("invalid SVG document {}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Territory '{territory}' is missing the 'color' field")]
    MissingColor { territory: String },
    #[error("malformed mapping document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Loads a mapping document from disk and builds its color table.
pub fn load_color_table(path: &Path) -> Result<ColorTable, ColorizeError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ColorizeError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => ColorizeError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let document = MappingDocument::from_json(&raw).map_err(ValidationError::from)?;
    let table = ColorTable::from_document(&document)?;

    if table.is_empty() {
        info!(path = %path.display(), "mapping lists no provinces; nothing will be recolored");
    } else {
        info!(
            path = %path.display(),
            provinces = table.len(),
            overrides = table.overrides().len(),
            "loaded territory color mapping"
        );
    }
    Ok(table)
}

/// Applies the table's colors to every titled shape and returns the rewritten
/// document with the run's report. Nothing is written to disk.
pub fn colorize_source(
    table: &ColorTable,
    source: &str,
    output_path: &Path,
) -> Result<(String, ColorizeReport), roxmltree::Error> {
    let mut document = SvgDocument::parse(source)?;
    let mut matched: IndexMap<String, ColorEntry> = IndexMap::new();

    for shape in document.province_shapes() {
        let normalized = normalize_name(&shape.province);
        let Some(entry) = table.get(&normalized) else {
            continue;
        };

        document.apply_fill(&shape, &entry.color);
        matched.entry(normalized).or_insert_with(|| ColorEntry {
            label: shape.province.clone(),
            ..entry.clone()
        });
    }

    let elements_recolored = document.edit_count();
    debug!(elements_recolored, "applied fills");

    let missing = table
        .entries()
        .filter(|entry| !matched.contains_key(&entry.normalized))
        .cloned()
        .collect();

    let report = ColorizeReport {
        configured: table.len(),
        matched: matched.into_values().collect(),
        elements_recolored,
        output_path: output_path.to_path_buf(),
        overrides: table.overrides().to_vec(),
        missing,
    };

    Ok((document.render(), report))
}

/// Recolors `svg_path` using the mapping at `config_path` and writes the
/// result to `output_path`, creating parent directories as needed.
///
/// The input may use any ASCII-compatible encoding named in its XML
/// declaration. The output is always UTF-8 and carries no declaration.
pub fn colorize(
    svg_path: &Path,
    config_path: &Path,
    output_path: &Path,
) -> Result<ColorizeReport, ColorizeError> {
    let table = load_color_table(config_path)?;

    if !svg_path.exists() {
        return Err(ColorizeError::SvgNotFound {
            path: svg_path.to_path_buf(),
        });
    }

    let bytes = fs::read(svg_path).map_err(|source| ColorizeError::Io {
        path: svg_path.to_path_buf(),
        source,
    })?;
    let source = decode_svg(&bytes).map_err(|source| ColorizeError::Decode {
        path: svg_path.to_path_buf(),
        source,
    })?;
    let (rendered, report) =
        colorize_source(&table, &source, output_path).map_err(|source| {
            ColorizeError::Document {
                path: svg_path.to_path_buf(),
                source,
            }
        })?;

    write_output(output_path, &rendered)?;
    info!(
        output = %output_path.display(),
        colored = report.provinces_colored(),
        missing = report.missing.len(),
        "wrote recolored map"
    );

    Ok(report)
}

fn write_output(path: &Path, contents: &str) -> Result<(), ColorizeError> {
    let io_error = |source| ColorizeError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, contents).map_err(io_error)
}
