use super::table::{ColorEntry, OverrideEvent};
use std::fmt;
use std::path::PathBuf;

/// Outcome of one colorize run.
#[derive(Debug, Clone)]
pub struct ColorizeReport {
    pub configured: usize,
    /// Normalized names that were recolored, with the rule that colored them.
    pub matched: Vec<ColorEntry>,
    pub elements_recolored: usize,
    pub output_path: PathBuf,
    pub overrides: Vec<OverrideEvent>,
    pub missing: Vec<ColorEntry>,
}

impl ColorizeReport {
    pub fn provinces_colored(&self) -> usize {
        self.matched.len()
    }

    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for ColorizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configured provinces: {}", self.configured)?;
        writeln!(f, "Unique provinces colored: {}", self.provinces_colored())?;
        writeln!(f, "SVG elements recolored: {}", self.elements_recolored)?;
        writeln!(f, "Output written to: {}", self.output_path.display())?;

        if !self.overrides.is_empty() {
            writeln!(
                f,
                "\nNote: duplicate province entries detected (later entries override earlier ones):"
            )?;
            for event in &self.overrides {
                writeln!(
                    f,
                    "  - {}: {} -> {}",
                    event.province, event.old_territory, event.new_territory
                )?;
            }
        }

        if self.missing.is_empty() {
            writeln!(f, "\nAll configured provinces were found in the SVG.")
        } else {
            writeln!(f, "\nUnmapped provinces (in config but not found in SVG):")?;
            for entry in &self.missing {
                writeln!(f, "  - {} (territory: {})", entry.label, entry.territory)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, territory: &str) -> ColorEntry {
        ColorEntry {
            normalized: label.to_lowercase(),
            label: label.to_string(),
            territory: territory.to_string(),
            color: "#123456".to_string(),
        }
    }

    #[test]
    fn renders_counts_overrides_and_missing() {
        let report = ColorizeReport {
            configured: 3,
            matched: vec![entry("Paris", "Burgundy")],
            elements_recolored: 2,
            output_path: PathBuf::from("out/map.svg"),
            overrides: vec![OverrideEvent {
                province: "Paris".to_string(),
                new_territory: "Burgundy".to_string(),
                old_territory: "France".to_string(),
            }],
            missing: vec![entry("Lyon", "France"), entry("Dijon", "Burgundy")],
        };

        assert_eq!(
            report.to_string(),
            "Configured provinces: 3\n\
             Unique provinces colored: 1\n\
             SVG elements recolored: 2\n\
             Output written to: out/map.svg\n\
             \n\
             Note: duplicate province entries detected (later entries override earlier ones):\n\
             \x20 - Paris: France -> Burgundy\n\
             \n\
             Unmapped provinces (in config but not found in SVG):\n\
             \x20 - Lyon (territory: France)\n\
             \x20 - Dijon (territory: Burgundy)\n"
        );
    }

    #[test]
    fn empty_run_confirms_everything_was_found() {
        let report = ColorizeReport {
            configured: 0,
            matched: Vec::new(),
            elements_recolored: 0,
            output_path: PathBuf::from("map.svg"),
            overrides: Vec::new(),
            missing: Vec::new(),
        };

        assert!(report.all_found());
        assert_eq!(
            report.to_string(),
            "Configured provinces: 0\n\
             Unique provinces colored: 0\n\
             SVG elements recolored: 0\n\
             Output written to: map.svg\n\
             \n\
             All configured provinces were found in the SVG.\n"
        );
    }
}
