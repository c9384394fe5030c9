use clap::{Args, Parser};
use map_colorizer::config::{AppConfig, TelemetryConfig};
use map_colorizer::error::AppError;
use map_colorizer::telemetry;
use map_colorizer::workflows::colorize;
use map_colorizer::workflows::suggest;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "colorize-map",
    about = "Colorize map provinces based on a territory-to-color mapping",
    version
)]
pub(crate) struct ColorizeCli {
    #[command(flatten)]
    pub(crate) args: ColorizeArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ColorizeArgs {
    /// Path to the source SVG map
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Path to the territory color JSON file
    #[arg(long)]
    pub(crate) config: PathBuf,
    /// Destination for the recolored SVG
    #[arg(long)]
    pub(crate) output: PathBuf,
}

#[derive(Parser, Debug)]
#[command(
    name = "suggest-names",
    about = "List close label matches for mapped provinces missing from a label dump",
    version
)]
pub(crate) struct SuggestCli {
    /// Label dump to match against (defaults to ./paste.txt)
    #[arg(long)]
    pub(crate) labels: Option<PathBuf>,
    /// Territory color JSON file (defaults to ./territory_colors.json)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

pub(crate) fn run_colorize() -> Result<(), AppError> {
    let ColorizeCli { args } = ColorizeCli::parse();
    telemetry::init(&TelemetryConfig::load())?;

    debug!(input = %args.input.display(), config = %args.config.display(), "colorizing map");
    let report = colorize::colorize(&args.input, &args.config, &args.output)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}")?;
    Ok(())
}

pub(crate) fn run_suggest() -> Result<(), AppError> {
    let cli = SuggestCli::parse();
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(labels) = cli.labels {
        config.suggest.labels_path = labels;
    }
    if let Some(mapping) = cli.config {
        config.suggest.mapping_path = mapping;
    }

    let rows = suggest::run(&config.suggest)?;

    let mut stdout = io::stdout().lock();
    for row in &rows {
        writeln!(stdout, "{row}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn colorize_cli_definition_is_consistent() {
        ColorizeCli::command().debug_assert();
        SuggestCli::command().debug_assert();
    }

    #[test]
    fn colorize_requires_all_three_paths() {
        let err = ColorizeCli::try_parse_from(["colorize-map", "--input", "map.svg"])
            .expect_err("missing flags");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = ColorizeCli::try_parse_from([
            "colorize-map",
            "--input",
            "map.svg",
            "--config",
            "colors.json",
            "--output",
            "out/map.svg",
        ])
        .expect("parses");
        assert_eq!(cli.args.output, PathBuf::from("out/map.svg"));
    }

    #[test]
    fn suggest_paths_are_optional() {
        let cli = SuggestCli::try_parse_from(["suggest-names"]).expect("parses");
        assert!(cli.labels.is_none());
        assert!(cli.config.is_none());
    }
}
