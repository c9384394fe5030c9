mod cli;

use map_colorizer::error::AppError;

pub fn run_colorize() -> Result<(), AppError> {
    cli::run_colorize()
}

pub fn run_suggest() -> Result<(), AppError> {
    cli::run_suggest()
}
