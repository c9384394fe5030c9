use map_colorizer_cli::run_colorize;

fn main() {
    if let Err(err) = run_colorize() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
