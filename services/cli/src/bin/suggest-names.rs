use map_colorizer_cli::run_suggest;

fn main() {
    if let Err(err) = run_suggest() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
