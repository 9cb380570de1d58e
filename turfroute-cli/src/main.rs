//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = turfroute_cli::run() {
        eprintln!("turfroute: {err}");
        std::process::exit(1);
    }
}
