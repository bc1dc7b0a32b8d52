fn main() {
    if let Err(e) = calgrid::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
