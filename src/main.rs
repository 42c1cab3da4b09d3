fn main() {
    if let Err(err) = roadmap_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
