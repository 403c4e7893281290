fn main() {
    if let Err(e) = ctd_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
