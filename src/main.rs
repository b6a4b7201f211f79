fn main() {
    env_logger::init();

    if let Err(error) = format_reconciler::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
