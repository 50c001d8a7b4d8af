fn main() {
    env_logger::init();

    if let Err(error) = mask_editor::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
