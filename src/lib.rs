pub mod cli;
pub mod gesture;
pub mod history;
pub mod model;
pub mod session;
pub mod surface;
pub mod viewport;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
