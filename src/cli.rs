mod runner;
mod script;
mod types;

#[cfg(test)]
mod tests;

pub use runner::{replay, run_cli};
pub use script::{CollectingHost, Finish, ReplayError, ReplayReport, ReplayScript, load_script};
