pub mod aggregate;
pub mod apply;
pub mod changes;
pub mod cli;
pub mod controls;
pub mod dialogs;
pub mod model;
pub mod runtime;
pub mod settings;
pub mod workflow;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
