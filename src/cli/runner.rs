use clap::Parser;
use serde::Serialize;

use crate::runtime::AppContext;
use crate::settings::SettingsStore;

use super::types::{Cli, Commands};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Inspect { dialog, selection } => {
            let report = app
                .selection_service()
                .inspect(dialog.into(), &selection)
                .map_err(|error| error.to_string())?;
            print_json(&report)?;
        }
        Commands::Run {
            script,
            catalog,
            report,
            settings,
        } => {
            let script = app
                .script_service()
                .load(&script)
                .map_err(|error| error.to_string())?;
            let catalog = app
                .catalog_service()
                .load(catalog.as_deref())
                .map_err(|error| error.to_string())?;
            let mut store = settings
                .map(|path| app.settings_service().open(path))
                .transpose()
                .map_err(|error| error.to_string())?;
            let session_report = app
                .script_service()
                .run(
                    &script,
                    catalog,
                    store.as_mut().map(|store| store as &mut dyn SettingsStore),
                )
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                app.script_service()
                    .save_report(report_path, &session_report)
                    .map_err(|error| error.to_string())?;
            }
            print_json(&session_report)?;
        }
        Commands::Weights {
            catalog,
            family,
            size,
            weight,
        } => {
            let catalog = app
                .catalog_service()
                .load(catalog.as_deref())
                .map_err(|error| error.to_string())?;
            let resolution =
                app.catalog_service()
                    .resolve_weight(catalog.as_ref(), &family, size, weight);
            print_json(&resolution)?;
        }
    }

    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}
