use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::aggregate::FormatSchema;
use crate::apply::RecordingSink;
use crate::controls::FontCatalog;
use crate::dialogs::{
    CharacterControls, ControlSurface, DialogSession, ImageControls, PlotControls,
};
use crate::settings::SettingsStore;

use super::script::decode_selection;
use super::{DialogKind, EditScript, Result, ScriptStep, SessionReport, StepReport};

type FormatOf<C> = <<C as ControlSurface>::Schema as FormatSchema>::Format;

/// Replays `script` against a fresh dialog session.
///
/// Failing steps are recorded in the report and replay continues, the way a
/// user keeps interacting after a rejected click. Preferences are restored
/// from `settings` before the first step and stored after the last.
pub fn run_script(
    script: &EditScript,
    catalog: Arc<dyn FontCatalog>,
    settings: Option<&mut dyn SettingsStore>,
) -> Result<SessionReport> {
    script.validate()?;
    match script.dialog {
        DialogKind::Character => {
            let session = DialogSession::new(
                CharacterControls::new(catalog),
                decode_selection(&script.selection)?,
            );
            replay(session, script, settings)
        }
        DialogKind::Image => {
            let session =
                DialogSession::new(ImageControls::new(), decode_selection(&script.selection)?);
            replay(session, script, settings)
        }
        DialogKind::Plot => {
            let session =
                DialogSession::new(PlotControls::new(), decode_selection(&script.selection)?);
            replay(session, script, settings)
        }
    }
}

fn replay<C>(
    mut session: DialogSession<C>,
    script: &EditScript,
    settings: Option<&mut dyn SettingsStore>,
) -> Result<SessionReport>
where
    C: ControlSurface,
    FormatOf<C>: Serialize + DeserializeOwned,
{
    let group = script.settings_group();
    if let Some(store) = settings.as_deref() {
        session.restore_preferences(store, group)?;
    }

    let mut sink = RecordingSink::new();
    let mut steps = Vec::with_capacity(script.steps.len());
    for (index, step) in script.steps.iter().enumerate() {
        let started = Instant::now();
        let outcome = perform(&mut session, step, &mut sink);
        let duration_ms = started.elapsed().as_millis();
        if let Err(error) = &outcome {
            warn!("step {index} ({}) failed: {error}", step.describe());
        }
        let changed = session
            .changes()
            .map(|changes| changes.changed_keys().map(|key| key.to_string()).collect())
            .unwrap_or_default();
        let (updated, error) = match outcome {
            Ok(updated) => (updated, None),
            Err(error) => (0, Some(error.to_string())),
        };
        steps.push(StepReport {
            step: step.describe(),
            duration_ms,
            state: session.state(),
            commit_enabled: session.commit_enabled(),
            changed,
            updated,
            error,
        });
    }

    if let Some(store) = settings {
        session.store_preferences(store, group)?;
    }

    let issued = sink
        .into_batches()
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let report = SessionReport {
        script_name: script.name.clone(),
        dialog: script.dialog,
        steps,
        final_state: session.state(),
        issued,
        final_selection: serde_json::to_value(session.selection())?,
        aggregate: session.aggregate().report(),
        preferences: session.preferences().clone(),
    };
    info!(
        "{} script finished: {} steps, {} failed, {} batches issued",
        script.dialog,
        report.steps.len(),
        report.failed_steps(),
        report.issued.len()
    );
    Ok(report)
}

/// Runs one step and returns the number of objects it wrote.
fn perform<C>(
    session: &mut DialogSession<C>,
    step: &ScriptStep,
    sink: &mut RecordingSink<FormatOf<C>>,
) -> Result<usize>
where
    C: ControlSurface,
    FormatOf<C>: DeserializeOwned,
{
    match step {
        ScriptStep::Show => {
            session.show()?;
            Ok(0)
        }
        ScriptStep::Select { selection } => {
            session.set_selection(decode_selection(selection)?)?;
            Ok(0)
        }
        ScriptStep::Edit { attribute, edit } => {
            session.edit_attribute(attribute, edit)?;
            Ok(0)
        }
        ScriptStep::Page { page } => {
            session.preferences_mut().page = Some(page.clone());
            Ok(0)
        }
        ScriptStep::Resize { geometry } => {
            session.preferences_mut().geometry = Some(*geometry);
            Ok(0)
        }
        ScriptStep::Apply => Ok(session.apply(sink)?.updated_count()),
        ScriptStep::Accept => Ok(session.accept(sink)?.updated_count()),
        ScriptStep::Reject => {
            session.reject()?;
            Ok(0)
        }
    }
}
