use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateState, FormatSchema, KeyOf};
use crate::apply::{ApplyCoordinator, CommitOutcome, UpdateSink};
use crate::changes::ChangeSet;
use crate::controls::{ControlEdit, Result as ControlResult};
use crate::model::Selection;
use crate::settings::{DialogPreferences, SettingsStore};

use super::{ControlSurface, DialogError, RenderPlan, Result};

type SchemaOf<C> = <C as ControlSurface>::Schema;
type FormatOf<C> = <SchemaOf<C> as FormatSchema>::Format;
type PlanOf<C> = RenderPlan<KeyOf<SchemaOf<C>>, <C as ControlSurface>::Dependent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing pending; commit disabled.
    Clean,
    /// At least one attribute changed.
    Dirty,
    Closed(CloseReason),
}

/// One open format dialog: its controls, the selection it edits, and the
/// aggregate the controls were populated from.
///
/// A selection supplied before `show` is populated when the dialog is shown;
/// afterwards every new selection repopulates immediately.
#[derive(Debug)]
pub struct DialogSession<C: ControlSurface> {
    controls: C,
    selection: Selection<FormatOf<C>>,
    aggregate: AggregateState<SchemaOf<C>>,
    plan: Option<PlanOf<C>>,
    state: SessionState,
    visible: bool,
    population_pending: bool,
    coordinator: ApplyCoordinator,
    preferences: DialogPreferences,
}

impl<C: ControlSurface> DialogSession<C> {
    pub fn new(controls: C, selection: Selection<FormatOf<C>>) -> Self {
        let aggregate = AggregateState::build(&selection);
        Self {
            controls,
            selection,
            aggregate,
            plan: None,
            state: SessionState::Clean,
            visible: false,
            population_pending: true,
            coordinator: ApplyCoordinator::new(),
            preferences: DialogPreferences::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn selection(&self) -> &Selection<FormatOf<C>> {
        &self.selection
    }

    pub fn aggregate(&self) -> &AggregateState<SchemaOf<C>> {
        &self.aggregate
    }

    /// The plan from the latest interaction; `None` until the dialog is shown.
    pub fn plan(&self) -> Option<&PlanOf<C>> {
        self.plan.as_ref()
    }

    pub fn changes(&self) -> Option<&ChangeSet<KeyOf<SchemaOf<C>>>> {
        self.plan.as_ref().map(|plan| &plan.changes)
    }

    pub fn commit_enabled(&self) -> bool {
        self.plan.as_ref().is_some_and(|plan| plan.commit_enabled)
    }

    /// Batches issued to the sink over the session's lifetime.
    pub fn issued(&self) -> usize {
        self.coordinator.issued()
    }

    pub fn preferences(&self) -> &DialogPreferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut DialogPreferences {
        &mut self.preferences
    }

    pub fn restore_preferences(&mut self, store: &dyn SettingsStore, group: &str) -> Result<()> {
        self.preferences = DialogPreferences::load(store, group)?;
        Ok(())
    }

    pub fn store_preferences(&self, store: &mut dyn SettingsStore, group: &str) -> Result<()> {
        self.preferences.save(store, group)?;
        Ok(())
    }

    pub fn set_selection(&mut self, selection: Selection<FormatOf<C>>) -> Result<()> {
        self.ensure_open()?;
        self.aggregate = AggregateState::build(&selection);
        self.selection = selection;
        if self.visible {
            self.populate()
        } else {
            self.population_pending = true;
            Ok(())
        }
    }

    pub fn show(&mut self) -> Result<&PlanOf<C>> {
        self.ensure_open()?;
        self.visible = true;
        if self.population_pending || self.plan.is_none() {
            self.populate()?;
        }
        self.plan.as_ref().ok_or(DialogError::NotVisible)
    }

    /// Runs one interaction against the controls, then recomputes the plan.
    ///
    /// The plan is recomputed even when `change` fails part-way, so the
    /// controls never drift from it.
    pub fn edit<R>(&mut self, change: impl FnOnce(&mut C) -> ControlResult<R>) -> Result<R> {
        self.ensure_interactive()?;
        let outcome = change(&mut self.controls);
        self.refresh()?;
        Ok(outcome?)
    }

    /// Applies `edit` to the control bound to the attribute called `name`.
    pub fn edit_attribute(&mut self, name: &str, edit: &ControlEdit) -> Result<()> {
        self.ensure_interactive()?;
        let key = <SchemaOf<C> as FormatSchema>::parse_key(name)
            .filter(|key| self.controls.control(*key).is_some())
            .ok_or_else(|| DialogError::NoControl(name.to_string()))?;
        self.edit(|controls| match controls.control_mut(key) {
            Some(control) => control.edit(edit),
            None => Ok(()),
        })
    }

    /// Issues the pending changes and closes the dialog.
    pub fn accept(
        &mut self,
        sink: &mut dyn UpdateSink<FormatOf<C>>,
    ) -> Result<CommitOutcome<FormatOf<C>>> {
        let outcome = self.commit(sink)?;
        self.close(CloseReason::Accepted);
        Ok(outcome)
    }

    /// Issues the pending changes and keeps the dialog open on the applied formats.
    pub fn apply(
        &mut self,
        sink: &mut dyn UpdateSink<FormatOf<C>>,
    ) -> Result<CommitOutcome<FormatOf<C>>> {
        let outcome = self.commit(sink)?;
        if let CommitOutcome::Issued(updates) = &outcome {
            self.selection = self.selection.with_updates(updates);
        }
        self.aggregate = AggregateState::build(&self.selection);
        self.populate()?;
        Ok(outcome)
    }

    pub fn reject(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.close(CloseReason::Rejected);
        Ok(())
    }

    fn commit(
        &mut self,
        sink: &mut dyn UpdateSink<FormatOf<C>>,
    ) -> Result<CommitOutcome<FormatOf<C>>> {
        self.ensure_interactive()?;
        let plan = match &self.plan {
            Some(plan) if plan.commit_enabled => plan,
            _ => return Err(DialogError::CommitDisabled),
        };
        Ok(self
            .coordinator
            .commit::<SchemaOf<C>>(&self.selection, &plan.changes, sink)?)
    }

    fn populate(&mut self) -> Result<()> {
        self.controls.render(&self.aggregate)?;
        self.population_pending = false;
        self.refresh()?;
        debug!(
            "{} dialog populated from {} objects",
            <SchemaOf<C> as FormatSchema>::NAME,
            self.selection.len()
        );
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        let readings = self.controls.read();
        let plan = self.controls.recompute(&self.aggregate, readings)?;
        self.controls.apply_dependent(&plan.dependent);
        self.state = if plan.values_changed() {
            SessionState::Dirty
        } else {
            SessionState::Clean
        };
        self.plan = Some(plan);
        Ok(())
    }

    fn close(&mut self, reason: CloseReason) {
        info!("{} dialog closed: {reason:?}", <SchemaOf<C> as FormatSchema>::NAME);
        self.state = SessionState::Closed(reason);
        self.visible = false;
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            SessionState::Closed(_) => Err(DialogError::Closed),
            SessionState::Clean | SessionState::Dirty => Ok(()),
        }
    }

    fn ensure_interactive(&self) -> Result<()> {
        self.ensure_open()?;
        if self.visible {
            Ok(())
        } else {
            Err(DialogError::NotVisible)
        }
    }
}
