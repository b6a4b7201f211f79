use std::fmt;

use log::trace;
use serde::Serialize;

use crate::aggregate::{AggregateState, FormatSchema, KeyOf};
use crate::changes::{ChangeDetector, ChangeSet};
use crate::controls::{Control, ControlReadings};
use crate::model::Result;

/// Dependent-control state derived from one set of readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<D> {
    pub dependent: D,
    /// False when the readings combine into a format the dialog must not commit.
    pub valid: bool,
}

/// Everything the controls need after one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan<K, D> {
    pub changes: ChangeSet<K>,
    pub commit_enabled: bool,
    pub dependent: D,
}

impl<K: Ord + Copy, D> RenderPlan<K, D> {
    pub fn values_changed(&self) -> bool {
        self.changes.values_changed()
    }
}

/// The controls of one dialog, held as typed fields.
///
/// `derive` and `recompute` never touch the controls; every control update
/// after an edit comes from `apply_dependent` with the plan they produced.
pub trait ControlSurface {
    type Schema: FormatSchema;
    type Dependent: Clone + fmt::Debug + PartialEq + Serialize;

    /// Sizes dynamic rows and unit displays for a freshly built aggregate.
    fn prepare(&mut self, aggregate: &AggregateState<Self::Schema>);

    /// Keys that currently have a control.
    fn keys(&self) -> Vec<KeyOf<Self::Schema>>;

    fn control(&self, key: KeyOf<Self::Schema>) -> Option<&dyn Control>;

    fn control_mut(&mut self, key: KeyOf<Self::Schema>) -> Option<&mut dyn Control>;

    /// Computes dependent state. Readings the dependent state overrides (a
    /// fallback weight, a disabled field) are replaced in `readings`.
    fn derive(
        &self,
        aggregate: &AggregateState<Self::Schema>,
        readings: &mut ControlReadings<KeyOf<Self::Schema>>,
    ) -> Result<Derived<Self::Dependent>>;

    fn apply_dependent(&mut self, dependent: &Self::Dependent);

    fn render(&mut self, aggregate: &AggregateState<Self::Schema>) -> Result<()> {
        self.prepare(aggregate);
        for key in self.keys() {
            let summary = aggregate.summary(key)?;
            if let Some(control) = self.control_mut(key) {
                control.render(summary);
            }
        }
        Ok(())
    }

    fn read(&self) -> ControlReadings<KeyOf<Self::Schema>> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.control(key).map(|control| (key, control.read())))
            .collect()
    }

    fn recompute(
        &self,
        aggregate: &AggregateState<Self::Schema>,
        mut readings: ControlReadings<KeyOf<Self::Schema>>,
    ) -> Result<RenderPlan<KeyOf<Self::Schema>, Self::Dependent>> {
        let derived = self.derive(aggregate, &mut readings)?;
        let changes = ChangeDetector::detect(aggregate, &readings)?;
        let commit_enabled = changes.values_changed() && derived.valid;
        trace!(
            "{} recompute: changed={} valid={}",
            <Self::Schema as FormatSchema>::NAME,
            changes.values_changed(),
            derived.valid
        );
        Ok(RenderPlan {
            changes,
            commit_enabled,
            dependent: derived.dependent,
        })
    }
}
