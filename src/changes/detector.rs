use log::trace;

use crate::aggregate::{AggregateState, AttributeSummary, ComparisonRule, FormatSchema, KeyOf};
use crate::controls::{ControlReadings, RawControlValue};
use crate::model::{Result, Scalar};

use super::{AttributeChange, ChangeSet};

/// Compares live control readings against the aggregate a dialog was populated from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeDetector;

impl ChangeDetector {
    /// Fails with `UnknownAttribute` for a reading the aggregate does not track.
    ///
    /// A resolved reading whose governing attribute changed counts as changed
    /// even when it matches the aggregate.
    pub fn detect<S: FormatSchema>(
        original: &AggregateState<S>,
        current: &ControlReadings<KeyOf<S>>,
    ) -> Result<ChangeSet<KeyOf<S>>> {
        let mut changes = ChangeSet::new();
        for (key, reading) in current.iter() {
            let summary = original.summary(key)?;
            let change = attribute_change(summary, reading, S::comparison(key));
            if change.changed {
                trace!("{} attribute `{key}` changed to {:?}", S::NAME, change.value);
            }
            changes.record(key, S::category(key), change);
        }

        for (key, reading) in current.iter() {
            let governed = S::governing_key(key).is_some_and(|governing| changes.changed(governing));
            if governed && !changes.changed(key) {
                if let Some(value) = reading.resolved() {
                    trace!("{} attribute `{key}` follows its governing attribute", S::NAME);
                    changes.record(
                        key,
                        S::category(key),
                        AttributeChange::changed_to(Some(value.clone())),
                    );
                }
            }
        }
        Ok(changes)
    }
}

/// Change rule for one attribute.
///
/// A reading without a value (blank, invalid or indeterminate) never counts
/// as a change. Under `Resolved`, a concrete value is a change unless the
/// original was that same single value; forcing a conflicting or unset
/// attribute to any value is a change. Under `CandidateSet`, the reading's set
/// of values is compared with the original candidates regardless of size.
pub fn attribute_change(
    original: &AttributeSummary,
    current: &RawControlValue,
    rule: ComparisonRule,
) -> AttributeChange {
    match rule {
        ComparisonRule::Resolved => match current.resolved() {
            Some(value) if original.value.resolved_value() != Some(value) => {
                AttributeChange::changed_to(Some(value.clone()))
            }
            _ => AttributeChange::unchanged(),
        },
        ComparisonRule::CandidateSet => {
            let candidates = current.candidate_set();
            if candidates.is_empty() || same_set(&candidates, &original.candidates) {
                AttributeChange::unchanged()
            } else {
                AttributeChange::changed_to(current.resolved().cloned())
            }
        }
    }
}

fn same_set(left: &[Scalar], right: &[Scalar]) -> bool {
    left.iter().all(|value| right.contains(value)) && right.iter().all(|value| left.contains(value))
}
