use log::{debug, warn};
use serde::Serialize;

use crate::aggregate::{FormatSchema, KeyOf};
use crate::changes::ChangeSet;
use crate::model::Selection;

use super::{Result, UpdateSink, Updates, compute_updates};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "updates", rename_all = "snake_case")]
pub enum CommitOutcome<F> {
    /// The sink received these formats as one batch.
    Issued(Updates<F>),
    /// No object would change; the sink was not called.
    NothingToApply,
}

impl<F> CommitOutcome<F> {
    pub fn updated_count(&self) -> usize {
        match self {
            Self::Issued(updates) => updates.len(),
            Self::NothingToApply => 0,
        }
    }
}

/// Turns a change-set into exactly one sink call per commit.
#[derive(Debug, Clone, Default)]
pub struct ApplyCoordinator {
    issued: usize,
}

impl ApplyCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batches the sink has accepted.
    pub fn issued(&self) -> usize {
        self.issued
    }

    pub fn commit<S: FormatSchema>(
        &mut self,
        selection: &Selection<S::Format>,
        changes: &ChangeSet<KeyOf<S>>,
        sink: &mut dyn UpdateSink<S::Format>,
    ) -> Result<CommitOutcome<S::Format>> {
        let updates = compute_updates::<S>(selection, changes)?;
        if updates.is_empty() {
            debug!("{} commit: nothing to apply", S::NAME);
            return Ok(CommitOutcome::NothingToApply);
        }

        if let Err(error) = sink.issue_updates(&updates) {
            warn!("{} commit of {} objects failed: {error}", S::NAME, updates.len());
            return Err(error.into());
        }
        self.issued += 1;
        debug!("{} commit issued updates for {} objects", S::NAME, updates.len());
        Ok(CommitOutcome::Issued(updates))
    }
}
