use super::{SinkError, Updates};

/// Receives the formats produced by one commit and records them as a single
/// undoable step.
pub trait UpdateSink<F> {
    fn issue_updates(&mut self, updates: &Updates<F>) -> Result<(), SinkError>;
}

impl<F, T> UpdateSink<F> for T
where
    T: FnMut(&Updates<F>) -> Result<(), SinkError>,
{
    fn issue_updates(&mut self, updates: &Updates<F>) -> Result<(), SinkError> {
        self(updates)
    }
}

/// Sink that keeps every batch it receives.
#[derive(Debug, Clone)]
pub struct RecordingSink<F> {
    batches: Vec<Updates<F>>,
    failure: Option<SinkError>,
}

impl<F> Default for RecordingSink<F> {
    fn default() -> Self {
        Self {
            batches: Vec::new(),
            failure: None,
        }
    }
}

impl<F> RecordingSink<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with `error` instead of recording.
    pub fn fail_next(&mut self, error: SinkError) {
        self.failure = Some(error);
    }

    pub fn batches(&self) -> &[Updates<F>] {
        &self.batches
    }

    pub fn into_batches(self) -> Vec<Updates<F>> {
        self.batches
    }
}

impl<F: Clone> UpdateSink<F> for RecordingSink<F> {
    fn issue_updates(&mut self, updates: &Updates<F>) -> Result<(), SinkError> {
        if let Some(error) = self.failure.take() {
            return Err(error);
        }
        self.batches.push(updates.clone());
        Ok(())
    }
}
