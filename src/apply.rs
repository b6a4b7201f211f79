mod coordinator;
mod error;
mod sink;
mod updates;


pub use coordinator::{ApplyCoordinator, CommitOutcome};
pub use error::{ApplyError, Result, SinkError};
pub use sink::{RecordingSink, UpdateSink};
pub use updates::{Updates, compute_updates};
