mod change_set;
mod detector;


pub use change_set::{AttributeChange, ChangeSet};
pub use detector::{ChangeDetector, attribute_change};
