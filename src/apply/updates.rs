use std::collections::BTreeMap;

use crate::aggregate::{FormatSchema, KeyOf};
use crate::changes::ChangeSet;
use crate::model::{ObjectId, Result, Selection};

pub type Updates<F> = BTreeMap<ObjectId, F>;

/// New formats for the objects a commit actually modifies.
///
/// Each format is cloned and receives only the changed attributes that carry a
/// value and differ from what the object already has. Attributes are written in
/// key order against the progressively updated format, so a scaling mode
/// written first makes its value attribute writable. Attributes an object does
/// not have (a missing series) are skipped. Objects left identical are omitted;
/// an empty change-set yields an empty map.
pub fn compute_updates<S: FormatSchema>(
    selection: &Selection<S::Format>,
    changes: &ChangeSet<KeyOf<S>>,
) -> Result<Updates<S::Format>> {
    let mut updates = Updates::new();
    if changes.applicable().next().is_none() {
        return Ok(updates);
    }

    for object in selection.iter() {
        let mut format = object.format.clone();
        let mut touched = false;
        for (key, value) in changes.applicable() {
            let differs = S::read(&format, key).is_some_and(|current| current != *value);
            if differs {
                S::write(&mut format, key, value)?;
                touched = true;
            }
        }
        if touched {
            updates.insert(object.id, format);
        }
    }
    Ok(updates)
}
