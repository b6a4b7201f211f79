use std::path::Path;

use serde::Serialize;

use crate::aggregate::{
    AggregateState, AttributeReport, CharacterSchema, FormatSchema, ImageSchema, PlotSchema,
};
use crate::model::Selection;
use crate::workflow::{DialogKind, load_formats};

use super::Result;

/// What a dialog opened on a selection would show for each attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub dialog: DialogKind,
    pub objects: usize,
    pub attributes: Vec<AttributeReport>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionService;

impl SelectionService {
    pub fn inspect(&self, dialog: DialogKind, path: impl AsRef<Path>) -> Result<SelectionReport> {
        let path = path.as_ref();
        let (objects, attributes) = match dialog {
            DialogKind::Character => summarize::<CharacterSchema>(load_formats(path)?),
            DialogKind::Image => summarize::<ImageSchema>(load_formats(path)?),
            DialogKind::Plot => summarize::<PlotSchema>(load_formats(path)?),
        };
        Ok(SelectionReport {
            dialog,
            objects,
            attributes,
        })
    }
}

fn summarize<S: FormatSchema>(selection: Selection<S::Format>) -> (usize, Vec<AttributeReport>) {
    let aggregate = AggregateState::<S>::build(&selection);
    (selection.len(), aggregate.report())
}
