use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Result, Scalar, Selection};

/// Groups of attributes whose change flags the dialogs track together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    Basic,
    Embellishments,
    Baseline,
    LetterSpacing,
    Color,
    Scaling,
    Rotation,
    Axis,
    Appearance,
    Series,
}

/// How a control's reading is compared against the original aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonRule {
    /// Changed iff the control resolves to a value other than the original single value.
    Resolved,
    /// Changed iff the control's set of candidates differs from the original set.
    CandidateSet,
}

/// Attribute layout of one dialog type.
///
/// Implementations are stateless; all methods are associated functions.
pub trait FormatSchema: fmt::Debug {
    type Format: Clone + fmt::Debug;
    type Key: Copy + Ord + fmt::Debug + fmt::Display;

    const NAME: &'static str;

    /// Keys tracked for this selection. Fixed for most schemas; plots expose
    /// one group of series keys per series index present in any plot.
    fn keys(selection: &Selection<Self::Format>) -> Vec<Self::Key>;

    /// `None` when the format has no such attribute (e.g. a missing series).
    fn read(format: &Self::Format, key: Self::Key) -> Option<Scalar>;

    fn write(format: &mut Self::Format, key: Self::Key, value: &Scalar) -> Result<()>;

    fn category(key: Self::Key) -> ChangeCategory;

    fn comparison(_key: Self::Key) -> ComparisonRule {
        ComparisonRule::Resolved
    }

    /// The attribute `key` only has meaning under. Once the governing
    /// attribute changes, any value shown for `key` is written as well,
    /// because objects that did not use `key` before were not aggregated.
    fn governing_key(_key: Self::Key) -> Option<Self::Key> {
        None
    }

    fn parse_key(name: &str) -> Option<Self::Key>;
}

pub type KeyOf<S> = <S as FormatSchema>::Key;
