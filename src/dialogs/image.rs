use serde::Serialize;

use crate::aggregate::{AggregateState, ImageAttribute, ImageSchema};
use crate::controls::{ComboBox, Control, ControlReadings, RawControlValue, SpinBox};
use crate::model::{Result, Rotation, Scalar, ScalingMode};

use super::{ControlSurface, Derived};

/// Unit a scaling value is entered in, following its scaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueUnit {
    Points,
    Percent,
}

impl ValueUnit {
    pub fn for_mode(mode: ScalingMode) -> Option<Self> {
        match mode {
            ScalingMode::FixedPoints => Some(Self::Points),
            ScalingMode::Fractional => Some(Self::Percent),
            ScalingMode::Ignored | ScalingMode::AspectRatio => None,
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            Self::Points => 1.0,
            Self::Percent => 100.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Points => " pt",
            Self::Percent => "%",
        }
    }

    fn matches(self, spin_box: &SpinBox) -> bool {
        spin_box.scale() == self.scale() && spin_box.suffix() == self.suffix()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueState {
    pub enabled: bool,
    pub unit: Option<ValueUnit>,
    /// A mode newly set on some object needs a value and none is entered.
    pub missing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageDependent {
    pub horizontal: ValueState,
    pub vertical: ValueState,
    /// Both axes derived from each other; such a format cannot be committed.
    pub aspect_conflict: bool,
}

#[derive(Debug, Clone)]
pub struct ImageControls {
    pub horizontal_mode: ComboBox,
    pub horizontal_value: SpinBox,
    pub vertical_mode: ComboBox,
    pub vertical_value: SpinBox,
    pub rotation: ComboBox,
}

impl Default for ImageControls {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageControls {
    pub fn new() -> Self {
        Self {
            horizontal_mode: ComboBox::new(ScalingMode::ALL),
            horizontal_value: SpinBox::new(0.0, 100_000.0),
            vertical_mode: ComboBox::new(ScalingMode::ALL),
            vertical_value: SpinBox::new(0.0, 100_000.0),
            rotation: ComboBox::new(Rotation::ALL),
        }
    }
}

impl ControlSurface for ImageControls {
    type Schema = ImageSchema;
    type Dependent = ImageDependent;

    // Values must be rendered in the unit of the mode they belong to.
    fn prepare(&mut self, aggregate: &AggregateState<ImageSchema>) {
        let axes = [
            (ImageAttribute::HorizontalMode, &mut self.horizontal_value),
            (ImageAttribute::VerticalMode, &mut self.vertical_value),
        ];
        for (mode_key, value) in axes {
            let unit = aggregate
                .resolved(mode_key)
                .and_then(as_mode)
                .and_then(ValueUnit::for_mode);
            if let Some(unit) = unit {
                value.set_display(unit.scale(), unit.suffix());
            }
        }
    }

    fn keys(&self) -> Vec<ImageAttribute> {
        ImageAttribute::ALL.to_vec()
    }

    fn control(&self, key: ImageAttribute) -> Option<&dyn Control> {
        let control: &dyn Control = match key {
            ImageAttribute::HorizontalMode => &self.horizontal_mode,
            ImageAttribute::HorizontalValue => &self.horizontal_value,
            ImageAttribute::VerticalMode => &self.vertical_mode,
            ImageAttribute::VerticalValue => &self.vertical_value,
            ImageAttribute::Rotation => &self.rotation,
        };
        Some(control)
    }

    fn control_mut(&mut self, key: ImageAttribute) -> Option<&mut dyn Control> {
        let control: &mut dyn Control = match key {
            ImageAttribute::HorizontalMode => &mut self.horizontal_mode,
            ImageAttribute::HorizontalValue => &mut self.horizontal_value,
            ImageAttribute::VerticalMode => &mut self.vertical_mode,
            ImageAttribute::VerticalValue => &mut self.vertical_value,
            ImageAttribute::Rotation => &mut self.rotation,
        };
        Some(control)
    }

    fn derive(
        &self,
        aggregate: &AggregateState<ImageSchema>,
        readings: &mut ControlReadings<ImageAttribute>,
    ) -> Result<Derived<ImageDependent>> {
        let horizontal = value_state(
            aggregate,
            readings,
            ImageAttribute::HorizontalMode,
            ImageAttribute::HorizontalValue,
            &self.horizontal_value,
        );
        let vertical = value_state(
            aggregate,
            readings,
            ImageAttribute::VerticalMode,
            ImageAttribute::VerticalValue,
            &self.vertical_value,
        );
        let aspect_conflict = [ImageAttribute::HorizontalMode, ImageAttribute::VerticalMode]
            .into_iter()
            .all(|key| {
                readings.resolved(key).and_then(as_mode) == Some(ScalingMode::AspectRatio)
            });
        Ok(Derived {
            dependent: ImageDependent {
                horizontal,
                vertical,
                aspect_conflict,
            },
            valid: !aspect_conflict && !horizontal.missing && !vertical.missing,
        })
    }

    fn apply_dependent(&mut self, dependent: &ImageDependent) {
        let axes = [
            (dependent.horizontal, &mut self.horizontal_value),
            (dependent.vertical, &mut self.vertical_value),
        ];
        for (state, value) in axes {
            if let Some(unit) = state.unit {
                value.set_display(unit.scale(), unit.suffix());
            }
            value.set_enabled(state.enabled);
        }
    }
}

/// A value is editable only under a mode that uses one. A value typed under
/// a different unit is about to be cleared, so it reads as blank. Objects
/// switched into a value-using mode keep a stale value unless one is entered.
fn value_state(
    aggregate: &AggregateState<ImageSchema>,
    readings: &mut ControlReadings<ImageAttribute>,
    mode_key: ImageAttribute,
    value_key: ImageAttribute,
    value: &SpinBox,
) -> ValueState {
    let unit = readings
        .resolved(mode_key)
        .and_then(as_mode)
        .and_then(ValueUnit::for_mode);
    let stale = unit.is_none_or(|unit| !unit.matches(value));
    if stale {
        readings.insert(value_key, RawControlValue::Blank);
    }
    let mode_changed = readings
        .resolved(mode_key)
        .is_some_and(|mode| aggregate.resolved(mode_key) != Some(mode));
    let missing = unit.is_some() && mode_changed && readings.resolved(value_key).is_none();
    ValueState {
        enabled: unit.is_some(),
        unit,
        missing,
    }
}

fn as_mode(value: &Scalar) -> Option<ScalingMode> {
    match value {
        Scalar::Scaling(mode) => Some(*mode),
        _ => None,
    }
}
