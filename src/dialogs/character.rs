use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::aggregate::{AggregateState, CharacterAttribute, CharacterSchema, FormatSchema};
use crate::changes::attribute_change;
use crate::controls::{
    CheckBox, ColorButton, ComboBox, Control, ControlReadings, FontCatalog, RawControlValue,
    SpinBox, StaticFontCatalog,
};
use crate::model::{
    BaselinePosition, CharacterFormat, FontWeight, Result, Scalar, nearest_supported_weight,
};

use super::{ControlSurface, Derived};

type Readings = ControlReadings<CharacterAttribute>;

/// Selectable weights, the weight left selected after fallback, and the
/// sample-text format built from the current readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterDependent {
    pub weights: Vec<FontWeight>,
    pub weight: Option<FontWeight>,
    pub preview: CharacterFormat,
}

#[derive(Debug, Clone)]
pub struct CharacterControls {
    pub family: ComboBox,
    pub size: SpinBox,
    pub weight: ComboBox,
    pub italic: CheckBox,
    pub underline: CheckBox,
    pub overline: CheckBox,
    pub strikethrough: CheckBox,
    pub baseline: ComboBox,
    pub font_color: ColorButton,
    pub background_color: ColorButton,
    pub letter_spacing: SpinBox,
    catalog: Arc<dyn FontCatalog>,
}

impl Default for CharacterControls {
    fn default() -> Self {
        Self::new(Arc::new(StaticFontCatalog::default()))
    }
}

impl CharacterControls {
    pub fn new(catalog: Arc<dyn FontCatalog>) -> Self {
        Self {
            family: ComboBox::default().editable(),
            size: SpinBox::new(1.0, 1638.0).with_display(1.0, " pt"),
            weight: ComboBox::default(),
            italic: CheckBox::new(),
            underline: CheckBox::new(),
            overline: CheckBox::new(),
            strikethrough: CheckBox::new(),
            baseline: ComboBox::new(BaselinePosition::ALL),
            font_color: ColorButton::new(),
            background_color: ColorButton::new(),
            letter_spacing: SpinBox::percentage(-100.0, 1000.0),
            catalog,
        }
    }

    pub fn catalog(&self) -> &dyn FontCatalog {
        self.catalog.as_ref()
    }

    /// Union of the weights every candidate family offers at every candidate size.
    fn catalog_weights(&self, families: &[String], sizes: &[f64]) -> Vec<FontWeight> {
        if families.is_empty() {
            return FontWeight::ALL.to_vec();
        }
        let default_size = [CharacterFormat::default().font_size];
        let sizes = if sizes.is_empty() { &default_size[..] } else { sizes };
        families
            .iter()
            .flat_map(move |family| {
                sizes
                    .iter()
                    .flat_map(move |size| self.catalog.supported_weights(family, *size))
            })
            .collect()
    }
}

impl ControlSurface for CharacterControls {
    type Schema = CharacterSchema;
    type Dependent = CharacterDependent;

    fn prepare(&mut self, _aggregate: &AggregateState<CharacterSchema>) {
        let families = self.catalog.families().into_iter().map(Scalar::Text).collect();
        self.family.set_choices(families);
    }

    fn keys(&self) -> Vec<CharacterAttribute> {
        CharacterAttribute::ALL.to_vec()
    }

    fn control(&self, key: CharacterAttribute) -> Option<&dyn Control> {
        let control: &dyn Control = match key {
            CharacterAttribute::FontFamily => &self.family,
            CharacterAttribute::FontSize => &self.size,
            CharacterAttribute::FontWeight => &self.weight,
            CharacterAttribute::Italic => &self.italic,
            CharacterAttribute::Underline => &self.underline,
            CharacterAttribute::Overline => &self.overline,
            CharacterAttribute::Strikethrough => &self.strikethrough,
            CharacterAttribute::Baseline => &self.baseline,
            CharacterAttribute::FontColor => &self.font_color,
            CharacterAttribute::BackgroundColor => &self.background_color,
            CharacterAttribute::LetterSpacing => &self.letter_spacing,
        };
        Some(control)
    }

    fn control_mut(&mut self, key: CharacterAttribute) -> Option<&mut dyn Control> {
        let control: &mut dyn Control = match key {
            CharacterAttribute::FontFamily => &mut self.family,
            CharacterAttribute::FontSize => &mut self.size,
            CharacterAttribute::FontWeight => &mut self.weight,
            CharacterAttribute::Italic => &mut self.italic,
            CharacterAttribute::Underline => &mut self.underline,
            CharacterAttribute::Overline => &mut self.overline,
            CharacterAttribute::Strikethrough => &mut self.strikethrough,
            CharacterAttribute::Baseline => &mut self.baseline,
            CharacterAttribute::FontColor => &mut self.font_color,
            CharacterAttribute::BackgroundColor => &mut self.background_color,
            CharacterAttribute::LetterSpacing => &mut self.letter_spacing,
        };
        Some(control)
    }

    // Weights follow the family and size readings. While neither has changed,
    // the weights already present in the selection stay selectable, so an
    // untouched dialog never falls back.
    fn derive(
        &self,
        aggregate: &AggregateState<CharacterSchema>,
        readings: &mut Readings,
    ) -> Result<Derived<CharacterDependent>> {
        let basic_changed = is_changed(aggregate, readings, CharacterAttribute::FontFamily)?
            || is_changed(aggregate, readings, CharacterAttribute::FontSize)?;

        let families = match readings.resolved(CharacterAttribute::FontFamily) {
            Some(Scalar::Text(family)) => vec![family.clone()],
            _ => aggregate
                .candidates(CharacterAttribute::FontFamily)?
                .iter()
                .filter_map(Scalar::as_text)
                .map(str::to_string)
                .collect(),
        };
        let sizes = match readings.resolved(CharacterAttribute::FontSize) {
            Some(Scalar::Float(size)) => vec![*size],
            _ => aggregate
                .candidates(CharacterAttribute::FontSize)?
                .iter()
                .filter_map(Scalar::as_float)
                .collect(),
        };

        let mut weights = self.catalog_weights(&families, &sizes);
        if !basic_changed {
            weights.extend(
                aggregate
                    .candidates(CharacterAttribute::FontWeight)?
                    .iter()
                    .filter_map(as_weight),
            );
        }
        weights.sort();
        weights.dedup();

        let previous = readings
            .resolved(CharacterAttribute::FontWeight)
            .and_then(as_weight);
        let weight = previous.and_then(|previous| nearest_supported_weight(previous, &weights));
        if weight != previous {
            debug!("font weight {previous:?} unsupported, falling back to {weight:?}");
            readings.insert(
                CharacterAttribute::FontWeight,
                weight.map_or(RawControlValue::Blank, |weight| {
                    RawControlValue::Resolved(Scalar::Weight(weight))
                }),
            );
        }

        let preview = preview_format(readings)?;
        Ok(Derived {
            dependent: CharacterDependent {
                weights,
                weight,
                preview,
            },
            valid: true,
        })
    }

    fn apply_dependent(&mut self, dependent: &CharacterDependent) {
        self.weight.set_choices(
            dependent
                .weights
                .iter()
                .copied()
                .map(Scalar::Weight)
                .collect(),
        );
        match dependent.weight {
            Some(weight) => {
                if self.weight.select(&Scalar::Weight(weight)).is_err() {
                    self.weight.clear_selection();
                }
            }
            None => self.weight.clear_selection(),
        }
    }
}

fn is_changed(
    aggregate: &AggregateState<CharacterSchema>,
    readings: &Readings,
    key: CharacterAttribute,
) -> Result<bool> {
    let reading = readings.get(key).unwrap_or(&RawControlValue::Blank);
    let change = attribute_change(
        aggregate.summary(key)?,
        reading,
        CharacterSchema::comparison(key),
    );
    Ok(change.changed)
}

fn as_weight(value: &Scalar) -> Option<FontWeight> {
    match value {
        Scalar::Weight(weight) => Some(*weight),
        _ => None,
    }
}

/// Sample text format: defaults overridden by every reading that resolves.
fn preview_format(readings: &Readings) -> Result<CharacterFormat> {
    let mut format = CharacterFormat::default();
    for key in CharacterAttribute::ALL {
        if let Some(value) = readings.resolved(key) {
            CharacterSchema::write(&mut format, key, value)?;
        }
    }
    Ok(format)
}
