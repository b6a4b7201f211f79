use log::debug;
use serde::Serialize;

use crate::aggregate::{
    AggregateState, AppearanceField, AxisField, ComparisonRule, PlotAttribute, PlotSchema,
    SeriesField,
};
use crate::changes::attribute_change;
use crate::controls::{
    ColorButton, ComboBox, Control, ControlReadings, LineEdit, RawControlValue, SpinBox,
};
use crate::model::{
    AxisLocation, AxisPair, AxisScale, LegendLocation, LineStyle, Result, Scalar, TickStyle,
};

use super::{ControlSurface, Derived};

type Readings = ControlReadings<PlotAttribute>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotDependent {
    /// Axes some series is plotted against; the others are disabled.
    pub active_axes: Vec<AxisLocation>,
    /// Active axes whose edited range cannot be drawn.
    pub invalid_axes: Vec<AxisLocation>,
    pub series_count: usize,
}

#[derive(Debug, Clone)]
pub struct AxisControls {
    pub scale: ComboBox,
    pub minimum: SpinBox,
    pub maximum: SpinBox,
    pub major_step: SpinBox,
    pub tick_style: ComboBox,
    pub grid_style: ComboBox,
    pub title: LineEdit,
    pub title_font: LineEdit,
    pub numbers_font: LineEdit,
}

impl Default for AxisControls {
    fn default() -> Self {
        Self {
            scale: ComboBox::new(AxisScale::ALL),
            minimum: SpinBox::default(),
            maximum: SpinBox::default(),
            major_step: SpinBox::default(),
            tick_style: ComboBox::new(TickStyle::ALL),
            grid_style: ComboBox::new(LineStyle::ALL),
            title: LineEdit::accepting_empty(),
            title_font: LineEdit::new(),
            numbers_font: LineEdit::new(),
        }
    }
}

impl AxisControls {
    fn control(&self, field: AxisField) -> &dyn Control {
        match field {
            AxisField::Scale => &self.scale,
            AxisField::Minimum => &self.minimum,
            AxisField::Maximum => &self.maximum,
            AxisField::MajorStep => &self.major_step,
            AxisField::TickStyle => &self.tick_style,
            AxisField::GridStyle => &self.grid_style,
            AxisField::Title => &self.title,
            AxisField::TitleFont => &self.title_font,
            AxisField::NumbersFont => &self.numbers_font,
        }
    }

    fn control_mut(&mut self, field: AxisField) -> &mut dyn Control {
        match field {
            AxisField::Scale => &mut self.scale,
            AxisField::Minimum => &mut self.minimum,
            AxisField::Maximum => &mut self.maximum,
            AxisField::MajorStep => &mut self.major_step,
            AxisField::TickStyle => &mut self.tick_style,
            AxisField::GridStyle => &mut self.grid_style,
            AxisField::Title => &mut self.title,
            AxisField::TitleFont => &mut self.title_font,
            AxisField::NumbersFont => &mut self.numbers_font,
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        for field in AxisField::ALL {
            self.control_mut(field).set_enabled(enabled);
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppearanceControls {
    pub title: LineEdit,
    pub border_style: ComboBox,
    pub border_color: ColorButton,
    pub background_color: ColorButton,
    pub legend: ComboBox,
}

impl Default for AppearanceControls {
    fn default() -> Self {
        Self {
            title: LineEdit::accepting_empty(),
            border_style: ComboBox::new(LineStyle::ALL),
            border_color: ColorButton::new(),
            background_color: ColorButton::new(),
            legend: ComboBox::new(LegendLocation::ALL),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeriesControls {
    pub data_source: LineEdit,
    pub axes: ComboBox,
    pub line_style: ComboBox,
    pub line_color: ColorButton,
}

impl Default for SeriesControls {
    fn default() -> Self {
        Self {
            data_source: LineEdit::new(),
            axes: ComboBox::new(AxisPair::ALL),
            line_style: ComboBox::new(LineStyle::ALL),
            line_color: ColorButton::new(),
        }
    }
}

impl SeriesControls {
    fn control(&self, field: SeriesField) -> &dyn Control {
        match field {
            SeriesField::DataSource => &self.data_source,
            SeriesField::Axes => &self.axes,
            SeriesField::LineStyle => &self.line_style,
            SeriesField::LineColor => &self.line_color,
        }
    }

    fn control_mut(&mut self, field: SeriesField) -> &mut dyn Control {
        match field {
            SeriesField::DataSource => &mut self.data_source,
            SeriesField::Axes => &mut self.axes,
            SeriesField::LineStyle => &mut self.line_style,
            SeriesField::LineColor => &mut self.line_color,
        }
    }
}

/// Plot format controls: one page per axis, the global appearance, and one
/// row per series index present in the selection.
#[derive(Debug, Clone, Default)]
pub struct PlotControls {
    pub left: AxisControls,
    pub right: AxisControls,
    pub top: AxisControls,
    pub bottom: AxisControls,
    pub appearance: AppearanceControls,
    pub series: Vec<SeriesControls>,
}

impl PlotControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, location: AxisLocation) -> &AxisControls {
        match location {
            AxisLocation::Left => &self.left,
            AxisLocation::Right => &self.right,
            AxisLocation::Top => &self.top,
            AxisLocation::Bottom => &self.bottom,
        }
    }

    pub fn axis_mut(&mut self, location: AxisLocation) -> &mut AxisControls {
        match location {
            AxisLocation::Left => &mut self.left,
            AxisLocation::Right => &mut self.right,
            AxisLocation::Top => &mut self.top,
            AxisLocation::Bottom => &mut self.bottom,
        }
    }

    /// Axes referenced by the series bindings. A series whose binding is not
    /// resolved contributes every binding it had in the selection.
    fn active_axes(
        aggregate: &AggregateState<PlotSchema>,
        readings: &Readings,
        series: usize,
    ) -> Result<Vec<AxisLocation>> {
        if series == 0 {
            return Ok(vec![AxisLocation::Left, AxisLocation::Bottom]);
        }
        let mut pairs = Vec::new();
        for index in 0..series {
            let key = PlotAttribute::Series(index, SeriesField::Axes);
            match readings.resolved(key) {
                Some(Scalar::AxisPair(pair)) => pairs.push(*pair),
                _ => pairs.extend(aggregate.candidates(key)?.iter().filter_map(as_axis_pair)),
            }
        }
        Ok(AxisLocation::ALL
            .into_iter()
            .filter(|location| {
                pairs
                    .iter()
                    .any(|pair| pair.horizontal() == *location || pair.vertical() == *location)
            })
            .collect())
    }
}

impl ControlSurface for PlotControls {
    type Schema = PlotSchema;
    type Dependent = PlotDependent;

    fn prepare(&mut self, aggregate: &AggregateState<PlotSchema>) {
        let count = series_count(aggregate);
        self.series.resize_with(count, SeriesControls::default);
    }

    fn keys(&self) -> Vec<PlotAttribute> {
        let axes = AxisLocation::ALL.into_iter().flat_map(|location| {
            AxisField::ALL
                .into_iter()
                .map(move |field| PlotAttribute::Axis(location, field))
        });
        let appearance = AppearanceField::ALL
            .into_iter()
            .map(PlotAttribute::Appearance);
        let series = (0..self.series.len()).flat_map(|index| {
            SeriesField::ALL
                .into_iter()
                .map(move |field| PlotAttribute::Series(index, field))
        });
        axes.chain(appearance).chain(series).collect()
    }

    fn control(&self, key: PlotAttribute) -> Option<&dyn Control> {
        match key {
            PlotAttribute::Axis(location, field) => Some(self.axis(location).control(field)),
            PlotAttribute::Appearance(field) => {
                let appearance = &self.appearance;
                let control: &dyn Control = match field {
                    AppearanceField::Title => &appearance.title,
                    AppearanceField::BorderStyle => &appearance.border_style,
                    AppearanceField::BorderColor => &appearance.border_color,
                    AppearanceField::BackgroundColor => &appearance.background_color,
                    AppearanceField::Legend => &appearance.legend,
                };
                Some(control)
            }
            PlotAttribute::Series(index, field) => {
                self.series.get(index).map(|series| series.control(field))
            }
        }
    }

    fn control_mut(&mut self, key: PlotAttribute) -> Option<&mut dyn Control> {
        match key {
            PlotAttribute::Axis(location, field) => {
                Some(self.axis_mut(location).control_mut(field))
            }
            PlotAttribute::Appearance(field) => {
                let appearance = &mut self.appearance;
                let control: &mut dyn Control = match field {
                    AppearanceField::Title => &mut appearance.title,
                    AppearanceField::BorderStyle => &mut appearance.border_style,
                    AppearanceField::BorderColor => &mut appearance.border_color,
                    AppearanceField::BackgroundColor => &mut appearance.background_color,
                    AppearanceField::Legend => &mut appearance.legend,
                };
                Some(control)
            }
            PlotAttribute::Series(index, field) => self
                .series
                .get_mut(index)
                .map(|series| series.control_mut(field)),
        }
    }

    fn derive(
        &self,
        aggregate: &AggregateState<PlotSchema>,
        readings: &mut Readings,
    ) -> Result<Derived<PlotDependent>> {
        let active_axes = Self::active_axes(aggregate, readings, self.series.len())?;
        for location in AxisLocation::ALL {
            if !active_axes.contains(&location) {
                for field in AxisField::ALL {
                    readings.insert(PlotAttribute::Axis(location, field), RawControlValue::Blank);
                }
            }
        }

        let mut invalid_axes = Vec::new();
        for location in active_axes.iter().copied() {
            if !range_is_valid(aggregate, readings, location)? {
                debug!("axis {} has an invalid range", location.name());
                invalid_axes.push(location);
            }
        }

        Ok(Derived {
            valid: invalid_axes.is_empty(),
            dependent: PlotDependent {
                active_axes,
                invalid_axes,
                series_count: self.series.len(),
            },
        })
    }

    fn apply_dependent(&mut self, dependent: &PlotDependent) {
        for location in AxisLocation::ALL {
            let active = dependent.active_axes.contains(&location);
            self.axis_mut(location).set_enabled(active);
        }
    }
}

const RANGE_FIELDS: [AxisField; 4] = [
    AxisField::Scale,
    AxisField::Minimum,
    AxisField::Maximum,
    AxisField::MajorStep,
];

/// Checked only once the range was edited: the minimum must lie below the
/// maximum, a logarithmic axis must start above zero, and the step must be
/// positive. Values not shown (conflicting) are not checked.
fn range_is_valid(
    aggregate: &AggregateState<PlotSchema>,
    readings: &Readings,
    location: AxisLocation,
) -> Result<bool> {
    let mut edited = false;
    for field in RANGE_FIELDS {
        let key = PlotAttribute::Axis(location, field);
        let reading = readings.get(key).unwrap_or(&RawControlValue::Blank);
        let summary = aggregate.summary(key)?;
        edited |= attribute_change(summary, reading, ComparisonRule::Resolved).changed;
    }
    if !edited {
        return Ok(true);
    }

    let effective = |field: AxisField| {
        let key = PlotAttribute::Axis(location, field);
        readings
            .resolved(key)
            .or_else(|| aggregate.resolved(key))
            .cloned()
    };
    let float = |field: AxisField| effective(field).as_ref().and_then(Scalar::as_float);
    let minimum = float(AxisField::Minimum);
    let maximum = float(AxisField::Maximum);
    let step = float(AxisField::MajorStep);
    let logarithmic = matches!(
        effective(AxisField::Scale),
        Some(Scalar::AxisScale(AxisScale::Log))
    );

    if minimum
        .zip(maximum)
        .is_some_and(|(minimum, maximum)| minimum >= maximum)
    {
        return Ok(false);
    }
    if logarithmic && minimum.is_some_and(|minimum| minimum <= 0.0) {
        return Ok(false);
    }
    Ok(step.is_none_or(|step| step > 0.0))
}

fn series_count(aggregate: &AggregateState<PlotSchema>) -> usize {
    aggregate
        .keys()
        .filter_map(|key| match key {
            PlotAttribute::Series(index, _) => Some(index + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

fn as_axis_pair(value: &Scalar) -> Option<AxisPair> {
    match value {
        Scalar::AxisPair(pair) => Some(*pair),
        _ => None,
    }
}
