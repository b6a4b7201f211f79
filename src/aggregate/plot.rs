use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{AxisFormat, AxisLocation, CoreError, PlotFormat, Result, Scalar, Selection};

use super::{ChangeCategory, ComparisonRule, FormatSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisField {
    Scale,
    Minimum,
    Maximum,
    MajorStep,
    TickStyle,
    GridStyle,
    Title,
    TitleFont,
    NumbersFont,
}

impl AxisField {
    pub const ALL: [AxisField; 9] = [
        AxisField::Scale,
        AxisField::Minimum,
        AxisField::Maximum,
        AxisField::MajorStep,
        AxisField::TickStyle,
        AxisField::GridStyle,
        AxisField::Title,
        AxisField::TitleFont,
        AxisField::NumbersFont,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::MajorStep => "major_step",
            Self::TickStyle => "tick_style",
            Self::GridStyle => "grid_style",
            Self::Title => "title",
            Self::TitleFont => "title_font",
            Self::NumbersFont => "numbers_font",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceField {
    Title,
    BorderStyle,
    BorderColor,
    BackgroundColor,
    Legend,
}

impl AppearanceField {
    pub const ALL: [AppearanceField; 5] = [
        AppearanceField::Title,
        AppearanceField::BorderStyle,
        AppearanceField::BorderColor,
        AppearanceField::BackgroundColor,
        AppearanceField::Legend,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::BorderStyle => "border_style",
            Self::BorderColor => "border_color",
            Self::BackgroundColor => "background_color",
            Self::Legend => "legend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesField {
    DataSource,
    Axes,
    LineStyle,
    LineColor,
}

impl SeriesField {
    pub const ALL: [SeriesField; 4] = [
        SeriesField::DataSource,
        SeriesField::Axes,
        SeriesField::LineStyle,
        SeriesField::LineColor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DataSource => "data_source",
            Self::Axes => "axes",
            Self::LineStyle => "line_style",
            Self::LineColor => "line_color",
        }
    }
}

/// Plot attribute key, written `axis.<location>.<field>`, `appearance.<field>`
/// or `series.<index>.<field>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotAttribute {
    Axis(AxisLocation, AxisField),
    Appearance(AppearanceField),
    Series(usize, SeriesField),
}

impl fmt::Display for PlotAttribute {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axis(location, field) => {
                write!(formatter, "axis.{}.{}", location.name(), field.name())
            }
            Self::Appearance(field) => write!(formatter, "appearance.{}", field.name()),
            Self::Series(index, field) => write!(formatter, "series.{index}.{}", field.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlotSchema;

impl FormatSchema for PlotSchema {
    type Format = PlotFormat;
    type Key = PlotAttribute;

    const NAME: &'static str = "plot";

    fn keys(selection: &Selection<PlotFormat>) -> Vec<PlotAttribute> {
        let series_count = selection
            .formats()
            .map(|format| format.series.len())
            .max()
            .unwrap_or(0);
        let axes = AxisLocation::ALL.into_iter().flat_map(|location| {
            AxisField::ALL
                .into_iter()
                .map(move |field| PlotAttribute::Axis(location, field))
        });
        let appearance = AppearanceField::ALL
            .into_iter()
            .map(PlotAttribute::Appearance);
        let series = (0..series_count).flat_map(|index| {
            SeriesField::ALL
                .into_iter()
                .map(move |field| PlotAttribute::Series(index, field))
        });
        axes.chain(appearance).chain(series).collect()
    }

    fn read(format: &PlotFormat, key: PlotAttribute) -> Option<Scalar> {
        match key {
            PlotAttribute::Axis(location, field) => {
                Some(read_axis(format.axes.get(location), field))
            }
            PlotAttribute::Appearance(field) => {
                let appearance = &format.appearance;
                let value = match field {
                    AppearanceField::Title => Scalar::from(appearance.title.clone()),
                    AppearanceField::BorderStyle => Scalar::from(appearance.border_style),
                    AppearanceField::BorderColor => Scalar::from(appearance.border_color),
                    AppearanceField::BackgroundColor => Scalar::from(appearance.background_color),
                    AppearanceField::Legend => Scalar::from(appearance.legend),
                };
                Some(value)
            }
            PlotAttribute::Series(index, field) => {
                let series = format.series.get(index)?;
                let value = match field {
                    SeriesField::DataSource => Scalar::from(series.data_source.clone()),
                    SeriesField::Axes => Scalar::from(series.axes),
                    SeriesField::LineStyle => Scalar::from(series.line_style),
                    SeriesField::LineColor => Scalar::from(series.line_color),
                };
                Some(value)
            }
        }
    }

    fn write(format: &mut PlotFormat, key: PlotAttribute, value: &Scalar) -> Result<()> {
        match key {
            PlotAttribute::Axis(location, field) => {
                write_axis(format.axes.get_mut(location), key, field, value)?;
            }
            PlotAttribute::Appearance(field) => {
                let appearance = &mut format.appearance;
                match field {
                    AppearanceField::Title => appearance.title = value.extract(key)?,
                    AppearanceField::BorderStyle => appearance.border_style = value.extract(key)?,
                    AppearanceField::BorderColor => appearance.border_color = value.extract(key)?,
                    AppearanceField::BackgroundColor => {
                        appearance.background_color = value.extract(key)?;
                    }
                    AppearanceField::Legend => appearance.legend = value.extract(key)?,
                }
            }
            PlotAttribute::Series(index, field) => {
                let Some(series) = format.series.get_mut(index) else {
                    return Err(CoreError::UnknownAttribute {
                        schema: Self::NAME,
                        name: key.to_string(),
                    });
                };
                match field {
                    SeriesField::DataSource => series.data_source = value.extract(key)?,
                    SeriesField::Axes => series.axes = value.extract(key)?,
                    SeriesField::LineStyle => series.line_style = value.extract(key)?,
                    SeriesField::LineColor => series.line_color = value.extract(key)?,
                }
            }
        }
        Ok(())
    }

    fn category(key: PlotAttribute) -> ChangeCategory {
        match key {
            PlotAttribute::Axis(..) => ChangeCategory::Axis,
            PlotAttribute::Appearance(_) => ChangeCategory::Appearance,
            PlotAttribute::Series(..) => ChangeCategory::Series,
        }
    }

    fn comparison(key: PlotAttribute) -> ComparisonRule {
        match key {
            PlotAttribute::Appearance(
                AppearanceField::BorderColor | AppearanceField::BackgroundColor,
            )
            | PlotAttribute::Series(_, SeriesField::LineColor) => ComparisonRule::CandidateSet,
            _ => ComparisonRule::Resolved,
        }
    }

    fn parse_key(name: &str) -> Option<PlotAttribute> {
        let mut parts = name.split('.');
        let key = match (parts.next()?, parts.next()?, parts.next()) {
            ("axis", location, Some(field)) => PlotAttribute::Axis(
                AxisLocation::from_name(location)?,
                AxisField::ALL.into_iter().find(|f| f.name() == field)?,
            ),
            ("appearance", field, None) => PlotAttribute::Appearance(
                AppearanceField::ALL
                    .into_iter()
                    .find(|f| f.name() == field)?,
            ),
            ("series", index, Some(field)) => PlotAttribute::Series(
                index.parse().ok()?,
                SeriesField::ALL.into_iter().find(|f| f.name() == field)?,
            ),
            _ => return None,
        };
        parts.next().is_none().then_some(key)
    }
}

fn read_axis(axis: &AxisFormat, field: AxisField) -> Scalar {
    match field {
        AxisField::Scale => Scalar::from(axis.scale),
        AxisField::Minimum => Scalar::from(axis.minimum),
        AxisField::Maximum => Scalar::from(axis.maximum),
        AxisField::MajorStep => Scalar::from(axis.major_step),
        AxisField::TickStyle => Scalar::from(axis.tick_style),
        AxisField::GridStyle => Scalar::from(axis.grid_style),
        AxisField::Title => Scalar::from(axis.title.clone()),
        AxisField::TitleFont => Scalar::from(axis.title_font.clone()),
        AxisField::NumbersFont => Scalar::from(axis.numbers_font.clone()),
    }
}

fn write_axis(
    axis: &mut AxisFormat,
    key: PlotAttribute,
    field: AxisField,
    value: &Scalar,
) -> Result<()> {
    match field {
        AxisField::Scale => axis.scale = value.extract(key)?,
        AxisField::Minimum => axis.minimum = value.extract(key)?,
        AxisField::Maximum => axis.maximum = value.extract(key)?,
        AxisField::MajorStep => axis.major_step = value.extract(key)?,
        AxisField::TickStyle => axis.tick_style = value.extract(key)?,
        AxisField::GridStyle => axis.grid_style = value.extract(key)?,
        AxisField::Title => axis.title = value.extract(key)?,
        AxisField::TitleFont => axis.title_font = value.extract(key)?,
        AxisField::NumbersFont => axis.numbers_font = value.extract(key)?,
    }
    Ok(())
}
