use serde::{Deserialize, Serialize};

use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisLocation {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisLocation {
    pub const ALL: [AxisLocation; 4] = [
        AxisLocation::Left,
        AxisLocation::Right,
        AxisLocation::Top,
        AxisLocation::Bottom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|location| location.name() == name)
    }
}

/// The pair of axes a data series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPair {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl AxisPair {
    pub const ALL: [AxisPair; 4] = [
        AxisPair::BottomLeft,
        AxisPair::BottomRight,
        AxisPair::TopLeft,
        AxisPair::TopRight,
    ];

    pub fn horizontal(self) -> AxisLocation {
        match self {
            Self::BottomLeft | Self::BottomRight => AxisLocation::Bottom,
            Self::TopLeft | Self::TopRight => AxisLocation::Top,
        }
    }

    pub fn vertical(self) -> AxisLocation {
        match self {
            Self::BottomLeft | Self::TopLeft => AxisLocation::Left,
            Self::BottomRight | Self::TopRight => AxisLocation::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
    Decibel,
}

impl AxisScale {
    pub const ALL: [AxisScale; 3] = [AxisScale::Linear, AxisScale::Log, AxisScale::Decibel];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickStyle {
    None,
    Inner,
    #[default]
    Outer,
    Spanning,
}

impl TickStyle {
    pub const ALL: [TickStyle; 4] = [
        TickStyle::None,
        TickStyle::Inner,
        TickStyle::Outer,
        TickStyle::Spanning,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    None,
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDotted,
}

impl LineStyle {
    pub const ALL: [LineStyle; 5] = [
        LineStyle::None,
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::Dotted,
        LineStyle::DashDotted,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Outside,
}

impl LegendLocation {
    pub const ALL: [LegendLocation; 6] = [
        LegendLocation::None,
        LegendLocation::TopLeft,
        LegendLocation::TopRight,
        LegendLocation::BottomLeft,
        LegendLocation::BottomRight,
        LegendLocation::Outside,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisFormat {
    pub scale: AxisScale,
    pub minimum: f64,
    pub maximum: f64,
    pub major_step: f64,
    pub tick_style: TickStyle,
    pub grid_style: LineStyle,
    pub title: String,
    pub title_font: String,
    pub numbers_font: String,
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self {
            scale: AxisScale::Linear,
            minimum: 0.0,
            maximum: 1.0,
            major_step: 0.1,
            tick_style: TickStyle::Outer,
            grid_style: LineStyle::None,
            title: String::new(),
            title_font: "Helvetica,12".to_string(),
            numbers_font: "Helvetica,10".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotAxes {
    pub left: AxisFormat,
    pub right: AxisFormat,
    pub top: AxisFormat,
    pub bottom: AxisFormat,
}

impl PlotAxes {
    pub fn get(&self, location: AxisLocation) -> &AxisFormat {
        match location {
            AxisLocation::Left => &self.left,
            AxisLocation::Right => &self.right,
            AxisLocation::Top => &self.top,
            AxisLocation::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, location: AxisLocation) -> &mut AxisFormat {
        match location {
            AxisLocation::Left => &mut self.left,
            AxisLocation::Right => &mut self.right,
            AxisLocation::Top => &mut self.top,
            AxisLocation::Bottom => &mut self.bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotAppearance {
    pub title: String,
    pub border_style: LineStyle,
    pub border_color: Option<Color>,
    pub background_color: Option<Color>,
    pub legend: LegendLocation,
}

impl Default for PlotAppearance {
    fn default() -> Self {
        Self {
            title: String::new(),
            border_style: LineStyle::Solid,
            border_color: Some(Color::rgb(0, 0, 0)),
            background_color: None,
            legend: LegendLocation::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesFormat {
    pub data_source: String,
    pub axes: AxisPair,
    pub line_style: LineStyle,
    pub line_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotFormat {
    pub axes: PlotAxes,
    pub appearance: PlotAppearance,
    pub series: Vec<SeriesFormat>,
}
