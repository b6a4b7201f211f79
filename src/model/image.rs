use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingMode {
    /// Native image size along this axis.
    #[default]
    Ignored,
    /// Derived from the other axis so the image keeps its aspect ratio.
    AspectRatio,
    /// Fixed size in points.
    FixedPoints,
    /// Fraction of the native size.
    Fractional,
}

impl ScalingMode {
    pub const ALL: [ScalingMode; 4] = [
        ScalingMode::Ignored,
        ScalingMode::AspectRatio,
        ScalingMode::FixedPoints,
        ScalingMode::Fractional,
    ];

    pub fn uses_value(self) -> bool {
        matches!(self, Self::FixedPoints | Self::Fractional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Flip180,
    CounterClockwise90,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Clockwise90,
        Rotation::Flip180,
        Rotation::CounterClockwise90,
    ];
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageFormat {
    pub horizontal_mode: ScalingMode,
    /// Points for `FixedPoints`, a fraction for `Fractional`, unused otherwise.
    pub horizontal_value: f64,
    pub vertical_mode: ScalingMode,
    pub vertical_value: f64,
    pub rotation: Rotation,
}
