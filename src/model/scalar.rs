use serde::{Deserialize, Serialize};

use super::{
    AxisPair, AxisScale, BaselinePosition, Color, CoreError, FontWeight, LegendLocation,
    LineStyle, Result, Rotation, ScalingMode, TickStyle,
};

/// A single attribute value in transit between formats, controls and change-sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Bool(bool),
    Float(f64),
    Text(String),
    Color(Option<Color>),
    Weight(FontWeight),
    Baseline(BaselinePosition),
    Scaling(ScalingMode),
    Rotation(Rotation),
    AxisScale(AxisScale),
    TickStyle(TickStyle),
    LineStyle(LineStyle),
    Legend(LegendLocation),
    AxisPair(AxisPair),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Weight(_) => "weight",
            Self::Baseline(_) => "baseline",
            Self::Scaling(_) => "scaling",
            Self::Rotation(_) => "rotation",
            Self::AxisScale(_) => "axis_scale",
            Self::TickStyle(_) => "tick_style",
            Self::LineStyle(_) => "line_style",
            Self::Legend(_) => "legend",
            Self::AxisPair(_) => "axis_pair",
        }
    }

    /// Converts into the concrete type stored on a format field.
    pub fn extract<T: FromScalar>(&self, name: impl std::fmt::Display) -> Result<T> {
        T::from_scalar(self).ok_or_else(|| CoreError::TypeMismatch {
            name: name.to_string(),
            expected: T::KIND,
            actual: self.kind(),
        })
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

pub trait FromScalar: Sized {
    const KIND: &'static str;

    fn from_scalar(scalar: &Scalar) -> Option<Self>;
}

macro_rules! scalar_conversions {
    ($($ty:ty => $variant:ident, $kind:literal;)*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }

            impl FromScalar for $ty {
                const KIND: &'static str = $kind;

                fn from_scalar(scalar: &Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(value) => Some(value.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_conversions! {
    bool => Bool, "bool";
    f64 => Float, "float";
    String => Text, "text";
    Option<Color> => Color, "color";
    FontWeight => Weight, "weight";
    BaselinePosition => Baseline, "baseline";
    ScalingMode => Scaling, "scaling";
    Rotation => Rotation, "rotation";
    AxisScale => AxisScale, "axis_scale";
    TickStyle => TickStyle, "tick_style";
    LineStyle => LineStyle, "line_style";
    LegendLocation => Legend, "legend";
    AxisPair => AxisPair, "axis_pair";
}
