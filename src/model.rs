mod attribute;
mod axis;
mod character;
mod color;
mod error;
mod font;
mod image;
mod quad_state;
mod scalar;
mod selection;

#[cfg(test)]
mod tests;

pub use attribute::AttributeValue;
pub use axis::{
    AxisFormat, AxisLocation, AxisPair, AxisScale, LegendLocation, LineStyle, PlotAppearance,
    PlotAxes, PlotFormat, SeriesFormat, TickStyle,
};
pub use character::{BaselinePosition, CharacterFormat};
pub use color::Color;
pub use error::{CoreError, Result};
pub use font::{FontWeight, nearest_supported_weight};
pub use image::{ImageFormat, Rotation, ScalingMode};
pub use quad_state::{CheckState, QuadState};
pub use scalar::{FromScalar, Scalar};
pub use selection::{ObjectId, SelectedObject, Selection};
