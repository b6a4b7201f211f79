mod character;
mod image;
mod plot;
mod schema;
mod state;


pub use character::{CharacterAttribute, CharacterSchema};
pub use image::{ImageAttribute, ImageSchema};
pub use plot::{AppearanceField, AxisField, PlotAttribute, PlotSchema, SeriesField};
pub use schema::{ChangeCategory, ComparisonRule, FormatSchema, KeyOf};
pub use state::{AggregateState, AttributeReport, AttributeSummary};
