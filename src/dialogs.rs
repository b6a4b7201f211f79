mod character;
mod error;
mod image;
mod plot;
mod session;
mod surface;

#[cfg(test)]
mod tests;

pub use character::{CharacterControls, CharacterDependent};
pub use error::{DialogError, Result};
pub use image::{ImageControls, ImageDependent, ValueState, ValueUnit};
pub use plot::{AppearanceControls, AxisControls, PlotControls, PlotDependent, SeriesControls};
pub use session::{CloseReason, DialogSession, SessionState};
pub use surface::{ControlSurface, Derived, RenderPlan};

pub type CharacterDialog = DialogSession<CharacterControls>;
pub type ImageDialog = DialogSession<ImageControls>;
pub type PlotDialog = DialogSession<PlotControls>;
