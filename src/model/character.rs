use serde::{Deserialize, Serialize};

use super::{Color, FontWeight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePosition {
    #[default]
    Normal,
    Subscript,
    Superscript,
}

impl BaselinePosition {
    pub const ALL: [BaselinePosition; 3] = [
        BaselinePosition::Normal,
        BaselinePosition::Subscript,
        BaselinePosition::Superscript,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterFormat {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub italic: bool,
    pub underline: bool,
    pub overline: bool,
    pub strikethrough: bool,
    pub baseline: BaselinePosition,
    /// `None` means the format carries no explicit color.
    pub font_color: Option<Color>,
    pub background_color: Option<Color>,
    /// Extra spacing as a fraction of the font size; shown as a percentage.
    pub letter_spacing: f64,
}

impl Default for CharacterFormat {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            italic: false,
            underline: false,
            overline: false,
            strikethrough: false,
            baseline: BaselinePosition::Normal,
            font_color: None,
            background_color: None,
            letter_spacing: 0.0,
        }
    }
}
