use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{CharacterFormat, Result, Scalar, Selection};

use super::{ChangeCategory, ComparisonRule, FormatSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterAttribute {
    FontFamily,
    FontSize,
    FontWeight,
    Italic,
    Underline,
    Overline,
    Strikethrough,
    Baseline,
    FontColor,
    BackgroundColor,
    LetterSpacing,
}

impl CharacterAttribute {
    pub const ALL: [CharacterAttribute; 11] = [
        CharacterAttribute::FontFamily,
        CharacterAttribute::FontSize,
        CharacterAttribute::FontWeight,
        CharacterAttribute::Italic,
        CharacterAttribute::Underline,
        CharacterAttribute::Overline,
        CharacterAttribute::Strikethrough,
        CharacterAttribute::Baseline,
        CharacterAttribute::FontColor,
        CharacterAttribute::BackgroundColor,
        CharacterAttribute::LetterSpacing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontWeight => "font_weight",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Overline => "overline",
            Self::Strikethrough => "strikethrough",
            Self::Baseline => "baseline",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::LetterSpacing => "letter_spacing",
        }
    }
}

impl fmt::Display for CharacterAttribute {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterSchema;

impl FormatSchema for CharacterSchema {
    type Format = CharacterFormat;
    type Key = CharacterAttribute;

    const NAME: &'static str = "character";

    fn keys(_selection: &Selection<CharacterFormat>) -> Vec<CharacterAttribute> {
        CharacterAttribute::ALL.to_vec()
    }

    fn read(format: &CharacterFormat, key: CharacterAttribute) -> Option<Scalar> {
        let value = match key {
            CharacterAttribute::FontFamily => Scalar::from(format.font_family.clone()),
            CharacterAttribute::FontSize => Scalar::from(format.font_size),
            CharacterAttribute::FontWeight => Scalar::from(format.font_weight),
            CharacterAttribute::Italic => Scalar::from(format.italic),
            CharacterAttribute::Underline => Scalar::from(format.underline),
            CharacterAttribute::Overline => Scalar::from(format.overline),
            CharacterAttribute::Strikethrough => Scalar::from(format.strikethrough),
            CharacterAttribute::Baseline => Scalar::from(format.baseline),
            CharacterAttribute::FontColor => Scalar::from(format.font_color),
            CharacterAttribute::BackgroundColor => Scalar::from(format.background_color),
            CharacterAttribute::LetterSpacing => Scalar::from(format.letter_spacing),
        };
        Some(value)
    }

    fn write(format: &mut CharacterFormat, key: CharacterAttribute, value: &Scalar) -> Result<()> {
        match key {
            CharacterAttribute::FontFamily => format.font_family = value.extract(key)?,
            CharacterAttribute::FontSize => format.font_size = value.extract(key)?,
            CharacterAttribute::FontWeight => format.font_weight = value.extract(key)?,
            CharacterAttribute::Italic => format.italic = value.extract(key)?,
            CharacterAttribute::Underline => format.underline = value.extract(key)?,
            CharacterAttribute::Overline => format.overline = value.extract(key)?,
            CharacterAttribute::Strikethrough => format.strikethrough = value.extract(key)?,
            CharacterAttribute::Baseline => format.baseline = value.extract(key)?,
            CharacterAttribute::FontColor => format.font_color = value.extract(key)?,
            CharacterAttribute::BackgroundColor => format.background_color = value.extract(key)?,
            CharacterAttribute::LetterSpacing => format.letter_spacing = value.extract(key)?,
        }
        Ok(())
    }

    fn category(key: CharacterAttribute) -> ChangeCategory {
        match key {
            CharacterAttribute::FontFamily
            | CharacterAttribute::FontSize
            | CharacterAttribute::FontWeight => ChangeCategory::Basic,
            CharacterAttribute::Italic
            | CharacterAttribute::Underline
            | CharacterAttribute::Overline
            | CharacterAttribute::Strikethrough => ChangeCategory::Embellishments,
            CharacterAttribute::Baseline => ChangeCategory::Baseline,
            CharacterAttribute::FontColor | CharacterAttribute::BackgroundColor => {
                ChangeCategory::Color
            }
            CharacterAttribute::LetterSpacing => ChangeCategory::LetterSpacing,
        }
    }

    fn comparison(key: CharacterAttribute) -> ComparisonRule {
        match Self::category(key) {
            ChangeCategory::Color => ComparisonRule::CandidateSet,
            _ => ComparisonRule::Resolved,
        }
    }

    fn parse_key(name: &str) -> Option<CharacterAttribute> {
        CharacterAttribute::ALL
            .into_iter()
            .find(|attribute| attribute.name() == name)
    }
}
