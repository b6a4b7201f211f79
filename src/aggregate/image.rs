use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ImageFormat, Result, Scalar, Selection};

use super::{ChangeCategory, FormatSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAttribute {
    HorizontalMode,
    HorizontalValue,
    VerticalMode,
    VerticalValue,
    Rotation,
}

impl ImageAttribute {
    pub const ALL: [ImageAttribute; 5] = [
        ImageAttribute::HorizontalMode,
        ImageAttribute::HorizontalValue,
        ImageAttribute::VerticalMode,
        ImageAttribute::VerticalValue,
        ImageAttribute::Rotation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::HorizontalMode => "horizontal_mode",
            Self::HorizontalValue => "horizontal_value",
            Self::VerticalMode => "vertical_mode",
            Self::VerticalValue => "vertical_value",
            Self::Rotation => "rotation",
        }
    }
}

impl fmt::Display for ImageAttribute {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSchema;

impl FormatSchema for ImageSchema {
    type Format = ImageFormat;
    type Key = ImageAttribute;

    const NAME: &'static str = "image";

    fn keys(_selection: &Selection<ImageFormat>) -> Vec<ImageAttribute> {
        ImageAttribute::ALL.to_vec()
    }

    // Scaling values only exist for modes that use them, so an image scaled
    // to its aspect ratio does not turn the value aggregate into a conflict.
    fn read(format: &ImageFormat, key: ImageAttribute) -> Option<Scalar> {
        match key {
            ImageAttribute::HorizontalMode => Some(Scalar::from(format.horizontal_mode)),
            ImageAttribute::HorizontalValue => format
                .horizontal_mode
                .uses_value()
                .then(|| Scalar::from(format.horizontal_value)),
            ImageAttribute::VerticalMode => Some(Scalar::from(format.vertical_mode)),
            ImageAttribute::VerticalValue => format
                .vertical_mode
                .uses_value()
                .then(|| Scalar::from(format.vertical_value)),
            ImageAttribute::Rotation => Some(Scalar::from(format.rotation)),
        }
    }

    fn write(format: &mut ImageFormat, key: ImageAttribute, value: &Scalar) -> Result<()> {
        match key {
            ImageAttribute::HorizontalMode => format.horizontal_mode = value.extract(key)?,
            ImageAttribute::HorizontalValue => format.horizontal_value = value.extract(key)?,
            ImageAttribute::VerticalMode => format.vertical_mode = value.extract(key)?,
            ImageAttribute::VerticalValue => format.vertical_value = value.extract(key)?,
            ImageAttribute::Rotation => format.rotation = value.extract(key)?,
        }
        Ok(())
    }

    fn category(key: ImageAttribute) -> ChangeCategory {
        match key {
            ImageAttribute::Rotation => ChangeCategory::Rotation,
            _ => ChangeCategory::Scaling,
        }
    }

    fn governing_key(key: ImageAttribute) -> Option<ImageAttribute> {
        match key {
            ImageAttribute::HorizontalValue => Some(ImageAttribute::HorizontalMode),
            ImageAttribute::VerticalValue => Some(ImageAttribute::VerticalMode),
            _ => None,
        }
    }

    fn parse_key(name: &str) -> Option<ImageAttribute> {
        ImageAttribute::ALL
            .into_iter()
            .find(|attribute| attribute.name() == name)
    }
}
