use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "#{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue
        )?;
        if self.alpha != u8::MAX {
            write!(formatter, "{:02X}", self.alpha)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidColor(raw.to_string());
        let digits = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |index: usize| {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16).map_err(|_| invalid())
        };
        let alpha = if digits.len() == 8 {
            channel(3)?
        } else {
            u8::MAX
        };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
