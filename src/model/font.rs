use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CoreError;

/// Font weights in their fixed total order, lightest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Normal,
    Medium,
    DemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub const ALL: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::DemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::ExtraLight => "extra_light",
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::DemiBold => "demi_bold",
            Self::Bold => "bold",
            Self::ExtraBold => "extra_bold",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for FontWeight {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|weight| weight.name() == normalized)
            .ok_or_else(|| CoreError::UnknownWeight(raw.to_string()))
    }
}

/// Picks the weight to show once the supported set changes.
///
/// `previous` survives if still supported. Otherwise the nearest lower
/// supported weight wins, and only when none exists the nearest higher one.
pub fn nearest_supported_weight(
    previous: FontWeight,
    supported: &[FontWeight],
) -> Option<FontWeight> {
    if supported.contains(&previous) {
        return Some(previous);
    }

    let position = previous.index();
    let lower = FontWeight::ALL[..position]
        .iter()
        .rev()
        .find(|weight| supported.contains(weight));
    let higher = || {
        FontWeight::ALL[position + 1..]
            .iter()
            .find(|weight| supported.contains(weight))
    };
    lower.or_else(higher).copied()
}
