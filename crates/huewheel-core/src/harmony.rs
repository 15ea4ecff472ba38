//! Harmony modes for deriving related hues from a base hue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rule for deriving the two side swatches from the picked hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyMode {
    /// Neighbors 30 degrees either side.
    #[default]
    Analogous,
    /// Thirds of the wheel, 120 and 240 degrees away.
    Triadic,
}

/// Unknown harmony mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown harmony mode: {0}")]
pub struct UnknownHarmonyMode(pub String);

impl HarmonyMode {
    /// All modes, in display order.
    pub const ALL: [HarmonyMode; 2] = [HarmonyMode::Analogous, HarmonyMode::Triadic];

    /// Lowercase identifier (also used for DOM ids and CLI values).
    pub fn name(self) -> &'static str {
        match self {
            HarmonyMode::Analogous => "analogous",
            HarmonyMode::Triadic => "triadic",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            HarmonyMode::Analogous => "Analogous",
            HarmonyMode::Triadic => "Triadic",
        }
    }

    /// Hue offsets in degrees for the left and right swatches.
    pub fn offsets(self) -> [f64; 2] {
        match self {
            HarmonyMode::Analogous => [30.0, -30.0],
            HarmonyMode::Triadic => [120.0, 240.0],
        }
    }

    /// Related hues for a base hue, each in `[0, 360)`.
    ///
    /// The first value goes to the left swatch, the second to the right.
    pub fn related_hues(self, base_hue: f64) -> [f64; 2] {
        let [a, b] = self.offsets();
        [wrap(base_hue + a), wrap(base_hue + b)]
    }
}

fn wrap(hue: f64) -> f64 {
    crate::color::normalize_degrees(hue)
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyMode {
    type Err = UnknownHarmonyMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        HarmonyMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHarmonyMode(s.to_string()))
    }
}
