//! The three swatch slots shown next to the wheel.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// One of the three ordered swatch slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchSlot {
    /// First derived color.
    Left,
    /// The picked color.
    Middle,
    /// Second derived color.
    Right,
}

impl SwatchSlot {
    /// All slots, left to right.
    pub const ALL: [SwatchSlot; 3] = [SwatchSlot::Left, SwatchSlot::Middle, SwatchSlot::Right];

    /// Zero-based position, left to right.
    pub fn index(self) -> usize {
        match self {
            SwatchSlot::Left => 0,
            SwatchSlot::Middle => 1,
            SwatchSlot::Right => 2,
        }
    }

    /// One-based position, as used by the page element ids.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Slot for a one-based position.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(SwatchSlot::Left),
            2 => Some(SwatchSlot::Middle),
            3 => Some(SwatchSlot::Right),
            _ => None,
        }
    }
}

/// A displayed color: hex string plus its RGB channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: String,
    pub rgb: Rgb,
}

impl Swatch {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

impl Default for Swatch {
    fn default() -> Self {
        Self::from_rgb(Rgb::WHITE)
    }
}

/// The left, middle and right swatches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatches {
    slots: [Swatch; 3],
}

impl Swatches {
    pub fn get(&self, slot: SwatchSlot) -> &Swatch {
        &self.slots[slot.index()]
    }

    pub(crate) fn set(&mut self, slot: SwatchSlot, swatch: Swatch) {
        self.slots[slot.index()] = swatch;
    }

    pub fn middle(&self) -> &Swatch {
        self.get(SwatchSlot::Middle)
    }

    /// Slots paired with their swatches, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (SwatchSlot, &Swatch)> {
        SwatchSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Something that displays swatches (page elements, terminal output, ...).
pub trait SwatchDisplay {
    fn show_swatch(&mut self, slot: SwatchSlot, swatch: &Swatch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_numbers() {
        for slot in SwatchSlot::ALL {
            assert_eq!(SwatchSlot::from_number(slot.number()), Some(slot));
        }
        assert_eq!(SwatchSlot::Middle.number(), 2);
        assert_eq!(SwatchSlot::from_number(0), None);
        assert_eq!(SwatchSlot::from_number(4), None);
    }

    #[test]
    fn test_swatch_from_rgb() {
        let swatch = Swatch::from_rgb(Rgb::new(255, 128, 0));
        assert_eq!(swatch.hex, "#ff8000");
        assert_eq!(Swatch::default().hex, "#ffffff");
    }

    #[test]
    fn test_swatches_order() {
        let mut swatches = Swatches::default();
        swatches.set(SwatchSlot::Right, Swatch::from_rgb(Rgb::new(0, 0, 255)));
        let hexes: Vec<_> = swatches.iter().map(|(_, s)| s.hex.as_str()).collect();
        assert_eq!(hexes, ["#ffffff", "#ffffff", "#0000ff"]);
    }
}
