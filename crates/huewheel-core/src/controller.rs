//! Selection state: the picked color, its harmony swatches and the active mode.

use crate::color::{hex_to_rgb, hsv_to_rgb, normalize_degrees, ColorResult, Rgb};
use crate::config::PickerConfig;
use crate::harmony::HarmonyMode;
use crate::swatch::{Swatch, SwatchDisplay, SwatchSlot, Swatches};
use crate::wheel::{WheelGeometry, WHEEL_VALUE};
use kurbo::Point;

/// Receives the active harmony mode so mode controls can be highlighted.
pub trait ModeSelector {
    fn set_mode_active(&mut self, mode: HarmonyMode, active: bool);
}

/// Maps pointer positions on the wheel to colors and keeps the three
/// swatches in sync with the active harmony mode.
#[derive(Debug, Clone)]
pub struct SelectionController {
    geometry: WheelGeometry,
    mode: HarmonyMode,
    swatches: Swatches,
    /// Hue the middle swatch was picked at, if it came from the wheel.
    base_hue: Option<f64>,
}

impl SelectionController {
    /// Create a controller for a wheel of the given geometry.
    ///
    /// All swatches start white (the wheel center) in analogous mode.
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            geometry,
            mode: HarmonyMode::default(),
            swatches: Swatches::default(),
            base_hue: None,
        }
    }

    /// Create a controller from a validated config.
    pub fn from_config(config: &PickerConfig) -> ColorResult<Self> {
        let mut controller = Self::new(WheelGeometry::new(config.diameter));
        controller.mode = config.initial_mode;
        controller.select_hex(&config.initial_color)?;
        Ok(controller)
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn mode(&self) -> HarmonyMode {
        self.mode
    }

    pub fn swatches(&self) -> &Swatches {
        &self.swatches
    }

    pub fn swatch(&self, slot: SwatchSlot) -> &Swatch {
        self.swatches.get(slot)
    }

    /// Pick the color under a pointer position given in surface coordinates.
    ///
    /// Clicks outside the disc are ignored and return `false`.
    pub fn pick_color(&mut self, pointer: Point) -> bool {
        let local = self.geometry.to_local(pointer);
        let Some((hue, saturation)) = self.geometry.hue_saturation_at(local) else {
            log::trace!("Ignoring click outside wheel at ({}, {})", pointer.x, pointer.y);
            return false;
        };

        let rgb = hsv_to_rgb(hue, saturation, WHEEL_VALUE);
        self.swatches.set(SwatchSlot::Middle, Swatch::from_rgb(rgb));
        log::debug!(
            "Picked {} (hue={:.1}, saturation={:.1})",
            self.swatch(SwatchSlot::Middle).hex,
            hue,
            saturation
        );

        self.base_hue = Some(hue);
        self.align_colors(None);
        true
    }

    /// Recompute the left and right swatches from the middle one.
    ///
    /// The middle swatch's hex is converted back to HSV. An explicit
    /// `base_hue` replaces the re-derived hue for this call only. Without
    /// one, the hue of the pick that set the middle swatch is used, since
    /// the re-derived hue has lost precision to the hex rounding.
    pub fn align_colors(&mut self, base_hue: Option<f64>) {
        let middle = self.swatches.middle();
        // The middle hex is always written by `Swatch::from_rgb`
        let rgb = hex_to_rgb(&middle.hex).unwrap_or(middle.rgb);
        let hsv = rgb.to_hsv();
        let base = base_hue
            .map(normalize_degrees)
            .or(self.base_hue)
            .unwrap_or(hsv.h);

        let [left_hue, right_hue] = self.mode.related_hues(base);
        self.swatches.set(
            SwatchSlot::Left,
            Swatch::from_rgb(hsv_to_rgb(left_hue, hsv.s, hsv.v)),
        );
        self.swatches.set(
            SwatchSlot::Right,
            Swatch::from_rgb(hsv_to_rgb(right_hue, hsv.s, hsv.v)),
        );
    }

    /// Switch harmony mode and re-derive the side swatches.
    pub fn set_harmony_mode(&mut self, mode: HarmonyMode) {
        if mode != self.mode {
            log::debug!("Harmony mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        self.align_colors(None);
    }

    /// Make a color the middle swatch, then re-derive the side swatches.
    pub fn select_rgb(&mut self, rgb: Rgb) {
        self.swatches.set(SwatchSlot::Middle, Swatch::from_rgb(rgb));
        self.base_hue = None;
        self.align_colors(None);
    }

    /// Like [`Self::select_rgb`], from a `#rrggbb` string.
    pub fn select_hex(&mut self, hex: &str) -> ColorResult<()> {
        let rgb = hex_to_rgb(hex)?;
        self.select_rgb(rgb);
        Ok(())
    }

    /// Write all three swatches to a display.
    pub fn present<D: SwatchDisplay + ?Sized>(&self, display: &mut D) {
        for (slot, swatch) in self.swatches.iter() {
            display.show_swatch(slot, swatch);
        }
    }

    /// Mark the active mode, and only it, on the mode controls.
    pub fn highlight_modes<S: ModeSelector + ?Sized>(&self, selector: &mut S) {
        for mode in HarmonyMode::ALL {
            selector.set_mode_active(mode, mode == self.mode);
        }
    }
}
