//! HueWheel Core Library
//!
//! Platform-agnostic color math, wheel rasterization and selection state for
//! the HueWheel color picker.

pub mod clipboard;
pub mod color;
pub mod config;
pub mod controller;
pub mod harmony;
pub mod swatch;
pub mod wheel;

pub use clipboard::{
    copy_hex, copy_swatch, Clipboard, ClipboardError, CopyNotice, MemoryClipboard,
};
pub use color::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, ColorError, Hsv, Rgb};
pub use config::{ConfigError, PickerConfig};
pub use controller::{ModeSelector, SelectionController};
pub use harmony::HarmonyMode;
pub use swatch::{Swatch, SwatchDisplay, SwatchSlot, Swatches};
pub use wheel::{paint_wheel, render, DisplaySurface, PixelBuffer, WheelGeometry};
