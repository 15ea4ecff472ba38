//! HueWheel Application
//!
//! Platform shells around the core picker: a command-line tool on native
//! targets and a DOM front end on WebAssembly.

mod params;

pub use params::{parse_params, UrlParams};

#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
mod native;

#[cfg(feature = "native")]
pub use native::{encode_png, SystemClipboard};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
