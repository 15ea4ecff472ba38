//! WebAssembly entry point and DOM bindings.
//!
//! The page provides a `#color-picker` canvas, three swatch slots
//! (`#color-hex-N` and `#color-indicator-N`, N = 1..3 left to right), one
//! `#<mode>-button` per harmony mode and `.copy-button` elements carrying a
//! `data-color-id` slot number.

use huewheel_core::clipboard::{copy_hex, BoxFuture, Clipboard, ClipboardError, ClipboardResult};
use huewheel_core::{
    HarmonyMode, ModeSelector, PickerConfig, SelectionController, Swatch, SwatchDisplay,
    SwatchSlot,
};
use kurbo::Point;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, ImageData,
    MouseEvent,
};

use crate::params::{parse_params, UrlParams};

const CANVAS_ID: &str = "color-picker";
const COPY_BUTTON_SELECTOR: &str = ".copy-button";
const SELECTED_CLASS: &str = "selected-button";

/// Read picker parameters from the page URL.
/// Query string values win over hash values.
pub fn get_url_params() -> UrlParams {
    let Some(window) = web_sys::window() else {
        return UrlParams::default();
    };
    let location = window.location();

    let query = location.search().map(|s| parse_params(&s)).unwrap_or_default();
    let hash = location.hash().map(|s| parse_params(&s)).unwrap_or_default();
    query.or(hash)
}

fn button_id(mode: HarmonyMode) -> String {
    format!("{}-button", mode.name())
}

/// Swatch slots on the page.
struct DomSwatches<'a> {
    document: &'a Document,
}

impl SwatchDisplay for DomSwatches<'_> {
    fn show_swatch(&mut self, slot: SwatchSlot, swatch: &Swatch) {
        let n = slot.number();

        if let Some(label) = self.document.get_element_by_id(&format!("color-hex-{}", n)) {
            label.set_text_content(Some(&swatch.hex));
        }

        let indicator = self
            .document
            .get_element_by_id(&format!("color-indicator-{}", n))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if let Some(indicator) = indicator {
            if let Err(e) = indicator.style().set_property("background-color", &swatch.hex) {
                log::warn!("Failed to color swatch {}: {:?}", n, e);
            }
        }
    }
}

/// Harmony mode buttons on the page.
struct DomModeButtons<'a> {
    document: &'a Document,
}

impl ModeSelector for DomModeButtons<'_> {
    fn set_mode_active(&mut self, mode: HarmonyMode, active: bool) {
        let Some(button) = self.document.get_element_by_id(&button_id(mode)) else {
            return;
        };
        let classes = button.class_list();
        let result = if active {
            classes.add_1(SELECTED_CLASS)
        } else {
            classes.remove_1(SELECTED_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to update {} button: {:?}", mode, e);
        }
    }
}

/// The browser clipboard (`navigator.clipboard`).
struct WebClipboard;

impl Clipboard for WebClipboard {
    fn write_text(&self, text: &str) -> BoxFuture<'_, ClipboardResult<()>> {
        let text = text.to_string();
        Box::pin(async move {
            let window = web_sys::window()
                .ok_or_else(|| ClipboardError::Unavailable("no window".to_string()))?;
            let promise = window.navigator().clipboard().write_text(&text);
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Write(format!("{:?}", e)))
        })
    }
}

fn refresh(controller: &SelectionController, document: &Document) {
    controller.present(&mut DomSwatches { document });
    controller.highlight_modes(&mut DomModeButtons { document });
}

/// Paint the wheel onto the canvas in one `putImageData` call.
fn draw_wheel(canvas: &HtmlCanvasElement, diameter: u32) -> Result<(), JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let buffer = huewheel_core::render(diameter);
    let image = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(buffer.as_bytes()),
        diameter,
        diameter,
    )?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("missing #color-picker canvas"))?
        .dyn_into()?;

    let params = get_url_params();
    if let Some(size) = params.size {
        canvas.set_width(size);
        canvas.set_height(size);
    }

    let config = PickerConfig {
        diameter: canvas.width(),
        initial_mode: params.mode.unwrap_or_default(),
        ..PickerConfig::default()
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let controller =
        SelectionController::from_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    draw_wheel(&canvas, config.diameter)?;
    refresh(&controller, &document);

    let controller = Rc::new(RefCell::new(controller));

    // Wheel clicks
    {
        let controller = controller.clone();
        let document = document.clone();
        let target = canvas.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let point = Point::new(
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
            );
            let mut controller = controller.borrow_mut();
            if controller.pick_color(point) {
                controller.present(&mut DomSwatches {
                    document: &document,
                });
            }
        });
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Harmony mode buttons
    for mode in HarmonyMode::ALL {
        let Some(button) = document.get_element_by_id(&button_id(mode)) else {
            log::warn!("No button for {} mode", mode);
            continue;
        };
        let controller = controller.clone();
        let document = document.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let mut controller = controller.borrow_mut();
            controller.set_harmony_mode(mode);
            refresh(&controller, &document);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Copy buttons
    let buttons = document.query_selector_all(COPY_BUTTON_SELECTOR)?;
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let slot = button
            .get_attribute("data-color-id")
            .and_then(|id| id.trim().parse::<u8>().ok())
            .and_then(SwatchSlot::from_number);
        let Some(slot) = slot else {
            log::warn!("Copy button without a valid data-color-id");
            continue;
        };

        let controller = controller.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let hex = controller.borrow().swatch(slot).hex.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let notice = copy_hex(&WebClipboard, &hex).await;
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(&notice.message()) {
                        log::warn!("Failed to show copy notice: {:?}", e);
                    }
                }
            });
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    log::info!(
        "Color picker ready: diameter={}, mode={}",
        config.diameter,
        config.initial_mode
    );
    Ok(())
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "Failed to initialize logger: {}",
            e
        )));
    }

    log::info!("Starting HueWheel (WASM)");

    if let Err(e) = mount() {
        log::error!("Failed to start color picker: {:?}", e);
    }
}
