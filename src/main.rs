#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use wacc_dashboard::{load_background, load_wacc_series, run_app, ui::config::UI_TEXT};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// The binary target still needs a main() when compiled for WASM
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("🚀 WACC Dashboard starting in WASM mode...");

    // B. Data (fatal on failure: never show a partial series)
    let series = load_wacc_series().map_err(|e| {
        log::error!("Failed to prepare WACC series: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    let background = load_background();

    // C. Canvas
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // D. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, series, background))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use eframe::{NativeOptions, egui};

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Data Loading (fatal on failure)
    let series = load_wacc_series()
        .inspect_err(|e| log::error!("❌ Failed to prepare WACC series: {}", e))
        .context("Failed to prepare the embedded WACC table")?;

    // C. Optional background
    let background = load_background();

    // D. Run Native App
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(UI_TEXT.window_title)
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, series, background))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
}
