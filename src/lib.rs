// ============================================================================
// RIVE PLACES MAP - Autocompletado + marcadores animados + leyenda (RUST PURO)
// ============================================================================
// - Models: datos planos (Place, selección del autocompletado)
// - State: AppState con Rc<RefCell>, fuente de verdad de marcadores
// - ViewModels: lógica UI sin DOM
// - Views: construcción de nodos DOM
// - Services: llamadas a Google Maps y Rive
// ============================================================================

mod config;
mod error;
mod models;
mod state;
mod maps;
mod dom;
mod utils;
mod services;
mod viewmodels;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::app::{App, AppDom};
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Rive Places Map - Rust + WASM");

    // Sin los elementos requeridos no hay nada que hacer: error visible en consola
    let dom = AppDom::resolve().map_err(|e| {
        log::error!("❌ [MAIN] {}", e);
        JsValue::from(e)
    })?;

    spawn_local(async move {
        match App::start(dom).await {
            Ok(app) => APP.with(|cell| *cell.borrow_mut() = Some(app)),
            Err(e) => log::error!("❌ [MAIN] No se pudo iniciar la app: {}", e),
        }
    });

    // Cancelar bindings pendientes al salir de la página (se registra una sola vez)
    if let Some(win) = web_sys::window() {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_e: web_sys::Event| {
            dispose();
        });
        win.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Número de lugares agregados (llamable desde JavaScript)
#[wasm_bindgen]
pub fn added_places_count() -> usize {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|app| app.state().place_count())
            .unwrap_or(0)
    })
}

/// Cancelar el trabajo asíncrono pendiente (llamable desde JavaScript)
#[wasm_bindgen]
pub fn dispose() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.state().cancel_pending();
            log::info!("🧹 [MAIN] Trabajo pendiente cancelado");
        }
    });
}
