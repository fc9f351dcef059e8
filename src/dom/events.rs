// ============================================================================
// EVENT HANDLING - Listeners del DOM
// ============================================================================
// Los closures se entregan a JS con forget(): los elementos (items de la
// leyenda) nunca se eliminan, así que el listener vive lo mismo que la página.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

/// Registrar un handler de mouse para `event_type`
pub fn on_mouse_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    on_mouse_event(element, "click", handler)
}

pub fn on_mouse_enter<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    on_mouse_event(element, "mouseenter", handler)
}

pub fn on_mouse_leave<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    on_mouse_event(element, "mouseleave", handler)
}
