// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface para el SDK de mapas
// ============================================================================
// Solo wrappers para objetos JS - Sin estado, sin lógica
// ============================================================================

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use crate::error::AppError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = importLibrary, catch)]
    fn import_library(name: &str) -> Result<Promise, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// google.maps.Map
    pub type GoogleMap;

    /// google.maps.LatLng
    pub type LatLngObject;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLngObject) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLngObject) -> f64;
}

#[wasm_bindgen]
extern "C" {
    /// google.maps.marker.AdvancedMarkerElement
    #[derive(Clone)]
    pub type AdvancedMarkerElement;

    #[wasm_bindgen(method, getter)]
    pub fn content(this: &AdvancedMarkerElement) -> Option<web_sys::Element>;

    #[wasm_bindgen(method, setter = zIndex)]
    pub fn set_z_index(this: &AdvancedMarkerElement, value: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &AdvancedMarkerElement, event: &str, handler: &Function) -> JsValue;
}

#[wasm_bindgen]
extern "C" {
    /// google.maps.places.Autocomplete
    #[derive(Clone)]
    pub type Autocomplete;

    #[wasm_bindgen(method, js_name = getPlace)]
    pub fn get_place(this: &Autocomplete) -> Option<PlaceResult>;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Autocomplete, event: &str, handler: &Function) -> JsValue;

    /// google.maps.places.PlaceResult
    pub type PlaceResult;

    #[wasm_bindgen(method, getter)]
    pub fn geometry(this: &PlaceResult) -> Option<PlaceGeometry>;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &PlaceResult) -> Option<String>;

    #[wasm_bindgen(method, getter = formatted_address)]
    pub fn formatted_address(this: &PlaceResult) -> Option<String>;

    #[wasm_bindgen(method, getter = place_id)]
    pub fn place_id(this: &PlaceResult) -> Option<String>;

    /// google.maps.places.PlaceGeometry
    pub type PlaceGeometry;

    #[wasm_bindgen(method, getter)]
    pub fn location(this: &PlaceGeometry) -> Option<LatLngObject>;
}

/// Helper: `await google.maps.importLibrary(name)`
pub async fn load_library(name: &str) -> Result<JsValue, AppError> {
    let promise = import_library(name)?;
    Ok(JsFuture::from(promise).await?)
}

/// Helper: obtener un constructor exportado por una librería ya cargada
pub fn library_class(library: &JsValue, library_name: &str, export: &str) -> Result<Function, AppError> {
    Reflect::get(library, &JsValue::from_str(export))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| AppError::MissingExport {
            library: library_name.to_string(),
            export: export.to_string(),
        })
}

/// Helper: `new Class(...args)` con el tipo importado como resultado
pub fn construct<T: JsCast>(class: &Function, args: &[&JsValue]) -> Result<T, AppError> {
    let array = args.iter().fold(Array::new(), |array, arg| {
        array.push(arg);
        array
    });
    Ok(Reflect::construct(class, &array)?.unchecked_into::<T>())
}
