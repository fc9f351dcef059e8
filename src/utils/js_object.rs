use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use crate::error::AppError;

/// Helper: construir un objeto JS plano `{ key: value, ... }`
pub fn js_object(entries: &[(&str, &JsValue)]) -> Result<Object, AppError> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object)
}

/// Vista `&JsValue` de cualquier handle JS (evita ambigüedades de `as_ref`)
pub fn as_js<T: AsRef<JsValue>>(value: &T) -> &JsValue {
    value.as_ref()
}
