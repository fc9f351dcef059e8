// ============================================================================
// ERRORES DE LA APLICACIÓN
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Elemento requerido no encontrado en el DOM: {0}")]
    MissingElement(String),

    #[error("Error de JavaScript: {0}")]
    Js(String),

    #[error("La librería '{library}' no expone '{export}'")]
    MissingExport { library: String, export: String },

    #[error("No se pudo cargar la animación: {0}")]
    AnimationLoad(String),

    #[error("La state machine '{0}' no tiene inputs")]
    MissingInput(String),

    #[error("El canvas del marcador {0} no se adjuntó al documento a tiempo")]
    CanvasTimeout(usize),

    #[error("Marcador {0} no registrado")]
    UnknownMarker(usize),

    #[error("El marcador {0} no tiene input de animación")]
    NotBound(usize),

    #[error("Binding cancelado")]
    Cancelled,
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        AppError::Js(error.to_string())
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::MissingElement("#map".to_string()).to_string(),
            "Elemento requerido no encontrado en el DOM: #map"
        );
        assert_eq!(
            AppError::MissingExport {
                library: "marker".to_string(),
                export: "AdvancedMarkerElement".to_string(),
            }
            .to_string(),
            "La librería 'marker' no expone 'AdvancedMarkerElement'"
        );
        assert_eq!(AppError::UnknownMarker(3).to_string(), "Marcador 3 no registrado");
    }
}
