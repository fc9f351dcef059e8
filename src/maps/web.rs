use wasm_bindgen::JsValue;
use crate::dom::{add_class, remove_class};
use crate::error::AppError;
use crate::utils::google_maps_ffi::AdvancedMarkerElement;
use crate::utils::rive_ffi::{Rive, StateMachineInput};
use crate::utils::{HIGHLIGHT_CLASS, HIGHLIGHT_Z_INDEX};
use super::{ControlInput, MarkerView};

/// Marcador avanzado de Google Maps con contenido HTML propio
pub struct WebMarker {
    marker: AdvancedMarkerElement,
}

impl WebMarker {
    pub fn new(marker: AdvancedMarkerElement) -> Self {
        Self { marker }
    }
}

impl MarkerView for WebMarker {
    fn apply_highlight(&self, highlighted: bool) -> Result<(), AppError> {
        let content = self
            .marker
            .content()
            .ok_or_else(|| AppError::Js("El marcador no tiene contenido".to_string()))?;

        if highlighted {
            add_class(&content, HIGHLIGHT_CLASS)?;
            self.marker.set_z_index(&JsValue::from(HIGHLIGHT_Z_INDEX));
        } else {
            remove_class(&content, HIGHLIGHT_CLASS)?;
            self.marker.set_z_index(&JsValue::NULL);
        }
        Ok(())
    }
}

/// Input de la state machine de Rive (mantiene viva la instancia)
pub struct RiveInput {
    input: StateMachineInput,
    _rive: Rive,
}

impl RiveInput {
    pub fn new(rive: Rive, input: StateMachineInput) -> Self {
        Self { input, _rive: rive }
    }
}

impl ControlInput for RiveInput {
    fn set_value(&self, value: bool) {
        self.input.set_value(value);
    }
}
