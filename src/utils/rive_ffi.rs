// ============================================================================
// RIVE FFI - Foreign Function Interface para @rive-app/canvas
// ============================================================================
// Wrappers para el runtime global `rive` - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = rive)]
extern "C" {
    pub type Rive;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(params: &js_sys::Object) -> Result<Rive, JsValue>;

    /// Devuelve `undefined` si la state machine no existe
    #[wasm_bindgen(method, js_name = stateMachineInputs)]
    pub fn state_machine_inputs(this: &Rive, name: &str) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn cleanup(this: &Rive);

    pub type StateMachineInput;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &StateMachineInput) -> String;

    #[wasm_bindgen(method, setter)]
    pub fn set_value(this: &StateMachineInput, value: bool);
}
