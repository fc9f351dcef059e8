// ============================================================================
// ANIMATION SERVICE - Binding de Rive sobre el canvas del marcador
// ============================================================================
// El binding arranca cuando el marcador ya está colocado y su canvas está en
// el documento; no depende de un temporizador fijo.
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;
use crate::config::AnimationConfig;
use crate::error::AppError;
use crate::maps::web::RiveInput;
use crate::state::CancelToken;
use crate::utils::{as_js, js_object};
use crate::utils::rive_ffi::{Rive, StateMachineInput};

pub struct AnimationService;

/// Tiempo acumulado tras otra espera (satura en vez de desbordar)
fn next_wait(waited: u32, interval: u32) -> u32 {
    waited.saturating_add(interval)
}

fn poll_timed_out(waited: u32, config: &AnimationConfig) -> bool {
    waited >= config.canvas_wait_timeout_ms
}

impl AnimationService {
    /// Esperar a que el canvas del marcador `index` esté adjunto al documento
    pub async fn wait_for_canvas(
        canvas: &HtmlCanvasElement,
        index: usize,
        config: &AnimationConfig,
        token: &CancelToken,
    ) -> Result<(), AppError> {
        if config.bind_delay_ms > 0 {
            TimeoutFuture::new(config.bind_delay_ms).await;
        }

        let interval = config.canvas_poll_interval_ms.max(1);
        let mut waited: u32 = 0;
        while !canvas.is_connected() {
            if token.is_cancelled() {
                return Err(AppError::Cancelled);
            }
            if poll_timed_out(waited, config) {
                return Err(AppError::CanvasTimeout(index));
            }
            TimeoutFuture::new(interval).await;
            waited = next_wait(waited, interval);
        }

        if token.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        log::debug!("🖼️ [ANIM] Canvas #{} adjunto tras {} ms", index, waited);
        Ok(())
    }

    /// Crear la instancia de Rive y devolver el primer input de la state machine
    pub async fn bind(
        canvas: &HtmlCanvasElement,
        config: &AnimationConfig,
        token: &CancelToken,
    ) -> Result<RiveInput, AppError> {
        let mut callbacks: Option<(Function, Function)> = None;
        let loaded = Promise::new(&mut |resolve, reject| {
            callbacks = Some((resolve, reject));
        });
        let (resolve, reject) =
            callbacks.ok_or_else(|| AppError::Js("Promise sin executor".to_string()))?;

        let on_load = Closure::<dyn FnMut()>::new(move || {
            let _ = resolve.call0(&JsValue::NULL);
        })
        .into_js_value();
        let on_load_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &event);
        })
        .into_js_value();

        let params = js_object(&[
            ("src", &JsValue::from_str(&config.src)),
            ("canvas", as_js(canvas)),
            ("stateMachines", &JsValue::from_str(&config.state_machine)),
            ("autoplay", &JsValue::TRUE),
            ("onLoad", &on_load),
            ("onLoadError", &on_load_error),
        ])?;
        let rive = Rive::new(&params)?;

        if let Err(e) = JsFuture::from(loaded).await {
            return Err(AppError::AnimationLoad(AppError::from(e).to_string()));
        }
        if token.is_cancelled() {
            rive.cleanup();
            return Err(AppError::Cancelled);
        }
        log::debug!("loaded");

        let input = rive
            .state_machine_inputs(&config.state_machine)
            .dyn_into::<Array>()
            .ok()
            .map(|inputs| inputs.get(0))
            .filter(|first| !first.is_undefined())
            .ok_or_else(|| AppError::MissingInput(config.state_machine.clone()))?
            .unchecked_into::<StateMachineInput>();

        log::info!("🎞️ [ANIM] Input '{}' listo", input.name());
        Ok(RiveInput::new(rive, input))
    }
}
