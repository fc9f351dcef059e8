// ============================================================================
// ANIMATION VIEWMODEL - Estado del binding de animación por marcador
// ============================================================================

use std::rc::Rc;
use crate::error::AppError;
use crate::maps::ControlInput;
use crate::state::{AppState, BindState};

pub struct AnimationViewModel;

impl AnimationViewModel {
    /// Guardar el input de la state machine ya cargada
    pub fn attach_input(state: &AppState, index: usize, input: Rc<dyn ControlInput>) -> Result<(), AppError> {
        let mut markers = state.markers.borrow_mut();
        let record = markers.get_mut(index).ok_or(AppError::UnknownMarker(index))?;
        record.input = Some(input);
        record.bind = BindState::Bound;
        log::debug!("🎞️ [ANIM] Input enlazado al marcador #{}", index);
        Ok(())
    }

    /// Registrar que el binding no se completó. El marcador sigue en el mapa.
    pub fn mark_failed(state: &AppState, index: usize, error: &AppError) {
        let bind = match error {
            AppError::Cancelled => BindState::Cancelled,
            _ => BindState::Failed,
        };
        if let Some(record) = state.markers.borrow_mut().get_mut(index) {
            record.bind = bind;
        }
        match bind {
            BindState::Cancelled => log::warn!("⏹️ [ANIM] Binding del marcador #{} cancelado", index),
            _ => log::error!("❌ [ANIM] Binding del marcador #{} falló: {}", index, error),
        }
    }

    #[cfg(test)]
    pub fn bind_state(state: &AppState, index: usize) -> Option<BindState> {
        state.markers.borrow().get(index).map(|r| r.bind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::fakes::{FakeInput, FakeMarker};
    use crate::models::{LatLng, Place};
    use crate::viewmodels::MapViewModel;

    fn setup() -> AppState {
        let state = AppState::new();
        let place = Place::new(LatLng::new(0.0, 0.0), "", "");
        MapViewModel::register_marker(&state, 0, place, Rc::new(FakeMarker::default()));
        state
    }

    #[test]
    fn test_attach_input_marks_bound() {
        let state = setup();
        assert_eq!(AnimationViewModel::bind_state(&state, 0), Some(BindState::Pending));
        AnimationViewModel::attach_input(&state, 0, Rc::new(FakeInput::default())).unwrap();
        assert_eq!(AnimationViewModel::bind_state(&state, 0), Some(BindState::Bound));
        assert_eq!(state.markers.borrow().bound_indices(), vec![0]);
    }

    #[test]
    fn test_attach_input_unknown_marker() {
        let state = setup();
        let result = AnimationViewModel::attach_input(&state, 3, Rc::new(FakeInput::default()));
        assert_eq!(result, Err(AppError::UnknownMarker(3)));
    }

    #[test]
    fn test_mark_failed() {
        let state = setup();
        AnimationViewModel::mark_failed(&state, 0, &AppError::Cancelled);
        assert_eq!(AnimationViewModel::bind_state(&state, 0), Some(BindState::Cancelled));

        AnimationViewModel::mark_failed(&state, 0, &AppError::AnimationLoad("404".to_string()));
        assert_eq!(AnimationViewModel::bind_state(&state, 0), Some(BindState::Failed));
        assert!(state.markers.borrow().bound_indices().is_empty());
    }
}
