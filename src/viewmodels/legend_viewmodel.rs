// ============================================================================
// LEGEND VIEWMODEL - Lista de lugares sincronizada con los marcadores
// ============================================================================

use std::rc::Rc;
use crate::error::AppError;
use crate::maps::ControlInput;
use crate::state::{AppState, BindState};
use crate::viewmodels::MapViewModel;

/// Datos para renderizar una entrada de la leyenda
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub index: usize,
    pub name: String,
    /// true solo para la primera entrada: hay que mostrar el panel
    pub reveal_panel: bool,
}

pub struct LegendViewModel;

impl LegendViewModel {
    /// Preparar la entrada del marcador `index`; requiere el input ya enlazado
    pub fn add_entry(state: &AppState, index: usize) -> Result<LegendEntry, AppError> {
        let name = {
            let markers = state.markers.borrow();
            let record = markers.get(index).ok_or(AppError::UnknownMarker(index))?;
            if record.bind != BindState::Bound {
                return Err(AppError::NotBound(index));
            }
            record.place.name().to_string()
        };

        let reveal_panel = {
            let mut revealed = state.legend_revealed.borrow_mut();
            let first = !*revealed;
            *revealed = true;
            first
        };

        log::info!("📋 [LEGEND] Entrada #{} agregada: {}", index, name);
        Ok(LegendEntry { index, name, reveal_panel })
    }

    /// mouseenter: activar la animación del marcador
    pub fn hover_enter(state: &AppState, index: usize) -> Result<(), AppError> {
        Self::input(state, index)?.set_value(true);
        Ok(())
    }

    /// mouseleave: desactivar la animación
    pub fn hover_leave(state: &AppState, index: usize) -> Result<(), AppError> {
        Self::input(state, index)?.set_value(false);
        Ok(())
    }

    /// click: alternar highlight del marcador (no toca el input)
    pub fn click(state: &AppState, index: usize) -> Result<bool, AppError> {
        MapViewModel::toggle_highlight(state, index)
    }

    fn input(state: &AppState, index: usize) -> Result<Rc<dyn ControlInput>, AppError> {
        let markers = state.markers.borrow();
        let record = markers.get(index).ok_or(AppError::UnknownMarker(index))?;
        record.input.clone().ok_or(AppError::NotBound(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::fakes::{FakeInput, FakeMarker};
    use crate::models::{LatLng, Place};
    use crate::viewmodels::AnimationViewModel;

    fn bound_marker(state: &AppState, index: usize, name: &str) -> (Rc<FakeMarker>, Rc<FakeInput>) {
        let marker = Rc::new(FakeMarker::default());
        let input = Rc::new(FakeInput::default());
        let place = Place::new(LatLng::new(0.0, 0.0), "", name);
        MapViewModel::register_marker(state, index, place, marker.clone());
        AnimationViewModel::attach_input(state, index, input.clone()).unwrap();
        (marker, input)
    }

    #[test]
    fn test_panel_revealed_once() {
        let state = AppState::new();
        bound_marker(&state, 0, "a");
        bound_marker(&state, 1, "b");
        bound_marker(&state, 2, "c");

        assert!(!state.is_legend_revealed());
        assert!(LegendViewModel::add_entry(&state, 0).unwrap().reveal_panel);
        assert!(!LegendViewModel::add_entry(&state, 1).unwrap().reveal_panel);
        assert!(!LegendViewModel::add_entry(&state, 2).unwrap().reveal_panel);
        assert!(state.is_legend_revealed());
    }

    #[test]
    fn test_entry_requires_bound_input() {
        let state = AppState::new();
        let place = Place::new(LatLng::new(0.0, 0.0), "", "sin animación");
        MapViewModel::register_marker(&state, 0, place, Rc::new(FakeMarker::default()));

        assert_eq!(LegendViewModel::add_entry(&state, 0), Err(AppError::NotBound(0)));
        assert_eq!(LegendViewModel::add_entry(&state, 1), Err(AppError::UnknownMarker(1)));
        assert!(!state.is_legend_revealed());
    }

    #[test]
    fn test_hover_sets_input() {
        let state = AppState::new();
        let (marker, input) = bound_marker(&state, 0, "a");

        LegendViewModel::hover_enter(&state, 0).unwrap();
        assert!(input.value());
        LegendViewModel::hover_leave(&state, 0).unwrap();
        assert!(!input.value());
        assert_eq!(marker.applied.get(), 0);
    }

    #[test]
    fn test_click_toggles_highlight_without_touching_input() {
        let state = AppState::new();
        let (marker, input) = bound_marker(&state, 0, "a");
        LegendViewModel::hover_enter(&state, 0).unwrap();

        assert_eq!(LegendViewModel::click(&state, 0), Ok(true));
        assert!(marker.highlighted.get());
        assert!(input.value());
        assert_eq!(input.writes.get(), 1);

        assert_eq!(LegendViewModel::click(&state, 0), Ok(false));
        assert!(!marker.highlighted.get());
    }
}
