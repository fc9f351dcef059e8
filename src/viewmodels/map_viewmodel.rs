// ============================================================================
// MAP VIEWMODEL - Marcadores y highlight
// ============================================================================
// SOLO lógica: el DOM se actualiza a través de `MarkerView`
// ============================================================================

use std::rc::Rc;
use crate::error::AppError;
use crate::maps::MarkerView;
use crate::models::Place;
use crate::state::{AppState, MarkerRecord};

pub struct MapViewModel;

impl MapViewModel {
    /// Registrar el marcador recién colocado (sin highlight, binding pendiente)
    pub fn register_marker(state: &AppState, index: usize, place: Place, marker: Rc<dyn MarkerView>) {
        state
            .markers
            .borrow_mut()
            .insert(index, MarkerRecord::new(place, marker));
        log::debug!("📍 [MAP] Marcador #{} registrado", index);
    }

    /// Invierte el highlight del marcador y lo proyecta al DOM.
    /// Devuelve el nuevo estado.
    pub fn toggle_highlight(state: &AppState, index: usize) -> Result<bool, AppError> {
        let (marker, highlighted) = {
            let mut markers = state.markers.borrow_mut();
            let record = markers.get_mut(index).ok_or(AppError::UnknownMarker(index))?;
            record.highlighted = !record.highlighted;
            (record.marker.clone(), record.highlighted)
        };

        if let Err(e) = marker.apply_highlight(highlighted) {
            // Revertir para que el registro siga coincidiendo con el DOM
            if let Some(record) = state.markers.borrow_mut().get_mut(index) {
                record.highlighted = !highlighted;
            }
            return Err(e);
        }

        log::debug!("✨ [MAP] Marcador #{} highlight = {}", index, highlighted);
        Ok(highlighted)
    }

    #[cfg(test)]
    pub fn is_highlighted(state: &AppState, index: usize) -> bool {
        state
            .markers
            .borrow()
            .get(index)
            .map(|r| r.highlighted)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::fakes::FakeMarker;
    use crate::models::LatLng;

    fn setup() -> (AppState, Rc<FakeMarker>) {
        let state = AppState::new();
        let marker = Rc::new(FakeMarker::default());
        let place = Place::new(LatLng::new(41.0, -87.0), "dir", "nombre");
        MapViewModel::register_marker(&state, 0, place, marker.clone());
        (state, marker)
    }

    #[test]
    fn test_initially_not_highlighted() {
        let (state, marker) = setup();
        assert!(!MapViewModel::is_highlighted(&state, 0));
        assert_eq!(marker.applied.get(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (state, marker) = setup();

        assert_eq!(MapViewModel::toggle_highlight(&state, 0), Ok(true));
        assert!(marker.highlighted.get());

        assert_eq!(MapViewModel::toggle_highlight(&state, 0), Ok(false));
        assert!(!marker.highlighted.get());
        assert!(!MapViewModel::is_highlighted(&state, 0));
        assert_eq!(marker.applied.get(), 2);
    }

    #[test]
    fn test_toggle_unknown_marker() {
        let (state, _) = setup();
        assert_eq!(
            MapViewModel::toggle_highlight(&state, 7),
            Err(AppError::UnknownMarker(7))
        );
    }

    #[test]
    fn test_failed_projection_reverts_state() {
        let (state, marker) = setup();
        marker.fail.set(true);
        assert!(MapViewModel::toggle_highlight(&state, 0).is_err());
        assert!(!MapViewModel::is_highlighted(&state, 0));
    }
}
