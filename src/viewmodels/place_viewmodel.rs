// ============================================================================
// PLACE VIEWMODEL - Selección de lugares
// ============================================================================

use crate::models::{Place, PlaceSelection};
use crate::state::AppState;

pub struct PlaceViewModel;

impl PlaceViewModel {
    /// Normaliza la selección y la agrega al store.
    /// Sin geometría (Enter sin elegir sugerencia) se ignora en silencio.
    pub fn accept_selection(state: &AppState, selection: &PlaceSelection) -> Option<(usize, Place)> {
        let Some(place) = Place::from_selection(selection) else {
            log::debug!(
                "🔍 [PLACES] Selección sin geometría ignorada: {:?}",
                selection.name.as_deref().unwrap_or("")
            );
            return None;
        };

        let index = state.places.borrow_mut().append(place.clone());
        log::info!(
            "📌 [PLACES] Lugar #{} agregado: {} ({:?})",
            index,
            place.name(),
            selection.place_id.as_deref().unwrap_or("sin place_id")
        );
        if let Ok(json) = serde_json::to_string(&place) {
            log::debug!("📦 [PLACES] {}", json);
        }
        Some((index, place))
    }
}
