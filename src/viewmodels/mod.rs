pub mod place_viewmodel;
pub mod map_viewmodel;
pub mod animation_viewmodel;
pub mod legend_viewmodel;

pub use place_viewmodel::PlaceViewModel;
pub use map_viewmodel::MapViewModel;
pub use animation_viewmodel::AnimationViewModel;
pub use legend_viewmodel::{LegendEntry, LegendViewModel};

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use super::*;
    use crate::maps::fakes::{FakeInput, FakeMarker};
    use crate::models::{LatLng, PlaceSelection};
    use crate::state::AppState;

    #[test]
    fn test_selection_to_legend_flow() {
        let state = AppState::new();
        let selection = PlaceSelection {
            place_id: Some("abc".to_string()),
            name: Some("Cafe X".to_string()),
            formatted_address: Some("1 Main St, Chicago, IL".to_string()),
            location: Some(LatLng::new(41.8781, -87.6298)),
        };

        let (index, place) = PlaceViewModel::accept_selection(&state, &selection).unwrap();
        assert_eq!(index, 0);
        assert_eq!(place.name(), "Cafe X");
        assert_eq!(place.address(), "1 Main St, Chicago, IL");
        assert_eq!(place.position(), LatLng::new(41.8781, -87.6298));

        let marker = Rc::new(FakeMarker::default());
        MapViewModel::register_marker(&state, index, place, marker.clone());

        let token = state.begin_bind(index);
        let input = Rc::new(FakeInput::default());
        assert!(!token.is_cancelled());
        AnimationViewModel::attach_input(&state, index, input.clone()).unwrap();
        state.finish_bind(index);

        let entry = LegendViewModel::add_entry(&state, index).unwrap();
        assert_eq!(entry.name, "Cafe X");
        assert!(entry.reveal_panel);

        LegendViewModel::hover_enter(&state, entry.index).unwrap();
        assert!(input.value());

        // El click del marcador en el mapa usa el mismo toggle
        MapViewModel::toggle_highlight(&state, index).unwrap();
        assert!(marker.highlighted.get());
    }

    #[test]
    fn test_overlapping_selections_both_reach_legend() {
        let state = AppState::new();
        let names = ["A", "B"];

        // Las dos selecciones se colocan antes de que cargue ninguna animación
        let mut pending = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let selection = PlaceSelection {
                name: Some(name.to_string()),
                location: Some(LatLng::new(41.0, -87.0 + i as f64)),
                ..Default::default()
            };
            let (index, place) = PlaceViewModel::accept_selection(&state, &selection).unwrap();
            MapViewModel::register_marker(&state, index, place, Rc::new(FakeMarker::default()));
            pending.push((index, state.begin_bind(index)));
        }
        assert_eq!(state.place_count(), 2);

        // Terminan en orden inverso
        for (index, token) in pending.iter().rev() {
            assert!(!token.is_cancelled());
            AnimationViewModel::attach_input(&state, *index, Rc::new(FakeInput::default())).unwrap();
            state.finish_bind(*index);
        }

        let second = LegendViewModel::add_entry(&state, 1).unwrap();
        let first = LegendViewModel::add_entry(&state, 0).unwrap();
        assert_eq!((first.name.as_str(), second.name.as_str()), ("A", "B"));
        assert!(second.reveal_panel);
        assert!(!first.reveal_panel);
        assert!(state.pending_binds.borrow().is_empty());
    }
}
