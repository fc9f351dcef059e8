// ============================================================================
// AUTOCOMPLETE SERVICE - Widget de búsqueda de lugares
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use crate::config::AutocompleteConfig;
use crate::error::AppError;
use crate::models::{LatLng, PlaceSelection};
use crate::utils::as_js;
use crate::utils::google_maps_ffi::{construct, library_class, load_library, Autocomplete};

/// Opciones tal como las espera `google.maps.places.Autocomplete`
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteOptions {
    pub types: Vec<String>,
    pub component_restrictions: ComponentRestrictions,
    pub fields: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ComponentRestrictions {
    pub country: Vec<String>,
}

impl From<&AutocompleteConfig> for AutocompleteOptions {
    fn from(config: &AutocompleteConfig) -> Self {
        Self {
            types: config.types.clone(),
            component_restrictions: ComponentRestrictions {
                country: vec![config.country.clone()],
            },
            fields: config.fields.clone(),
        }
    }
}

pub struct AutocompleteService;

impl AutocompleteService {
    /// Asociar el autocompletado al input; `on_select` recibe cada `place_changed`
    pub async fn init<F>(
        input: &HtmlInputElement,
        config: &AutocompleteConfig,
        on_select: F,
    ) -> Result<Autocomplete, AppError>
    where
        F: Fn(PlaceSelection) + 'static,
    {
        let places = load_library("places").await?;
        let class = library_class(&places, "places", "Autocomplete")?;
        let options = serde_wasm_bindgen::to_value(&AutocompleteOptions::from(config))?;
        let autocomplete: Autocomplete = construct(&class, &[as_js(input), &options])?;

        let source = autocomplete.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            on_select(Self::read_selection(&source));
        });
        autocomplete.add_listener("place_changed", closure.as_ref().unchecked_ref());
        closure.forget();

        log::info!(
            "🔍 [AUTOCOMPLETE] Inicializado (país: {}, tipos: {:?})",
            config.country,
            config.types
        );
        Ok(autocomplete)
    }

    /// Normalizar el `PlaceResult` actual del widget
    pub fn read_selection(autocomplete: &Autocomplete) -> PlaceSelection {
        let Some(place) = autocomplete.get_place() else {
            return PlaceSelection::default();
        };
        PlaceSelection {
            place_id: place.place_id(),
            name: place.name(),
            formatted_address: place.formatted_address(),
            location: place
                .geometry()
                .and_then(|geometry| geometry.location())
                .map(|location| LatLng::new(location.lat(), location.lng())),
        }
    }
}
