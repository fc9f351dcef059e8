// ============================================================================
// MAP SERVICE - Mapa de Google y marcadores avanzados
// ============================================================================

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::MapConfig;
use crate::error::AppError;
use crate::models::Place;
use crate::utils::google_maps_ffi::{
    construct, library_class, load_library, AdvancedMarkerElement, GoogleMap, LatLngObject,
};
use crate::utils::{as_js, js_object};

pub struct MapService {
    map: GoogleMap,
    marker_class: Function,
}

impl MapService {
    /// Cargar las librerías `maps`, `core` y `marker` y crear el mapa en `container`
    pub async fn init(container: &Element, config: &MapConfig) -> Result<Self, AppError> {
        log::info!(
            "🗺️ [MAP] Inicializando mapa en ({}, {}) zoom {}",
            config.default_center_lat,
            config.default_center_lng,
            config.default_zoom
        );

        let maps = load_library("maps").await?;
        let core = load_library("core").await?;
        let marker = load_library("marker").await?;

        let lat_lng_class = library_class(&core, "core", "LatLng")?;
        let center: LatLngObject = construct(
            &lat_lng_class,
            &[
                &JsValue::from(config.default_center_lat),
                &JsValue::from(config.default_center_lng),
            ],
        )?;

        let options = js_object(&[
            ("zoom", &JsValue::from(config.default_zoom)),
            ("center", as_js(&center)),
            ("mapId", &JsValue::from_str(&config.map_id)),
        ])?;

        let map_class = library_class(&maps, "maps", "Map")?;
        let map: GoogleMap = construct(&map_class, &[as_js(container), as_js(&options)])?;
        let marker_class = library_class(&marker, "marker", "AdvancedMarkerElement")?;

        log::info!("✅ [MAP] Mapa inicializado");
        Ok(Self { map, marker_class })
    }

    /// Colocar un marcador avanzado con `content` en la posición del lugar
    pub fn place_marker(&self, place: &Place, content: &Element) -> Result<AdvancedMarkerElement, AppError> {
        let position = serde_wasm_bindgen::to_value(&place.position())?;
        let options = js_object(&[
            ("map", as_js(&self.map)),
            ("content", as_js(content)),
            ("position", &position),
            ("title", &JsValue::from_str(place.name())),
        ])?;

        let marker: AdvancedMarkerElement = construct(&self.marker_class, &[as_js(&options)])?;
        log::info!(
            "📍 [MAP] Marcador colocado en ({}, {}): {}",
            place.position().lat,
            place.position().lng,
            place.name()
        );
        Ok(marker)
    }

    /// Registrar el handler de click del marcador
    pub fn on_marker_click<F>(marker: &AdvancedMarkerElement, handler: F)
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::<dyn FnMut()>::new(handler);
        marker.add_listener("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
