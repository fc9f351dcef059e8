// ============================================================================
// APP - Cableado de servicios, viewmodels y vistas
// ============================================================================
// Flujo: autocompletado → store → contenido del marcador → mapa →
//        binding de animación (encadenado) → leyenda
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlCanvasElement, HtmlInputElement};
use crate::config::CONFIG;
use crate::dom::{append_child, on_click, on_mouse_enter, on_mouse_leave, remove_class, require_element, require_selector};
use crate::error::AppError;
use crate::maps::web::WebMarker;
use crate::models::PlaceSelection;
use crate::services::{AnimationService, AutocompleteService, MapService};
use crate::state::{AppState, CancelToken};
use crate::utils::{
    AUTOCOMPLETE_INPUT_ID, HIDDEN_CLASS, LEGEND_CONTAINER_SELECTOR, LEGEND_LIST_ID, MAP_CONTAINER_ID,
};
use crate::viewmodels::{AnimationViewModel, LegendViewModel, MapViewModel, PlaceViewModel};
use crate::views::{build_marker_content, render_legend_entry};

/// Elementos del DOM que la página debe proveer
pub struct AppDom {
    pub map_container: Element,
    pub autocomplete_input: HtmlInputElement,
    pub legend_list: Element,
    pub legend_container: Element,
}

impl AppDom {
    /// Resolver todos los elementos requeridos (falla con el primero que falte)
    pub fn resolve() -> Result<Self, AppError> {
        let map_container = require_element(MAP_CONTAINER_ID)?;
        let autocomplete_input = require_element(AUTOCOMPLETE_INPUT_ID)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| AppError::MissingElement(format!("input#{}", AUTOCOMPLETE_INPUT_ID)))?;
        let legend_list = require_element(LEGEND_LIST_ID)?;
        let legend_container = require_selector(LEGEND_CONTAINER_SELECTOR)?;

        Ok(Self {
            map_container,
            autocomplete_input,
            legend_list,
            legend_container,
        })
    }
}

/// Aplicación principal (clonable: todos los campos son compartidos)
#[derive(Clone)]
pub struct App {
    state: AppState,
    map: Rc<MapService>,
    legend_list: Element,
    legend_container: Element,
}

impl App {
    /// Crear el mapa y conectar el autocompletado
    pub async fn start(dom: AppDom) -> Result<Self, AppError> {
        let map = MapService::init(&dom.map_container, &CONFIG.map).await?;

        let app = Self {
            state: AppState::new(),
            map: Rc::new(map),
            legend_list: dom.legend_list,
            legend_container: dom.legend_container,
        };

        let handler_app = app.clone();
        AutocompleteService::init(&dom.autocomplete_input, &CONFIG.autocomplete, move |selection| {
            let app = handler_app.clone();
            spawn_local(async move {
                app.handle_selection(selection).await;
            });
        })
        .await?;

        log::info!("✅ [APP] Aplicación lista");
        Ok(app)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    async fn handle_selection(&self, selection: PlaceSelection) {
        if let Err(e) = self.place_selection(selection).await {
            log::error!("❌ [APP] Error procesando la selección: {}", e);
        }
    }

    async fn place_selection(&self, selection: PlaceSelection) -> Result<(), AppError> {
        let Some((index, place)) = PlaceViewModel::accept_selection(&self.state, &selection) else {
            return Ok(());
        };

        let content = build_marker_content(&place, index)?;
        let marker = self.map.place_marker(&place, &content.root)?;
        MapViewModel::register_marker(&self.state, index, place, Rc::new(WebMarker::new(marker.clone())));

        let state = self.state.clone();
        MapService::on_marker_click(&marker, move || {
            if let Err(e) = MapViewModel::toggle_highlight(&state, index) {
                log::error!("❌ [MAP] Error alternando highlight #{}: {}", index, e);
            }
        });

        // El binding empieza una vez colocado el marcador
        let token = self.state.begin_bind(index);
        let result = self.bind_animation(index, &content.canvas, &token).await;
        self.state.finish_bind(index);

        if let Err(e) = result {
            AnimationViewModel::mark_failed(&self.state, index, &e);
        }
        Ok(())
    }

    async fn bind_animation(
        &self,
        index: usize,
        canvas: &HtmlCanvasElement,
        token: &CancelToken,
    ) -> Result<(), AppError> {
        AnimationService::wait_for_canvas(canvas, index, &CONFIG.animation, token).await?;
        let input = AnimationService::bind(canvas, &CONFIG.animation, token).await?;
        AnimationViewModel::attach_input(&self.state, index, Rc::new(input))?;
        self.add_legend_entry(index)
    }

    fn add_legend_entry(&self, index: usize) -> Result<(), AppError> {
        let entry = LegendViewModel::add_entry(&self.state, index)?;
        if entry.reveal_panel {
            remove_class(&self.legend_container, HIDDEN_CLASS)?;
        }

        let item = render_legend_entry(&entry)?;

        let state = self.state.clone();
        on_mouse_enter(&item, move |_| {
            if let Err(e) = LegendViewModel::hover_enter(&state, index) {
                log::warn!("⚠️ [LEGEND] hover #{}: {}", index, e);
            }
        })?;

        let state = self.state.clone();
        on_mouse_leave(&item, move |_| {
            if let Err(e) = LegendViewModel::hover_leave(&state, index) {
                log::warn!("⚠️ [LEGEND] hover #{}: {}", index, e);
            }
        })?;

        let state = self.state.clone();
        on_click(&item, move |_| {
            if let Err(e) = LegendViewModel::click(&state, index) {
                log::error!("❌ [LEGEND] click #{}: {}", index, e);
            }
        })?;

        append_child(&self.legend_list, &item)?;
        Ok(())
    }
}
