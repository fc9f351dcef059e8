// ============================================================================
// MARKER CONTENT - Contenido HTML del marcador avanzado
// ============================================================================
// Nombre y dirección van como text content: nunca se interpretan como HTML
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement};
use crate::dom::ElementBuilder;
use crate::error::AppError;
use crate::models::Place;
use crate::utils::{canvas_id, MARKER_CONTENT_CLASS};

const CANVAS_STYLE: &str = "width: 100%; height: 100%;";

/// Nodo de contenido del marcador y su canvas de animación
pub struct MarkerContent {
    pub root: Element,
    pub canvas: HtmlCanvasElement,
}

/// Bloques de texto de `.details`: (clase, texto)
pub fn marker_details(place: &Place) -> [(&'static str, &str); 2] {
    [("price", place.name()), ("address", place.address())]
}

/// Crear el nodo `div.property` para el marcador `index`:
/// `.icon` con el canvas `canvas-{index}` + `.details` con nombre y dirección
pub fn build_marker_content(place: &Place, index: usize) -> Result<MarkerContent, AppError> {
    let canvas = ElementBuilder::new("canvas")?
        .attr("id", &canvas_id(index))?
        .attr("style", CANVAS_STYLE)?
        .build()
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AppError::MissingElement(format!("#{}", canvas_id(index))))?;

    let icon = ElementBuilder::new("div")?.class("icon").child(&canvas)?.build();

    let mut details = ElementBuilder::new("div")?.class("details");
    for (class, text) in marker_details(place) {
        let line = ElementBuilder::new("div")?.class(class).text(text).build();
        details = details.child(&line)?;
    }

    let root = ElementBuilder::new("div")?
        .class(MARKER_CONTENT_CLASS)
        .child(&icon)?
        .child(&details.build())?
        .build();

    Ok(MarkerContent { root, canvas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatLng;

    #[test]
    fn test_details_order_and_classes() {
        let place = Place::new(LatLng::new(41.0, -87.0), "1 Main St, Chicago, IL", "Cafe X");
        assert_eq!(
            marker_details(&place),
            [("price", "Cafe X"), ("address", "1 Main St, Chicago, IL")]
        );
    }

    #[test]
    fn test_details_with_empty_fields() {
        let place = Place::new(LatLng::new(0.0, 0.0), "", "");
        assert_eq!(marker_details(&place), [("price", ""), ("address", "")]);
    }

    #[test]
    fn test_details_keep_markup_as_plain_text() {
        // Se asigna con textContent, así que no se transforma
        let place = Place::new(LatLng::new(0.0, 0.0), "<script>", "A & B");
        assert_eq!(marker_details(&place), [("price", "A & B"), ("address", "<script>")]);
    }
}
