/// IDs y selectores del DOM que la página debe proveer
pub const MAP_CONTAINER_ID: &str = "map";
pub const AUTOCOMPLETE_INPUT_ID: &str = "autocomplete";
pub const LEGEND_LIST_ID: &str = "added-places";
pub const LEGEND_CONTAINER_SELECTOR: &str = ".places-container";

/// Clases CSS
pub const HIDDEN_CLASS: &str = "hidden";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const MARKER_CONTENT_CLASS: &str = "property";
pub const LEGEND_ITEM_CLASS: &str = "legend-place";

/// z-index de un marcador resaltado
pub const HIGHLIGHT_Z_INDEX: i32 = 1;

/// ID del canvas de animación del marcador `index`
pub fn canvas_id(index: usize) -> String {
    format!("canvas-{}", index)
}
