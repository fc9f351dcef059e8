// ============================================================================
// LEGEND VIEW - Items de la lista de lugares
// ============================================================================

use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::error::AppError;
use crate::utils::LEGEND_ITEM_CLASS;
use crate::viewmodels::LegendEntry;

/// Crear `li.legend-place` con `<p>{nombre}</p>` (los listeners se conectan en App)
pub fn render_legend_entry(entry: &LegendEntry) -> Result<Element, AppError> {
    let name = ElementBuilder::new("p")?.text(&entry.name).build();
    Ok(ElementBuilder::new("li")?
        .class(LEGEND_ITEM_CLASS)
        .attr("data-index", &entry.index.to_string())?
        .child(&name)?
        .build())
}
