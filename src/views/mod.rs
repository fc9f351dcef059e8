pub mod marker_content;
pub mod legend;

pub use marker_content::build_marker_content;
pub use legend::render_legend_entry;
