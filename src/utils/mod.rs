// Utils compartidos

pub mod constants;
pub mod google_maps_ffi;
pub mod rive_ffi;
pub mod js_object;

pub use constants::*;
pub use js_object::{as_js, js_object};
