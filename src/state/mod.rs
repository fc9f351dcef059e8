// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod cancel;
pub mod place_store;
pub mod marker_registry;
pub mod app_state;

pub use cancel::*;
pub use place_store::*;
pub use marker_registry::*;
pub use app_state::*;
