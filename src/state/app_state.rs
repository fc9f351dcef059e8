// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Se construye una sola vez en App y se pasa a cada handler (sin globals sueltos)
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use crate::state::{CancelToken, MarkerRegistry, PlaceStore};

#[derive(Clone, Default)]
pub struct AppState {
    pub places: Rc<RefCell<PlaceStore>>,
    pub markers: Rc<RefCell<MarkerRegistry>>,
    /// La leyenda se muestra con la primera entrada y ya no se oculta
    pub legend_revealed: Rc<RefCell<bool>>,
    /// Bindings de animación en curso, uno por índice de lugar
    pub pending_binds: Rc<RefCell<BTreeMap<usize, CancelToken>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inicia el binding del marcador `index`. Los bindings de otros lugares siguen su curso.
    pub fn begin_bind(&self, index: usize) -> CancelToken {
        let token = CancelToken::new();
        self.pending_binds.borrow_mut().insert(index, token.clone());
        token
    }

    /// El binding de `index` terminó (con o sin éxito)
    pub fn finish_bind(&self, index: usize) {
        self.pending_binds.borrow_mut().remove(&index);
    }

    /// Cancela todos los bindings pendientes (p.ej. al descargar la página)
    pub fn cancel_pending(&self) {
        let pending = std::mem::take(&mut *self.pending_binds.borrow_mut());
        if !pending.is_empty() {
            log::debug!("⏹️ [STATE] {} binding(s) pendientes cancelados", pending.len());
        }
        for token in pending.values() {
            token.cancel();
        }
    }

    pub fn place_count(&self) -> usize {
        self.places.borrow().len()
    }

    #[cfg(test)]
    pub fn is_legend_revealed(&self) -> bool {
        *self.legend_revealed.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_binds_are_independent() {
        let state = AppState::new();
        let first = state.begin_bind(0);
        let second = state.begin_bind(1);
        assert!(!first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(state.pending_binds.borrow().len(), 2);
    }

    #[test]
    fn test_finish_bind_only_clears_its_index() {
        let state = AppState::new();
        let _first = state.begin_bind(0);
        let second = state.begin_bind(1);

        state.finish_bind(0);
        assert!(state.pending_binds.borrow().contains_key(&1));
        assert!(!state.pending_binds.borrow().contains_key(&0));

        state.finish_bind(1);
        assert!(state.pending_binds.borrow().is_empty());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn test_cancel_pending_cancels_all() {
        let state = AppState::new();
        let first = state.begin_bind(0);
        let second = state.begin_bind(1);
        state.cancel_pending();
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
        assert!(state.pending_binds.borrow().is_empty());
    }
}
