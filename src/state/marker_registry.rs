// ============================================================================
// MARKER REGISTRY - Registro explícito por marcador
// ============================================================================
// Fuente de verdad del highlight y del input de animación; el DOM es solo
// una proyección de estos registros.
// ============================================================================

use std::collections::BTreeMap;
use std::rc::Rc;
use crate::maps::{ControlInput, MarkerView};
use crate::models::Place;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindState {
    Pending,
    Bound,
    Failed,
    Cancelled,
}

pub struct MarkerRecord {
    pub place: Place,
    pub highlighted: bool,
    pub marker: Rc<dyn MarkerView>,
    pub input: Option<Rc<dyn ControlInput>>,
    pub bind: BindState,
}

impl MarkerRecord {
    pub fn new(place: Place, marker: Rc<dyn MarkerView>) -> Self {
        Self {
            place,
            highlighted: false,
            marker,
            input: None,
            bind: BindState::Pending,
        }
    }
}

#[derive(Default)]
pub struct MarkerRegistry {
    records: BTreeMap<usize, MarkerRecord>,
}

impl MarkerRegistry {
    pub fn insert(&mut self, index: usize, record: MarkerRecord) {
        self.records.insert(index, record);
    }

    pub fn get(&self, index: usize) -> Option<&MarkerRecord> {
        self.records.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MarkerRecord> {
        self.records.get_mut(&index)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Índices con animación enlazada (los que tienen entrada en la leyenda)
    #[cfg(test)]
    pub fn bound_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|(_, r)| r.bind == BindState::Bound)
            .map(|(i, _)| *i)
            .collect()
    }
}
