// ============================================================================
// PLACE STORE - Lista ordenada de lugares seleccionados
// ============================================================================
// Solo append: el índice de cada lugar es estable y denso (identifica su canvas)
// ============================================================================

use crate::models::Place;

#[derive(Debug, Default, Clone)]
pub struct PlaceStore {
    places: Vec<Place>,
}

impl PlaceStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un lugar y devuelve su índice
    pub fn append(&mut self, place: Place) -> usize {
        self.places.push(place);
        self.places.len() - 1
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }
}
