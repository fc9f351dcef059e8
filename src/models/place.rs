use serde::{Deserialize, Serialize};

/// Coordenadas geográficas (se envían al mapa como `LatLngLiteral`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Resultado del autocompletado, ya normalizado y sin objetos del SDK.
/// `location` es `None` cuando el usuario pulsa Enter sin elegir sugerencia.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceSelection {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub location: Option<LatLng>,
}

/// Lugar seleccionado por el usuario. Inmutable una vez creado.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    position: LatLng,
    address: String,
    name: String,
}

impl Place {
    pub fn new(position: LatLng, address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            position,
            address: address.into(),
            name: name.into(),
        }
    }

    /// Convierte una selección en `Place`; sin geometría no hay lugar
    pub fn from_selection(selection: &PlaceSelection) -> Option<Self> {
        let position = selection.location?;
        Some(Self::new(
            position,
            selection.formatted_address.clone().unwrap_or_default(),
            selection.name.clone().unwrap_or_default(),
        ))
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection_without_geometry() {
        let selection = PlaceSelection {
            name: Some("Cafe X".to_string()),
            ..Default::default()
        };
        assert!(Place::from_selection(&selection).is_none());
    }

    #[test]
    fn test_from_selection_fills_missing_text() {
        let selection = PlaceSelection {
            location: Some(LatLng::new(41.88, -87.63)),
            ..Default::default()
        };
        let place = Place::from_selection(&selection).unwrap();
        assert_eq!(place.name(), "");
        assert_eq!(place.address(), "");
        assert_eq!(place.position(), LatLng::new(41.88, -87.63));
    }

    #[test]
    fn test_serialized_shape() {
        let place = Place::new(LatLng::new(41.88, -87.63), "1 Main St, Chicago, IL", "Cafe X");
        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": { "lat": 41.88, "lng": -87.63 },
                "address": "1 Main St, Chicago, IL",
                "name": "Cafe X",
            })
        );
    }
}
