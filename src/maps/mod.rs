// Puntos de contacto con los SDKs del navegador

// Traits comunes (implementados por el SDK real y por fakes en tests)
pub mod traits;

// Implementaciones sobre Google Maps y Rive
pub mod web;

pub use traits::{ControlInput, MarkerView};

#[cfg(test)]
pub mod fakes;
