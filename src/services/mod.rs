// ============================================================================
// SERVICES - Comunicación con los SDKs del navegador
// ============================================================================

pub mod map_service;
pub mod autocomplete_service;
pub mod animation_service;

pub use map_service::MapService;
pub use autocomplete_service::AutocompleteService;
pub use animation_service::AnimationService;
