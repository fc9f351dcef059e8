use crate::error::AppError;

/// Marcador del mapa que puede proyectar el estado de highlight
pub trait MarkerView {
    /// Aplicar (o quitar) el resaltado visual del marcador
    fn apply_highlight(&self, highlighted: bool) -> Result<(), AppError>;
}

/// Input booleano de una state machine de animación
pub trait ControlInput {
    fn set_value(&self, value: bool);
}
