// ============================================================================
// ERRORS - Taxonomía de fallos de la app
// ============================================================================
// AuthFailure: terminal, pantalla de error completa
// RequestFailure: local a la página que hizo la llamada
// ValidationFailure: rechazado antes de tocar la red, se muestra como toast
// ============================================================================

use thiserror::Error;

/// Status para fallos que nunca llegaron al servidor (sin red,
/// petición abortada, error al construir la petición).
pub const STATUS_NETWORK: u16 = 0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("authentication failed: {0}")]
    AuthFailure(String),

    #[error("request failed ({status}): {message}")]
    RequestFailure { status: u16, message: String },

    #[error("{0}")]
    ValidationFailure(String),
}

impl AppError {
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        AppError::RequestFailure {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::request(STATUS_NETWORK, message)
    }

    /// Status HTTP de los RequestFailure, `None` para el resto.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Mensaje apto para un toast o un error en línea.
    pub fn user_message(&self) -> String {
        match self {
            AppError::AuthFailure(_) => "Something went wrong. Please try again later.".to_string(),
            AppError::RequestFailure { message, .. } => message.clone(),
            AppError::ValidationFailure(message) => message.clone(),
        }
    }

    pub fn is_network(&self) -> bool {
        self.status() == Some(STATUS_NETWORK)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
