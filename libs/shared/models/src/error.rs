use thiserror::Error;

/// Message shown when a failure response carries no usable `error` field.
pub const GENERIC_SERVER_ERROR: &str = "Error inesperado del servidor";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text suitable for a user-facing notification. Server-reported failures
    /// surface the backend's own message; transport and decoding failures fall
    /// back to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Auth(msg) | ApiError::NotFound(msg) | ApiError::Server(msg) => msg.clone(),
            ApiError::Network(_) | ApiError::Decode(_) => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_variant_surfaces_backend_message() {
        let err = ApiError::Server("Horario no disponible".to_string());
        assert_eq!(err.user_message(), "Horario no disponible");
    }

    #[test]
    fn test_decode_falls_back_to_generic_message() {
        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.user_message(), GENERIC_SERVER_ERROR);
    }
}
