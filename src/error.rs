//! # Errores del servidor
//! src/error.rs

use crate::http::ParseError;
use thiserror::Error;

/// Result con el error del crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errores que pueden cortar una conexión o el arranque del servidor
#[derive(Debug, Error)]
pub enum Error {
    /// El request no se pudo parsear
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error de socket (bind, accept, write)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuración inválida
    #[error("invalid config: {0}")]
    Config(String),
}
