//! # Errores de los handlers
//! src/error.rs
//!
//! Todo error es local a la conexión: el router lo registra y, salvo
//! `--explicit-errors`, no se escribe respuesta.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fallas que puede producir un endpoint
#[derive(Debug)]
pub enum HandlerError {
    /// Valor numérico inválido o fuera de rango en la query
    InvalidNumber(String),

    /// El archivo pedido no existe
    FileNotFound(PathBuf),

    /// Extensión sin tipo MIME en la tabla
    UnsupportedExtension(String),

    /// Upload sin header `Content-Length`
    MissingContentLength,

    /// Error de lectura/escritura (archivo o socket)
    Io(io::Error),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::InvalidNumber(v) => write!(f, "Invalid number: {:?}", v),
            HandlerError::FileNotFound(p) => write!(f, "File not found: {}", p.display()),
            HandlerError::UnsupportedExtension(e) => write!(f, "Unsupported file extension: {:?}", e),
            HandlerError::MissingContentLength => write!(f, "Missing Content-Length header"),
            HandlerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HandlerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HandlerError {
    fn from(e: io::Error) -> Self {
        HandlerError::Io(e)
    }
}
