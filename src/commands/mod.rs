//! # Comandos del Servidor
//!
//! Este módulo contiene la implementación de los endpoints que el
//! router despacha.
//!
//! ## Categorías de comandos
//!
//! - **basic**: respuestas enlatadas (403, 302, 500) y cálculos (next, area)
//! - **files**: archivos estáticos, imágenes subidas y uploads
//!
//! Cada comando retorna `Result<Response, HandlerError>`; el router
//! decide qué hacer con los errores.

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;
