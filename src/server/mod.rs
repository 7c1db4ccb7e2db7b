//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto con un backlog configurable
//! 2. Acepta conexiones entrantes, una a la vez
//! 3. Lee los headers y parsea el request
//! 4. Envía la response (si la hay) y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
