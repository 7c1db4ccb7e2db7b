//! # Webroot Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo que atiende una conexión a la vez: sirve
//! archivos estáticos de un web root y un puñado de endpoints fijos
//! (cálculos, uploads, imágenes y respuestas enlatadas).
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: lectura de headers, parsing de requests y construcción de responses
//! - `router`: clasificación del recurso y despacho a handlers
//! - `commands`: implementación de los endpoints
//! - `server`: listener TCP y manejo de conexiones
//! - `config`: configuración por CLI y variables de entorno
//! - `logger`: inicialización del logging
//! - `error`: errores de los handlers
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use webroot_server::config::Config;
//! use webroot_server::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al iniciar servidor");
//! server.run().expect("Error en el loop de accept");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
