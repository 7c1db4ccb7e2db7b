//! # Módulo HTTP
//!
//! Este módulo implementa la parte del protocolo HTTP/1.1 que usa el
//! servidor, sin librerías de alto nivel:
//!
//! - Lectura de headers desde el socket
//! - Parsing de la request line
//! - Construcción de responses con orden de headers fijo
//! - Tabla de tipos MIME
//!
//! No hay conexiones persistentes ni chunked transfer encoding: cada
//! conexión lleva un request y una response (o ninguna).
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 2\r\n
//! \r\n
//! 42
//! ```

pub mod mime;      // Extensión → tipo MIME
pub mod reader;    // Lectura de headers del socket
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use reader::{read_head, RawRequest};
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
