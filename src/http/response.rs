//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! El orden de los headers es fijo:
//!
//! ```text
//! HTTP/1.1 302 moved temporarily\r\n
//! Content-Type: text/html\r\n
//! Location: /\r\n
//! Content-Length: 21\r\n
//! \r\n
//! 302 MOVED TEMPORARILY
//! ```
//!
//! `Location` solo aparece en las respuestas 302 y `Content-Length` se
//! calcula del body al serializar, nunca se guarda aparte.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use webroot_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_content_type("text/plain")
//!     .with_body("42");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"Content-Length: 2\r\n\r\n42"));
//! ```

use super::StatusCode;

/// Destino de toda redirección 302
pub const REDIRECT_LOCATION: &str = "/";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Valor del header `Content-Type`
    content_type: String,

    /// Valor del header `Location` (solo 302)
    location: Option<String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto el body es vacío y el tipo es `text/html`. Un 302 nace
    /// con `Location: /`.
    pub fn new(status: StatusCode) -> Self {
        let location = if status == StatusCode::Found {
            Some(REDIRECT_LOCATION.to_string())
        } else {
            None
        };

        Self {
            status,
            content_type: "text/html".to_string(),
            location,
            body: Vec::new(),
        }
    }

    /// Establece el header `Content-Type`
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Establece el header `Location`
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para archivos binarios (imágenes, uploads)
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Respuesta 200 en texto plano (endpoints de cálculo y upload)
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::Response;
    ///
    /// let response = Response::text("20");
    /// assert_eq!(response.content_type(), "text/plain");
    /// ```
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body(body)
    }

    /// Respuesta HTML con el código indicado (respuestas enlatadas)
    pub fn html(status: StatusCode, body: &str) -> Self {
        Self::new(status)
            .with_content_type("text/html")
            .with_body(body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - `Content-Type`
    /// - `Location` (si existe)
    /// - `Content-Length` con el largo en bytes del body
    /// - Línea vacía y body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        // 1. Status line
        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        // 2. Headers, en orden fijo
        result.extend_from_slice(format!("Content-Type: {}\r\n", self.content_type).as_bytes());
        if let Some(location) = &self.location {
            result.extend_from_slice(format!("Location: {}\r\n", location).as_bytes());
        }
        result.extend_from_slice(format!("Content-Length: {}\r\n", self.body.len()).as_bytes());

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el tipo de contenido
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Obtiene el destino de redirección, si existe
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
