//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /upload?file=foto.png HTTP/1.1\r\n
//! Host: localhost\r\n
//! Content-Length: 1024\r\n
//! \r\n
//! ```
//!
//! Solo se interpreta la request line: el primer token es el método y el
//! segundo el recurso, tal como llegó (sin normalizar ni decodificar `%xx`).
//! De los headers solo interesa `Content-Length`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Header `Content-Length` con etiqueta exacta (sensible a mayúsculas)
static CONTENT_LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Content-Length:\s*(\d+)\s*$").expect("regex de Content-Length válida")
});

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso (uploads)
    POST,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es exactamente `GET` o `POST`
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST)
    method: Method,

    /// Recurso crudo con query (ej: "/calculate-area?height=10&width=4")
    resource: String,

    /// Texto completo de los headers
    head: String,

    /// Valor de `Content-Length`, si vino
    content_length: Option<usize>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío (también lo que deja un error de lectura)
    EmptyRequest,

    /// Método HTTP no soportado
    UnsupportedMethod(String),

    /// La request line no trae recurso
    MissingResource,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::MissingResource => write!(f, "Missing resource in request line"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request desde el texto de headers
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use webroot_server::http::{Method, Request};
    ///
    /// let request = Request::parse("GET /calculate-next?num=41 HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// assert_eq!(request.method(), Method::GET);
    /// assert_eq!(request.resource(), "/calculate-next?num=41");
    /// ```
    pub fn parse(head: &str) -> Result<Self, ParseError> {
        if head.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Tokens separados por un espacio, como llegan en la request line
        let request_line = head.split("\r\n").next().unwrap_or_default();
        let mut tokens = request_line.split(' ');

        let method = Method::from_str(tokens.next().unwrap_or_default())?;
        let resource = tokens.next().ok_or(ParseError::MissingResource)?;

        Ok(Request {
            method,
            resource: resource.to_string(),
            head: head.to_string(),
            content_length: Self::parse_content_length(head),
        })
    }

    /// Busca el primer header `Content-Length` válido
    fn parse_content_length(head: &str) -> Option<usize> {
        head.split("\r\n")
            .skip(1)
            .find_map(|line| CONTENT_LENGTH.captures(line))
            .and_then(|caps| caps[1].parse().ok())
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el recurso crudo (path + query)
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Obtiene el path sin la query string
    pub fn path(&self) -> &str {
        self.resource
            .split_once('?')
            .map_or(self.resource.as_str(), |(path, _)| path)
    }

    /// Obtiene el texto crudo de los headers
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Largo declarado del body
    pub fn content_length(&self) -> Option<usize> {
        self.content_length
    }
}
