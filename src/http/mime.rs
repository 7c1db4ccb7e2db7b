//! # Tabla de tipos MIME
//! src/http/mime.rs
//!
//! Tabla fija extensión → tipo MIME. Se consulta con la extensión en
//! minúsculas y sin punto.

/// Extensiones reconocidas por el servidor
pub const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("ico", "image/x-icon"),
];

/// Busca el tipo MIME de una extensión
///
/// # Ejemplo
/// ```
/// use webroot_server::http::mime::content_type;
///
/// assert_eq!(content_type("PNG"), Some("image/png"));
/// assert_eq!(content_type("exe"), None);
/// ```
pub fn content_type(extension: &str) -> Option<&'static str> {
    let extension = extension.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Extrae la extensión de un recurso: todo lo que sigue al último `.`
///
/// Sin punto se retorna el recurso completo, que nunca está en la tabla.
pub fn extension_of(resource: &str) -> &str {
    resource.rsplit('.').next().unwrap_or(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type("html"), Some("text/html"));
        assert_eq!(content_type("js"), Some("application/javascript"));
        assert_eq!(content_type("jpeg"), Some("image/jpeg"));
        assert_eq!(content_type("ico"), Some("image/x-icon"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(content_type("HTML"), Some("text/html"));
        assert_eq!(content_type("Jpg"), Some("image/jpeg"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type("bin"), None);
        assert_eq!(content_type(""), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("/css/site.min.css"), "css");
        assert_eq!(extension_of("/index.html"), "html");
        assert_eq!(extension_of("/README"), "/README");
    }
}
