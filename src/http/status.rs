//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado que emite el servidor.
//!
//! Las frases de razón de 302, 403 y 500 van en minúsculas
//! (`403 forbidden`, `302 moved temporarily`, `500 error`); los clientes
//! que comparan bytes crudos dependen de ellas.
//!
//! - **2xx**: Éxito (200)
//! - **3xx**: Redirección (302 hacia `/`)
//! - **4xx**: Error del cliente (403, y 404/415 con `--explicit-errors`)
//! - **5xx**: Error del servidor (500 enlatado)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 302 - Redirección temporal (siempre con `Location: /`)
    Found = 302,

    /// 403 - Acceso prohibido (respuesta enlatada de `/forbidden`)
    Forbidden = 403,

    /// 404 Not Found - Archivo inexistente (solo con errores explícitos)
    NotFound = 404,

    /// 415 - Extensión sin tipo MIME conocido (solo con errores explícitos)
    UnsupportedMediaType = 415,

    /// 500 - Error interno (respuesta enlatada de `/error`)
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::StatusCode;
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Forbidden.reason_phrase(), "forbidden");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "moved temporarily",
            StatusCode::Forbidden => "forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
            StatusCode::InternalServerError => "error",
        }
    }

    /// Verifica si el código es una redirección (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.as_u16())
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato de la status line: "302 moved temporarily"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::Found.as_u16(), 302);
        assert_eq!(StatusCode::Forbidden.as_u16(), 403);
        assert_eq!(StatusCode::UnsupportedMediaType.as_u16(), 415);
        assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    }

    #[test]
    fn test_display_matches_wire_status_lines() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::Forbidden.to_string(), "403 forbidden");
        assert_eq!(StatusCode::Found.to_string(), "302 moved temporarily");
        assert_eq!(StatusCode::InternalServerError.to_string(), "500 error");
    }

    #[test]
    fn test_classification() {
        assert!(StatusCode::Found.is_redirect());
        assert!(!StatusCode::Ok.is_redirect());
        assert!(StatusCode::NotFound.is_client_error());
        assert!(StatusCode::Forbidden.is_client_error());
        assert!(!StatusCode::InternalServerError.is_client_error());
        assert!(StatusCode::InternalServerError.is_server_error());
    }
}
