//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo mapea el recurso de un request a su handler.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Route::classify → Router::dispatch → Handler → Option<Response>
//! ```
//!
//! La ruta se calcula una sola vez. El orden de evaluación importa (gana la
//! primera coincidencia):
//!
//! 1. `/` exacto → página por defecto del web root
//! 2. `/forbidden`, `/moved`, `/error` exactos → respuestas enlatadas
//! 3. prefijos `/calculate-next`, `/calculate-area`
//! 4. prefijos `/upload`, `/image` (si los uploads están activos)
//! 5. cualquier otra cosa → archivo estático
//!
//! `None` significa que no se escribe nada en el socket.

use crate::commands;
use crate::config::Config;
use crate::error::HandlerError;
use crate::http::{Request, Response, StatusCode};
use log::{debug, error, warn};
use std::io::Read;
use std::path::PathBuf;

/// Ruta de un request, con los datos que necesita su handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/` → página por defecto
    Index,
    /// `/forbidden`
    Forbidden,
    /// `/moved`
    Moved,
    /// `/error`
    ServerError,
    /// `/calculate-next...` con el recurso completo
    CalculateNext(&'a str),
    /// `/calculate-area...` con el recurso completo
    CalculateArea(&'a str),
    /// `/upload...` con el nombre de archivo (tras el último `=`)
    Upload { file: &'a str },
    /// `/image...` con el nombre de archivo (tras el último `=`)
    Image { file: &'a str },
    /// Cualquier otro recurso, tal cual
    Static(&'a str),
}

impl<'a> Route<'a> {
    /// Clasifica un recurso crudo
    ///
    /// # Ejemplo
    /// ```
    /// use webroot_server::router::Route;
    ///
    /// assert_eq!(Route::classify("/", true), Route::Index);
    /// assert_eq!(Route::classify("/image?file=a.png", true), Route::Image { file: "a.png" });
    /// assert_eq!(Route::classify("/image?file=a.png", false), Route::Static("/image?file=a.png"));
    /// ```
    pub fn classify(resource: &'a str, uploads_enabled: bool) -> Self {
        match resource {
            "/" => Route::Index,
            "/forbidden" => Route::Forbidden,
            "/moved" => Route::Moved,
            "/error" => Route::ServerError,
            r if r.starts_with("/calculate-next") => Route::CalculateNext(r),
            r if r.starts_with("/calculate-area") => Route::CalculateArea(r),
            r if uploads_enabled && r.starts_with("/upload") => Route::Upload {
                file: commands::basic::last_value(r),
            },
            r if uploads_enabled && r.starts_with("/image") => Route::Image {
                file: commands::basic::last_value(r),
            },
            r => Route::Static(r),
        }
    }

    /// Nombre corto para los logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Forbidden => "forbidden",
            Route::Moved => "moved",
            Route::ServerError => "error",
            Route::CalculateNext(_) => "calculate-next",
            Route::CalculateArea(_) => "calculate-area",
            Route::Upload { .. } => "upload",
            Route::Image { .. } => "image",
            Route::Static(_) => "static",
        }
    }
}

/// Router con los directorios y políticas del servidor
#[derive(Debug, Clone)]
pub struct Router {
    web_root: PathBuf,
    default_page: String,
    uploads_dir: PathBuf,
    uploads_enabled: bool,
    explicit_errors: bool,
}

impl Router {
    /// Crea el router a partir de la configuración
    pub fn from_config(config: &Config) -> Self {
        Self {
            web_root: config.web_root.clone(),
            default_page: config.default_page.clone(),
            uploads_dir: config.uploads_dir.clone(),
            uploads_enabled: config.uploads_enabled(),
            explicit_errors: config.explicit_errors,
        }
    }

    /// Despacha un request a su handler
    ///
    /// `body` entrega los bytes que siguen a los headers; solo lo consume
    /// /upload. Los errores de los handlers se registran aquí.
    pub fn dispatch<R: Read>(&self, request: &Request, body: &mut R) -> Option<Response> {
        let route = Route::classify(request.resource(), self.uploads_enabled);
        debug!("{} {} → {}", request.method().as_str(), request.resource(), route.name());

        match self.handle(route, request, body) {
            Ok(response) => Some(response),
            Err(e) => self.on_error(route, e),
        }
    }

    fn handle<R: Read>(
        &self,
        route: Route<'_>,
        request: &Request,
        body: &mut R,
    ) -> Result<Response, HandlerError> {
        match route {
            Route::Index => {
                commands::serve_file(&self.web_root, &format!("/{}", self.default_page))
            }
            Route::Forbidden => Ok(commands::forbidden()),
            Route::Moved => Ok(commands::moved()),
            Route::ServerError => Ok(commands::server_error()),
            Route::CalculateNext(resource) => commands::calculate_next(resource),
            Route::CalculateArea(resource) => commands::calculate_area(resource),
            Route::Upload { file } => {
                commands::upload(&self.uploads_dir, file, request.content_length(), body)
            }
            Route::Image { file } => commands::serve_file(&self.uploads_dir, file),
            Route::Static(resource) => commands::serve_file(&self.web_root, resource),
        }
    }

    /// Política de errores: registrar y no responder, salvo que los
    /// errores explícitos estén activos para archivos faltantes o sin tipo
    fn on_error(&self, route: Route<'_>, e: HandlerError) -> Option<Response> {
        match e {
            HandlerError::FileNotFound(_) if self.explicit_errors => {
                warn!("[{}] {}", route.name(), e);
                Some(Response::html(StatusCode::NotFound, "404 NOT FOUND"))
            }
            HandlerError::UnsupportedExtension(_) if self.explicit_errors => {
                warn!("[{}] {}", route.name(), e);
                Some(Response::html(
                    StatusCode::UnsupportedMediaType,
                    "415 UNSUPPORTED MEDIA TYPE",
                ))
            }
            HandlerError::FileNotFound(_) => {
                debug!("[{}] {} (sin respuesta)", route.name(), e);
                None
            }
            _ => {
                error!("[{}] {} (sin respuesta)", route.name(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{empty, Cursor};
    use tempfile::TempDir;

    fn router_for(web_root: &TempDir, uploads: &TempDir, explicit_errors: bool) -> Router {
        let mut config = Config::default();
        config.web_root = web_root.path().to_path_buf();
        config.uploads_dir = uploads.path().to_path_buf();
        config.explicit_errors = explicit_errors;
        Router::from_config(&config)
    }

    fn get(router: &Router, resource: &str) -> Option<Response> {
        let request = Request::parse(&format!("GET {} HTTP/1.1\r\n\r\n", resource)).unwrap();
        router.dispatch(&request, &mut empty())
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(Route::classify("/", true), Route::Index);
        assert_eq!(Route::classify("/forbidden", true), Route::Forbidden);
        assert_eq!(Route::classify("/moved", true), Route::Moved);
        assert_eq!(Route::classify("/error", true), Route::ServerError);
        assert_eq!(
            Route::classify("/calculate-next?num=1", true),
            Route::CalculateNext("/calculate-next?num=1")
        );
        assert_eq!(
            Route::classify("/calculate-area?height=1&width=2", true),
            Route::CalculateArea("/calculate-area?height=1&width=2")
        );
        assert_eq!(Route::classify("/upload?file=x.bin", true), Route::Upload { file: "x.bin" });
        assert_eq!(Route::classify("/image?file=x.png", true), Route::Image { file: "x.png" });
        assert_eq!(Route::classify("/css/a.css", true), Route::Static("/css/a.css"));
    }

    #[test]
    fn test_canned_routes_are_exact() {
        assert_eq!(Route::classify("/forbidden/", true), Route::Static("/forbidden/"));
        assert_eq!(Route::classify("/error?x=1", true), Route::Static("/error?x=1"));
    }

    #[test]
    fn test_prefix_routes() {
        assert!(matches!(Route::classify("/calculate-nextnum=3", true), Route::CalculateNext(_)));
        assert!(matches!(Route::classify("/uploads/a.png", true), Route::Upload { file: "/uploads/a.png" }));
    }

    #[test]
    fn test_uploads_disabled_fall_through() {
        assert_eq!(Route::classify("/upload?file=a", false), Route::Static("/upload?file=a"));
        assert_eq!(Route::classify("/image?file=a", false), Route::Static("/image?file=a"));
    }

    #[test]
    fn test_index_serves_default_page() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(web.path().join("index.html"), "<p>home</p>").unwrap();
        let router = router_for(&web, &up, false);

        let root = get(&router, "/").unwrap();
        let direct = get(&router, "/index.html").unwrap();
        assert_eq!(root.to_bytes(), direct.to_bytes());
    }

    #[test]
    fn test_dispatch_calculations() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let router = router_for(&web, &up, false);

        assert_eq!(get(&router, "/calculate-next?num=41").unwrap().body(), b"42");
        assert_eq!(get(&router, "/calculate-area?height=10&width=4").unwrap().body(), b"20");
        assert!(get(&router, "/calculate-next?num=x").is_none());
    }

    #[test]
    fn test_missing_file_is_silent_by_default() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let router = router_for(&web, &up, false);

        assert!(get(&router, "/missing.html").is_none());
        assert!(get(&router, "/").is_none());
    }

    #[test]
    fn test_unknown_extension_is_silent_by_default() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(web.path().join("notes.txt"), "x").unwrap();
        let router = router_for(&web, &up, false);

        assert!(get(&router, "/notes.txt").is_none());
    }

    #[test]
    fn test_explicit_errors() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        fs::write(web.path().join("notes.txt"), "x").unwrap();
        let router = router_for(&web, &up, true);

        assert_eq!(get(&router, "/missing.html").unwrap().status(), StatusCode::NotFound);
        assert_eq!(get(&router, "/notes.txt").unwrap().status(), StatusCode::UnsupportedMediaType);
        // Los errores numéricos siguen sin respuesta
        assert!(get(&router, "/calculate-next?num=x").is_none());
    }

    #[test]
    fn test_upload_then_image() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let router = router_for(&web, &up, false);

        let raw = "POST /upload?file=pic.png HTTP/1.1\r\nContent-Length: 4\r\n\r\n";
        let request = Request::parse(raw).unwrap();
        let response = router.dispatch(&request, &mut Cursor::new(vec![1u8, 2, 3, 4])).unwrap();
        assert_eq!(response.status(), StatusCode::Ok);

        let image = get(&router, "/image?file=pic.png").unwrap();
        assert_eq!(image.content_type(), "image/png");
        assert_eq!(image.body(), &[1u8, 2, 3, 4]);
    }
}
