//! # Comandos de Archivos
//! src/commands/files.rs
//!
//! - Archivos estáticos del web root (y del directorio de uploads para /image)
//! - /upload?file=NAME: guarda el body del request en el directorio de uploads

use crate::error::HandlerError;
use crate::http::mime;
use crate::http::{Response, StatusCode};
use log::debug;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Une un recurso al directorio raíz
///
/// El `/` inicial se descarta para que el recurso quede relativo a `root`.
pub fn resolve(root: &Path, resource: &str) -> PathBuf {
    root.join(resource.trim_start_matches('/'))
}

/// Sirve un archivo bajo `root`
///
/// El tipo MIME sale de la extensión del recurso (en minúsculas).
///
/// # Errores
///
/// - `FileNotFound` si el archivo no existe
/// - `UnsupportedExtension` si la extensión no está en la tabla
pub fn serve_file(root: &Path, resource: &str) -> Result<Response, HandlerError> {
    let path = resolve(root, resource);
    if !path.is_file() {
        return Err(HandlerError::FileNotFound(path));
    }

    let extension = mime::extension_of(resource);
    let content_type = mime::content_type(extension)
        .ok_or_else(|| HandlerError::UnsupportedExtension(extension.to_string()))?;

    let data = fs::read(&path)?;
    debug!("Sirviendo {} ({} bytes, {})", path.display(), data.len(), content_type);

    Ok(Response::new(StatusCode::Ok)
        .with_content_type(content_type)
        .with_body_bytes(data))
}

/// Guarda exactamente `content_length` bytes de `body` en `uploads_dir/file`
///
/// Un archivo existente se sobrescribe. Si el body se corta antes de
/// tiempo el archivo queda escrito a medias y se retorna el error.
pub fn upload<R: Read>(
    uploads_dir: &Path,
    file: &str,
    content_length: Option<usize>,
    body: &mut R,
) -> Result<Response, HandlerError> {
    let expected = content_length.ok_or(HandlerError::MissingContentLength)? as u64;

    let path = resolve(uploads_dir, file);
    let mut output = File::create(&path)?;
    let written = io::copy(&mut body.by_ref().take(expected), &mut output)?;

    if written < expected {
        return Err(HandlerError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("body truncado: {} de {} bytes", written, expected),
        )));
    }

    debug!("Upload guardado en {} ({} bytes)", path.display(), written);
    Ok(Response::text(""))
}
