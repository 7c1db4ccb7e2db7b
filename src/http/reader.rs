//! # Lectura de headers
//! src/http/reader.rs
//!
//! Lee del socket por bloques hasta ver el fin de headers (`\r\n\r\n`)
//! o hasta que el peer deje de mandar bytes.

use log::error;
use std::io::Read;

/// Marca de fin de headers
pub const END_OF_HEADERS: &[u8] = b"\r\n\r\n";

/// Resultado de leer la cabecera de un request
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawRequest {
    /// Headers, incluida la marca final si llegó
    pub head: String,

    /// Bytes leídos después de la marca: inicio del body
    pub remainder: Vec<u8>,
}

/// Acumula bytes hasta `\r\n\r\n` o EOF
///
/// Un error de lectura (incluido el timeout) se registra y retorna un
/// `RawRequest` vacío, que el parser rechaza como request inválido.
pub fn read_head<R: Read>(stream: &mut R, chunk_size: usize) -> RawRequest {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = match stream.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!("Error leyendo headers: {}", e);
                return RawRequest::default();
            }
        };

        if bytes_read == 0 {
            // Peer cerró: se retorna lo acumulado
            return RawRequest {
                head: String::from_utf8_lossy(&buffer).into_owned(),
                remainder: Vec::new(),
            };
        }

        // La marca puede quedar partida entre dos bloques
        let scan_from = buffer.len().saturating_sub(END_OF_HEADERS.len() - 1);
        buffer.extend_from_slice(&chunk[..bytes_read]);

        if let Some(pos) = find_marker(&buffer[scan_from..]) {
            let end = scan_from + pos + END_OF_HEADERS.len();
            let remainder = buffer.split_off(end);
            return RawRequest {
                head: String::from_utf8_lossy(&buffer).into_owned(),
                remainder,
            };
        }
    }
}

fn find_marker(haystack: &[u8]) -> Option<usize> {
    haystack
        .windows(END_OF_HEADERS.len())
        .position(|window| window == END_OF_HEADERS)
}
