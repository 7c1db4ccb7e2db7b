//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Respuestas enlatadas y endpoints de cálculo:
//! - /forbidden: 403 fijo
//! - /moved: 302 hacia `/`
//! - /error: 500 fijo
//! - /calculate-next: N + 1
//! - /calculate-area: área de un triángulo
//!
//! Los endpoints de cálculo no buscan parámetros por nombre: leen los
//! valores por posición a partir del recurso crudo.

use crate::error::HandlerError;
use crate::http::{Response, StatusCode};

/// Handler para /forbidden
pub fn forbidden() -> Response {
    Response::html(StatusCode::Forbidden, "403 FORBIDDEN")
}

/// Handler para /moved
pub fn moved() -> Response {
    Response::html(StatusCode::Found, "302 MOVED TEMPORARILY")
}

/// Handler para /error
pub fn server_error() -> Response {
    Response::html(StatusCode::InternalServerError, "500 INTERNAL SERVER ERROR")
}

/// Handler para /calculate-next?num=N
///
/// Toma el entero que sigue al último `=` del recurso y le suma uno.
///
/// # Ejemplo
/// ```
/// use webroot_server::commands::calculate_next;
///
/// let response = calculate_next("/calculate-next?num=41").unwrap();
/// assert_eq!(response.body(), b"42");
/// ```
pub fn calculate_next(resource: &str) -> Result<Response, HandlerError> {
    let num = parse_number(last_value(resource))?;
    let next = num
        .checked_add(1)
        .ok_or_else(|| HandlerError::InvalidNumber(num.to_string()))?;

    Ok(Response::text(&next.to_string()))
}

/// Handler para /calculate-area?height=H&width=W
///
/// El primer parámetro es la altura y el último el ancho, sin importar
/// sus nombres. El resultado `W * H / 2` se trunca hacia cero.
///
/// # Ejemplo
/// ```
/// use webroot_server::commands::calculate_area;
///
/// let response = calculate_area("/calculate-area?height=7&width=3").unwrap();
/// assert_eq!(response.body(), b"10");
/// ```
pub fn calculate_area(resource: &str) -> Result<Response, HandlerError> {
    let query = resource.rsplit('?').next().unwrap_or(resource);
    let params: Vec<&str> = query.split('&').collect();

    // split siempre retorna al menos un elemento
    let height = parse_number(last_value(params[0]))?;
    let width = parse_number(last_value(params[params.len() - 1]))?;

    let area = width
        .checked_mul(height)
        .ok_or_else(|| HandlerError::InvalidNumber(format!("{} * {}", width, height)))?
        / 2;

    Ok(Response::text(&area.to_string()))
}

/// Todo lo que sigue al último `=` (o el texto completo si no hay)
pub(crate) fn last_value(s: &str) -> &str {
    s.rsplit('=').next().unwrap_or(s)
}

fn parse_number(value: &str) -> Result<i64, HandlerError> {
    value
        .parse()
        .map_err(|_| HandlerError::InvalidNumber(value.to_string()))
}
