//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Una `Response` se arma en el handler y se serializa una sola vez.
//!
//! ## Formato en el cable
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: text/html
//!
//! <h1>Hello World!</h1>
//! ```
//!
//! Son tres bloques separados por `\n`: status line, headers y body.
//! El texto completo se recorta (`trim`), así que una respuesta sin
//! headers ni body queda solo como el status line.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use mini_http_server::http::{Response, StatusCode};
//!
//! let response = Response::from_status(StatusCode::Ok)
//!     .with_header("Content-Type", "text/html")
//!     .with_body("<h1>Hello World!</h1>");
//!
//! assert_eq!(
//!     response.to_string(),
//!     "HTTP/1.1 200 OK\nContent-Type: text/html\n\n<h1>Hello World!</h1>"
//! );
//! ```

use super::{StatusCode, Version};
use std::fmt;

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Versión del status line (por defecto HTTP/1.1)
    version: Version,

    /// Código numérico (200, 404, ...)
    status_code: u16,

    /// Texto de razón, se escribe tal cual
    status_text: String,

    /// Headers en orden de inserción, sin nombres repetidos
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: String,
}

impl Response {
    /// Crea una respuesta HTTP/1.1 con código y texto arbitrarios
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::Response;
    ///
    /// let response = Response::new(418, "I'm a teapot");
    /// assert_eq!(response.to_string(), "HTTP/1.1 418 I'm a teapot");
    /// ```
    pub fn new(status_code: u16, status_text: &str) -> Self {
        Self {
            version: Version::Http11,
            status_code,
            status_text: status_text.to_string(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Crea una respuesta a partir de un `StatusCode` conocido
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status.as_u16(), status.reason_phrase())
    }

    /// La respuesta fija cuando ninguna ruta coincide
    pub fn not_found() -> Self {
        Self::from_status(StatusCode::NotFound)
            .with_header("Content-Type", "text/html")
            .with_body("<h1>404 Not Found</h1>")
    }

    /// Cambia la versión del status line
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe sin cambiar su posición.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match self.headers.iter().position(|(n, _)| n == name) {
            Some(pos) => self.headers[pos].1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Establece el cuerpo de la respuesta
    ///
    /// No agrega `Content-Length`: el cliente lee hasta que se cierra la conexión.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Response {
    /// Serializa status line, headers y body, y recorta el resultado
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n");

        let rendered = format!(
            "{} {} {}\n{}\n\n{}",
            self.version, self.status_code, self.status_text, headers, self.body
        );

        f.write_str(rendered.trim())
    }
}
