//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Parser línea por línea sobre cualquier `BufRead` (normalmente el socket).
//!
//! ## Formato aceptado
//!
//! ```text
//! GET /hello HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! User-Agent: curl/8.0\r\n
//! \r\n
//! ```
//!
//! ## Reglas
//!
//! 1. Se leen líneas hasta la primera línea vacía o EOF. Lo que venga
//!    después de la línea vacía nunca se consume.
//! 2. **Request Line** (línea 0): se separa por espacios simples en
//!    `METHOD PATH VERSION`. Menos de tres tokens es un error.
//! 3. **Headers**: cualquier otra línea con `": "` se parte en la primera
//!    ocurrencia. Un header repetido pisa al anterior.
//! 4. **Body**: cualquier otra línea no vacía reemplaza al body. Solo
//!    sobrevive la última (body de una sola línea).

use super::{Method, Version};
use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;

/// Representa un request HTTP parseado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP (GET, POST o Unknown)
    method: Method,

    /// Path tal cual llegó, sin decodificar (ej: "/hello")
    path: String,

    /// Versión HTTP (Http11 o Unknown)
    version: Version,

    /// Headers HTTP (ej: {"Host": "localhost:8080"})
    headers: HashMap<String, String>,

    /// Body de una sola línea
    body: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Error)]
pub enum ParseError {
    /// La request line no tiene los tres tokens `METHOD PATH VERSION`
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Falló la lectura del stream
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),
}

impl Request {
    /// Parsea un request leyendo líneas del `reader`
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado
    /// * `Err(ParseError::MalformedRequestLine)` - Request line con menos de 3 tokens
    /// * `Err(ParseError::Io)` - Error de lectura
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http_server::http::{Method, Request, Version};
    ///
    /// let mut raw = &b"GET /hello HTTP/1.1\r\nHost: localhost\r\n\r\n"[..];
    /// let request = Request::parse(&mut raw).unwrap();
    ///
    /// assert_eq!(request.method(), Method::Get);
    /// assert_eq!(request.path(), "/hello");
    /// assert_eq!(request.version(), Version::Http11);
    /// assert_eq!(request.header("Host"), Some("localhost"));
    /// ```
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        let lines = Self::read_head(reader)?;

        // Un stream vacío se trata como una request line vacía
        let request_line = lines.first().map(String::as_str).unwrap_or("");
        let (method, path, version) = Self::parse_request_line(request_line)?;

        let mut headers = HashMap::new();
        let mut body = String::new();

        for line in lines.iter().skip(1) {
            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            } else if !line.is_empty() {
                body = line.clone();
            }
        }

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Lee líneas hasta la primera línea vacía o EOF
    ///
    /// Quita el terminador (`\n` o `\r\n`) de cada línea. Los bytes que no
    /// son UTF-8 válido (ej: obs-text en headers) se reemplazan por U+FFFD.
    fn read_head<R: BufRead>(reader: &mut R) -> Result<Vec<String>, ParseError> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let trimmed = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(&*line);

            if trimmed.is_empty() {
                break;
            }
            lines.push(trimmed.to_string());
        }

        Ok(lines)
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`. Se separa por `' '` sin colapsar
    /// espacios repetidos; los tokens extra se ignoran.
    fn parse_request_line(line: &str) -> Result<(Method, String, Version), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() < 3 {
            return Err(ParseError::MalformedRequestLine(line.to_string()));
        }

        Ok((
            Method::parse(parts[0]),
            parts[1].to_string(),
            Version::parse(parts[2]),
        ))
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> Version {
        self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (nombre exacto)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn parse(raw: &[u8]) -> Result<Request, ParseError> {
        Request::parse(&mut Cursor::new(raw))
    }

    #[test]
    fn test_parse_simple_get() {
        let request = parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), Version::Http11);
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), "");
    }

    #[test]
    fn test_parse_post() {
        let request = parse(b"POST /submit HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/submit");
    }

    #[test]
    fn test_unknown_method_and_version_degrade() {
        let request = parse(b"PATCH /x HTTP/2.0\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::Unknown);
        assert_eq!(request.version(), Version::Unknown);
        assert_eq!(request.path(), "/x");
    }

    #[test]
    fn test_query_string_is_not_parsed() {
        let request = parse(b"GET /search?q=hello%20world HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.path(), "/search?q=hello%20world");
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nUser-Agent: test\r\n\r\n";
        let request = parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:8080"));
        assert_eq!(request.header("User-Agent"), Some("test"));
        assert_eq!(request.header("host"), None);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let raw = b"GET / HTTP/1.1\r\nX-Token: first\r\nX-Token: second\r\n\r\n";
        let request = parse(raw).unwrap();

        assert_eq!(request.header("X-Token"), Some("second"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_header_split_on_first_separator() {
        let raw = b"GET / HTTP/1.1\r\nX-Note: a: b\r\n\r\n";
        let request = parse(raw).unwrap();

        assert_eq!(request.header("X-Note"), Some("a: b"));
    }

    #[test]
    fn test_header_without_space_is_body() {
        let raw = b"GET / HTTP/1.1\r\nHost:localhost\r\n\r\n";
        let request = parse(raw).unwrap();

        assert!(request.headers().is_empty());
        assert_eq!(request.body(), "Host:localhost");
    }

    #[test]
    fn test_body_keeps_last_line() {
        let raw = b"POST / HTTP/1.1\r\nfirst\r\nContent-Type: text/plain\r\nsecond\r\n\r\n";
        let request = parse(raw).unwrap();

        assert_eq!(request.body(), "second");
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn test_stops_at_blank_line() {
        let raw = b"POST / HTTP/1.1\r\nHost: a\r\n\r\npayload\r\n";
        let mut reader = BufReader::new(&raw[..]);
        let request = Request::parse(&mut reader).unwrap();

        // La línea después del separador no forma parte del request
        assert_eq!(request.body(), "");

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "payload\r\n");
    }

    #[test]
    fn test_accepts_bare_newlines() {
        let request = parse(b"GET /hello HTTP/1.1\nAccept: */*\n\n").unwrap();

        assert_eq!(request.path(), "/hello");
        assert_eq!(request.header("Accept"), Some("*/*"));
    }

    #[test]
    fn test_eof_without_blank_line() {
        let request = parse(b"GET /hello HTTP/1.1\r\nHost: a").unwrap();

        assert_eq!(request.path(), "/hello");
        assert_eq!(request.header("Host"), Some("a"));
    }

    #[test]
    fn test_double_space_keeps_empty_token() {
        let request = parse(b"GET  /x HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(request.path(), "");
        assert_eq!(request.version(), Version::Unknown);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let request = parse(b"GET /x HTTP/1.1 trailing\r\n\r\n").unwrap();

        assert_eq!(request.path(), "/x");
        assert_eq!(request.version(), Version::Http11);
    }

    #[test]
    fn test_invalid_request_line() {
        let result = parse(b"GET\r\n\r\n"); // Falta path y version

        assert!(matches!(result, Err(ParseError::MalformedRequestLine(ref l)) if l == "GET"));
    }

    #[test]
    fn test_two_tokens_is_malformed() {
        let result = parse(b"GET /\r\n\r\n");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }

    #[test]
    fn test_empty_request() {
        let result = parse(b"");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(ref l)) if l.is_empty()));
    }

    #[test]
    fn test_non_utf8_header_value_is_replaced() {
        let request = parse(b"GET /hello HTTP/1.1\r\nUser-Agent: caf\xe9\r\n\r\n").unwrap();

        assert_eq!(request.path(), "/hello");
        assert_eq!(request.header("User-Agent"), Some("caf\u{FFFD}"));
    }

    #[test]
    fn test_non_utf8_request_line_tokens_are_replaced() {
        let request = parse(b"\xff\xfe /x HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::Unknown);
        assert_eq!(request.path(), "/x");
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let result = Request::parse(&mut BufReader::new(BrokenReader));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
