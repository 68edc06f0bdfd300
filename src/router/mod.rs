//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea (método, path) a handlers y
//! el loop de aceptación que atiende una conexión a la vez.
//!
//! ## Arquitectura
//!
//! ```text
//! accept → Request::parse → Router::route → Handler → Response → close
//! ```
//!
//! La búsqueda recorre las rutas desde el final: si dos rutas tienen el
//! mismo método y path, gana la registrada más recientemente.
//! Si ninguna coincide, se responde el 404 fijo.

use crate::error::Result;
use crate::http::{Method, Request, Response};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{TcpListener, TcpStream};
use tracing::{debug, error, warn};

/// Tipo de función handler
///
/// Un handler recibe un Request y retorna una Response. Se aceptan closures
/// además de funciones sueltas.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Una ruta registrada: método + path exacto + handler
pub struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

impl Route {
    /// Coincide si el método y el path son exactamente iguales
    fn matches(&self, request: &Request) -> bool {
        self.method == request.method() && self.path == request.path()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Router que mapea (método, path) a handlers
#[derive(Default)]
pub struct Router {
    /// Rutas en orden de registro; nunca se eliminan
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta GET con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::router::Router;
    /// use mini_http_server::http::{Request, Response, StatusCode};
    ///
    /// fn hello_handler(_req: &Request) -> Response {
    ///     Response::from_status(StatusCode::Ok).with_body("hello")
    /// }
    ///
    /// let mut router = Router::new();
    /// router.get("/hello", hello_handler);
    /// router.get("/", |_req: &Request| Response::from_status(StatusCode::Ok));
    /// assert_eq!(router.routes().len(), 2);
    /// ```
    pub fn get<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.add(Method::Get, path, handler);
    }

    // Solo GET está expuesto; POST existe en `Method` pero no tiene helper.
    fn add<F>(&mut self, method: Method, path: &str, handler: F)
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            handler: Box::new(handler),
        });
    }

    /// Rutas registradas, en orden de registro
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Encuentra y ejecuta el handler para un request
    ///
    /// Gana la última ruta registrada que coincida. Si ninguna coincide,
    /// retorna el 404 fijo (`Content-Type: text/html`).
    pub fn route(&self, request: &Request) -> Response {
        match self.routes.iter().rev().find(|route| route.matches(request)) {
            Some(route) => (route.handler)(request),
            None => Response::not_found(),
        }
    }

    /// Loop de aceptación: atiende una conexión a la vez, para siempre
    ///
    /// Los errores de una conexión se registran y el loop sigue con la
    /// siguiente; nunca tiran abajo el servidor.
    pub fn handle(&self, listener: &TcpListener) -> Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let peer = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    if let Err(e) = self.handle_connection(stream) {
                        warn!(%peer, error = %e, "conexión descartada");
                    }
                }
                Err(e) => {
                    error!(error = %e, "error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// Atiende un único request sobre `stream` y cierra la conexión
    ///
    /// El stream se cierra al salir, tanto si hubo respuesta como si el
    /// request era inválido (en ese caso no se escribe nada).
    pub fn handle_connection(&self, stream: TcpStream) -> Result<()> {
        let mut reader = BufReader::new(&stream);
        let mut writer = BufWriter::new(&stream);

        self.respond(&mut reader, &mut writer)
    }

    /// Parsea un request de `reader`, lo despacha y escribe la respuesta en `writer`
    pub fn respond<R: BufRead, W: Write>(&self, reader: &mut R, writer: &mut W) -> Result<()> {
        let request = Request::parse(reader)?;
        let response = self.route(&request);

        debug!(
            method = %request.method(),
            path = request.path(),
            status = response.status_code(),
            "request atendido"
        );

        writer.write_all(&response.to_bytes())?;
        writer.flush()?;

        Ok(())
    }
}
