use std::collections::HashMap;
use std::sync::Arc;

use crate::http::errors::ServerError;
use crate::http::request::{HttpMethod, HttpRequest};
use crate::http::response::Response;

pub trait RouteHandler: Send + Sync + 'static {
    fn handle(&self, req: &HttpRequest) -> Result<Response, ServerError>;
}

pub struct SimpleHandler<F>(pub F);

impl<F> RouteHandler for SimpleHandler<F>
where
    F: Fn(&HttpRequest) -> Result<Response, ServerError> + Send + Sync + 'static,
{
    fn handle(&self, req: &HttpRequest) -> Result<Response, ServerError> {
        (self.0)(req)
    }
}

pub struct Dispatcher {
    get: HashMap<String, Arc<dyn RouteHandler>>,
    post: HashMap<String, Arc<dyn RouteHandler>>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// HEAD shares the GET table; the body is dropped at serialization time.
    pub fn dispatch(&self, req: &HttpRequest) -> Result<Response, ServerError> {
        match req.method {
            HttpMethod::GET | HttpMethod::HEAD => match self.get.get(&req.path) {
                Some(handler) => handler.handle(req),
                None => Err(ServerError::NotFound),
            },
            HttpMethod::POST => match self.post.get(&req.path) {
                Some(handler) => handler.handle(req),
                None => Err(ServerError::NotFound),
            },
            HttpMethod::Unsupported(ref m) => {
                Err(ServerError::BadRequest(format!("Unsupported method: {}", m)))
            }
        }
    }
}

#[derive(Default)]
pub struct DispatcherBuilder {
    get_map: HashMap<String, Arc<dyn RouteHandler>>,
    post_map: HashMap<String, Arc<dyn RouteHandler>>,
}

impl DispatcherBuilder {
    pub fn get(mut self, path: &str, handler: Arc<dyn RouteHandler>) -> Self {
        self.get_map.insert(path.to_string(), handler);
        self
    }

    pub fn post(mut self, path: &str, handler: Arc<dyn RouteHandler>) -> Self {
        self.post_map.insert(path.to_string(), handler);
        self
    }

    pub fn get_fn<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<Response, ServerError> + Send + Sync + 'static,
    {
        self.get(path, Arc::new(SimpleHandler(handler)))
    }

    pub fn post_fn<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<Response, ServerError> + Send + Sync + 'static,
    {
        self.post(path, Arc::new(SimpleHandler(handler)))
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            get: self.get_map,
            post: self.post_map,
        }
    }
}
