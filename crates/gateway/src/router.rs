use core_types::RouteKey;
use database::Repository;
use futures::future::BoxFuture;
use lambda_http::{Body, Request, RequestExt, Response};
use std::collections::HashMap;
use std::sync::Arc;

use crate::{handlers, response};

pub type HandlerFuture<'a> = BoxFuture<'a, Response<Body>>;

/// A route handler: runs its query through the repository and encodes the result.
pub type Handler = for<'a> fn(&'a dyn Repository, &'a Request) -> HandlerFuture<'a>;

/// The exact-match key for `request`.
///
/// The path is the one the client called, without any API Gateway stage
/// prefix. Requests built by hand carry no raw path, so the URI path is used.
pub fn route_key(request: &Request) -> RouteKey {
    let raw = request.raw_http_path();
    let path = if raw.is_empty() {
        request.uri().path()
    } else {
        raw
    };
    RouteKey::new(request.method().as_str(), path)
}

/// Maps route keys to handlers by exact, case-sensitive equality.
///
/// Matching lives only here. Handlers never see how they were selected.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<RouteKey, Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `key`, returning the handler it replaced, if any.
    pub fn insert(&mut self, key: RouteKey, handler: Handler) -> Option<Handler> {
        self.routes.insert(key, handler)
    }

    pub fn lookup(&self, key: &RouteKey) -> Option<Handler> {
        self.routes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Dispatches requests to handlers over one shared repository.
pub struct Router {
    repo: Arc<dyn Repository>,
    table: RouteTable,
}

impl Router {
    /// A router with no routes; every request gets a 404.
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self {
            repo,
            table: RouteTable::new(),
        }
    }

    /// A router serving the application's routes.
    pub fn with_default_routes(repo: Arc<dyn Repository>) -> Self {
        Self::new(repo)
            .route("GET", "/hello", handlers::hello)
            .route("GET", "/labour-participation", handlers::labour_participation)
    }

    /// Adds a route. Registering the same method and path twice keeps the later handler.
    pub fn route(mut self, method: &str, path: &str, handler: Handler) -> Self {
        if self.table.insert(RouteKey::new(method, path), handler).is_some() {
            tracing::warn!(method, path, "Route registered twice; keeping the later handler.");
        }
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Produces exactly one response for `request`.
    ///
    /// Unmatched routes get the fixed 404 without touching the repository.
    pub async fn dispatch(&self, request: &Request) -> Response<Body> {
        let key = route_key(request);

        let response = match self.table.lookup(&key) {
            Some(handler) => {
                tracing::debug!(method = %key.method, path = %key.path, "Matched route.");
                handler(self.repo.as_ref(), request).await
            }
            None => response::not_found(),
        };

        tracing::info!(status = response.status().as_u16(), "Request handled.");
        response
    }
}
