use crate::context::{BoxedHandler, RequestContext};
use crate::errors::RouterError;
use crate::redirect::HandlerResult;
use crate::routing::parser::{compile, CompiledPattern};
use crate::routing::types::{HttpMethod, Params};
use std::fmt;

/// One registration: method, compiled pattern and handler.
pub struct Route {
    method: HttpMethod,
    pattern: CompiledPattern,
    handler: BoxedHandler,
}

impl Route {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    pub(crate) fn call(&self, ctx: &mut RequestContext<'_>) -> HandlerResult {
        (self.handler)(ctx)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.source())
            .finish_non_exhaustive()
    }
}

/// Routes in registration order. The order decides which of several
/// matching routes wins.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route. Fails without modifying the table if the same
    /// method and pattern are already registered or the pattern is
    /// malformed.
    pub fn add<F>(&mut self, method: HttpMethod, pattern: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.add_boxed(method, pattern, Box::new(handler))
    }

    pub fn add_boxed(
        &mut self,
        method: HttpMethod,
        pattern: &str,
        handler: BoxedHandler,
    ) -> Result<(), RouterError> {
        if self.contains(method, pattern) {
            return Err(RouterError::RouteAlreadyExists {
                method,
                pattern: pattern.to_string(),
            });
        }

        let pattern = compile(pattern)?;
        self.routes.push(Route {
            method,
            pattern,
            handler,
        });
        Ok(())
    }

    pub fn get<F>(&mut self, pattern: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.add(HttpMethod::GET, pattern, handler)
    }

    pub fn post<F>(&mut self, pattern: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.add(HttpMethod::POST, pattern, handler)
    }

    pub fn contains(&self, method: HttpMethod, pattern: &str) -> bool {
        self.routes
            .iter()
            .any(|route| route.method == method && route.pattern.source() == pattern)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// First route, in registration order, whose method equals `method` and
    /// whose pattern matches the whole of `path`.
    ///
    /// Routes with a different method are skipped without running their
    /// matcher. A method name no route can carry matches nothing.
    pub fn find(&self, method: &str, path: &str) -> Option<(usize, &Route, Params)> {
        let method = HttpMethod::from_name(method)?;
        for (index, route) in self.routes.iter().enumerate() {
            if route.method != method {
                continue;
            }

            if let Some(params) = route.pattern.captures(path) {
                return Some((index, route, params));
            }
        }
        None
    }
}
