//! Request dispatch.
//!
//! A [`Router`] owns a [`RouteTable`], the optional not-found handler, the
//! base path and a logger sink. Setup takes `&mut self`; dispatch only
//! needs `&self`, so a fully configured router can be shared across
//! threads behind an `Arc` without further locking.

use crate::config::{normalize_base_path, RouterConfig};
use crate::context::{BoxedHandler, RequestContext};
use crate::errors::RouterError;
use crate::logging::{NullLogger, RouterLogger};
use crate::redirect::{self, HandlerResult};
use crate::request::RequestDescriptor;
use crate::response::HttpResponse;
use crate::routing::matcher::RouteTable;
use crate::routing::types::{HttpMethod, Params};
use log::Level;
use std::fmt;
use std::sync::Arc;

/// Status written before the not-found handler runs.
pub const NOT_FOUND_STATUS: u16 = 404;

/// How a successful dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The route at `index` handled the request. `halted` is set when the
    /// handler stopped early, e.g. after a redirect.
    Matched { index: usize, halted: bool },
    /// Nothing matched and the not-found handler ran.
    NotFound { halted: bool },
}

impl DispatchOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn halted(&self) -> bool {
        match self {
            Self::Matched { halted, .. } | Self::NotFound { halted } => *halted,
        }
    }
}

pub struct Router {
    table: RouteTable,
    not_found: Option<BoxedHandler>,
    config: RouterConfig,
    logger: Arc<dyn RouterLogger>,
}

impl Router {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            table: RouteTable::new(),
            not_found: None,
            config: config.normalized(),
            logger: Arc::new(NullLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RouterLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn set_logger(&mut self, logger: Arc<dyn RouterLogger>) {
        self.logger = logger;
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Sets the prefix the application is served under. Trailing slashes
    /// are dropped; an empty value clears the base path.
    pub fn set_base_path(&mut self, base_path: &str) {
        self.config.base_path = normalize_base_path(base_path);
        self.logger.log(
            Level::Info,
            "Base path set to: {basePath}",
            &[("basePath", self.base_path().to_string())],
        );
    }

    /// The configured base path, or `""` when there is none.
    pub fn base_path(&self) -> &str {
        self.config.base_path.as_deref().unwrap_or("")
    }

    pub fn add_route<F>(&mut self, method: HttpMethod, pattern: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.table.add(method, pattern, handler)?;
        self.logger.log(
            Level::Info,
            "Route added: {method} {pattern}",
            &[
                ("method", method.to_string()),
                ("pattern", pattern.to_string()),
            ],
        );
        Ok(())
    }

    pub fn get<F>(&mut self, pattern: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.add_route(HttpMethod::GET, pattern, handler)
    }

    pub fn post<F>(&mut self, pattern: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.add_route(HttpMethod::POST, pattern, handler)
    }

    /// Sets the handler for requests no route matches. Setting it again
    /// replaces the previous one.
    pub fn set_not_found<F>(&mut self, handler: F)
    where
        F: Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.not_found = Some(Box::new(handler));
        self.logger.log(Level::Info, "404 callback set.", &[]);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn url_for(&self, pattern: &str) -> String {
        redirect::url_for(self.config.base_path.as_deref(), pattern)
    }

    pub fn redirect<K, V>(
        &self,
        response: &mut HttpResponse,
        url: &str,
        query: Option<&[(K, V)]>,
    ) -> HandlerResult
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        redirect::redirect(response, self.logger.as_ref(), url, query)
    }

    pub fn redirect_to(&self, response: &mut HttpResponse, pattern: &str) -> HandlerResult {
        let url = self.url_for(pattern);
        redirect::redirect(response, self.logger.as_ref(), &url, redirect::NO_QUERY)
    }

    /// Runs the first matching route's handler, or the not-found handler.
    ///
    /// Returns [`RouterError::HandlerNotConfigured`] when nothing matched and
    /// no not-found handler was set; the response then carries status 404
    /// and no body.
    pub fn dispatch(
        &self,
        request: &RequestDescriptor,
        response: &mut HttpResponse,
    ) -> Result<DispatchOutcome, RouterError> {
        let base_path = self.config.base_path.as_deref();
        let logger = self.logger.as_ref();
        let path = request.normalized_path(base_path);
        let method = request.method.as_str();

        if let Some((index, route, params)) = self.table.find(method, &path) {
            self.logger.log(
                Level::Info,
                "Route match found: {method} {pattern} (called URL: {uri}). Callback parameters: {params}",
                &[
                    ("method", route.method().to_string()),
                    ("pattern", route.pattern().to_string()),
                    ("uri", path.clone()),
                    ("params", params.to_string()),
                ],
            );
            let mut ctx = RequestContext::new(method, &path, params, base_path, logger, response);
            let halted = route.call(&mut ctx).is_err();
            return Ok(DispatchOutcome::Matched { index, halted });
        }

        response.set_status(NOT_FOUND_STATUS);
        let Some(not_found) = &self.not_found else {
            self.logger.log(
                Level::Error,
                "No route match found and no 404 callback set.",
                &[("method", method.to_string()), ("uri", path.clone())],
            );
            return Err(RouterError::HandlerNotConfigured);
        };

        let mut ctx = RequestContext::new(method, &path, Params::new(), base_path, logger, response);
        let halted = not_found(&mut ctx).is_err();
        self.logger
            .log(Level::Info, "No route match found. 404 callback executed.", &[]);
        Ok(DispatchOutcome::NotFound { halted })
    }

    /// Dispatches into a fresh response and returns it.
    pub fn handle(&self, request: &RequestDescriptor) -> Result<HttpResponse, RouterError> {
        let mut response = HttpResponse::default();
        self.dispatch(request, &mut response)?;
        Ok(response)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("has_not_found", &self.not_found.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
