use crate::logging::RouterLogger;
use crate::redirect::{self, HandlerResult};
use crate::response::HttpResponse;
use crate::routing::types::Params;

/// A route or not-found handler.
pub type BoxedHandler = Box<dyn Fn(&mut RequestContext<'_>) -> HandlerResult + Send + Sync>;

/// Everything a handler sees of the current request: the captured
/// parameters, the normalized path and the response being written.
pub struct RequestContext<'a> {
    method: &'a str,
    path: &'a str,
    params: Params,
    base_path: Option<&'a str>,
    logger: &'a dyn RouterLogger,
    response: &'a mut HttpResponse,
}

impl<'a> RequestContext<'a> {
    pub(crate) fn new(
        method: &'a str,
        path: &'a str,
        params: Params,
        base_path: Option<&'a str>,
        logger: &'a dyn RouterLogger,
        response: &'a mut HttpResponse,
    ) -> Self {
        Self {
            method,
            path,
            params,
            base_path,
            logger,
            response,
        }
    }

    pub fn method(&self) -> &str {
        self.method
    }

    /// The path that was matched, after base path and query were removed.
    pub fn path(&self) -> &str {
        self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn response(&self) -> &HttpResponse {
        &*self.response
    }

    pub fn response_mut(&mut self) -> &mut HttpResponse {
        &mut *self.response
    }

    pub fn url_for(&self, pattern: &str) -> String {
        redirect::url_for(self.base_path, pattern)
    }

    pub fn redirect<K, V>(&mut self, url: &str, query: Option<&[(K, V)]>) -> HandlerResult
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        redirect::redirect(&mut *self.response, self.logger, url, query)
    }

    /// Redirects to a route pattern of this application.
    pub fn redirect_to(&mut self, pattern: &str) -> HandlerResult {
        let url = self.url_for(pattern);
        redirect::redirect(&mut *self.response, self.logger, &url, redirect::NO_QUERY)
    }
}
