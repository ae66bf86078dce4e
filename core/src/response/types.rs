use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// `Content-Type` implied by the body kind. `None` for an empty body.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            ResponseBody::Empty => None,
            ResponseBody::Json(_) => Some("application/json"),
            ResponseBody::Text(_) => Some("text/plain"),
            ResponseBody::Binary(_) => Some("application/octet-stream"),
        }
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self {
            status_code: 200,
            headers: HashMap::new(),
            body: ResponseBody::Empty,
        }
    }
}

impl HttpResponse {
    pub fn with_body(status: u16, body: ResponseBody) -> Self {
        let mut response = Self {
            status_code: status,
            ..Self::default()
        };
        response.set_body(body);
        response
    }

    pub fn set_status(&mut self, status: u16) {
        self.status_code = status;
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn location(&self) -> Option<&str> {
        self.header("Location")
    }

    /// Replaces the body and sets the `Content-Type` its kind implies. An
    /// empty body leaves the headers alone.
    pub fn set_body(&mut self, body: ResponseBody) {
        if let Some(content_type) = body.content_type() {
            self.set_header("Content-Type", content_type);
        }
        self.body = body;
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.set_body(ResponseBody::Text(text.into()));
    }

    pub fn html(&mut self, html: impl Into<String>) {
        self.set_header("Content-Type", "text/html; charset=utf-8");
        self.body = ResponseBody::Text(html.into());
    }

    pub fn json(&mut self, value: serde_json::Value) {
        self.set_body(ResponseBody::Json(value));
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code) && self.location().is_some()
    }
}
