pub use crate::config::RouterConfig;
pub use crate::context::{BoxedHandler, RequestContext};
pub use crate::errors::{PatternError, RouterError};
pub use crate::logging::{FacadeLogger, NullLogger, RouterLogger};
pub use crate::redirect::{build_location, url_for, Halt, HandlerResult, NO_QUERY};
pub use crate::request::RequestDescriptor;
pub use crate::response::{body_text, HttpResponse, ResponseBody};
pub use crate::routing::{
    compile, CompiledPattern, DispatchOutcome, HttpMethod, Params, Route, RouteTable, Router,
};
