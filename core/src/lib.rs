//! # SIGNPOST
//!
//! A small HTTP request router. Routes are `(method, pattern, handler)`
//! triples checked in registration order; the first whose method and
//! pattern match the request runs. Patterns support named parameters
//! (`/user/{id}`) and optional groups (`/test[/]`).
//!
//! ```rust
//! use signpost::api::*;
//!
//! let mut router = Router::new();
//! router.get("/user/{id}", |ctx| {
//!     let body = format!("user {}", ctx.param("id").unwrap_or_default());
//!     ctx.response_mut().text(body);
//!     Ok(())
//! })?;
//! router.set_not_found(|ctx| {
//!     ctx.response_mut().text("not found");
//!     Ok(())
//! });
//!
//! let response = router.handle(&RequestDescriptor::get("/user/42"))?;
//! assert_eq!(body_text(&response.body), "user 42");
//! # Ok::<(), RouterError>(())
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod logging;
pub mod redirect;
pub mod request;
pub mod response;
pub mod routing;
