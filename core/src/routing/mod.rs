//! Pattern compilation, the ordered route table and dispatch.
//!
//! ```text
//! registration:  pattern ──parser::compile──▶ CompiledPattern ──▶ RouteTable (append)
//! dispatch:      RequestDescriptor ──normalize──▶ path
//!                  ──RouteTable::find (registration order, method first)──▶ handler
//!                  └─ no match ──▶ not-found handler | HandlerNotConfigured
//! ```

pub mod dispatcher;
pub mod matcher;
pub mod parser;
pub mod types;

pub use dispatcher::{DispatchOutcome, Router};
pub use matcher::{Route, RouteTable};
pub use parser::{compile, tokenize, CompiledPattern};
pub use types::{HttpMethod, Params, Segment};
