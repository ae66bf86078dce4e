pub mod parser;
pub mod types;

pub use parser::{normalize_path, parse_query_string, percent_decode};
pub use types::RequestDescriptor;
