pub mod serializer;
pub mod types;

pub use serializer::{body_text, serialize_response_body};
pub use types::{HttpResponse, ResponseBody};
