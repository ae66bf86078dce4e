use crate::response::types::ResponseBody;

/// Wire bytes of a body. A JSON value that fails to encode yields no bytes.
pub fn serialize_response_body(body: &ResponseBody) -> Vec<u8> {
    match body {
        ResponseBody::Empty => Vec::new(),
        ResponseBody::Json(value) => serde_json::to_vec(value).unwrap_or_default(),
        ResponseBody::Text(text) => text.clone().into_bytes(),
        ResponseBody::Binary(data) => data.clone(),
    }
}

/// Body rendered as a string, lossily for binary payloads. Mostly useful for
/// asserting on handler output.
pub fn body_text(body: &ResponseBody) -> String {
    match body {
        ResponseBody::Text(text) => text.clone(),
        other => String::from_utf8_lossy(&serialize_response_body(other)).into_owned(),
    }
}
