//! Transport layer: JSON wire-format details (serialization/deserialization).

mod send;

pub use send::{decode_send_json_response, encode_send_json};
