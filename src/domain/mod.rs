//! Domain layer: typed request and response values (no I/O).

mod request;
mod response;
mod value;

pub use request::{SendPattern, SendRequest, SendVotp, SendWebservice};
pub use response::{Meta, SendResponse};
pub use value::{ApiKey, Recipient, SendingType};
