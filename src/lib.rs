//! Typed Rust client for the IPPanel SMS HTTP API.
//!
//! The crate has a domain layer of plain request/response types, a transport layer
//! for the JSON wire format, and a small client layer issuing one `POST` per call.
//!
//! ```rust,no_run
//! use ippanel::{IppanelClient, SendVotp, SendWebservice};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ippanel::IppanelError> {
//!     let client = IppanelClient::new("api-key")?;
//!
//!     let request = SendWebservice::new("hello", "+983000505", ["+989121234567"]);
//!     let resp = client.send_webservice(request).await?;
//!     println!("{}: {}", resp.meta.message_code, resp.meta.message);
//!
//!     client.send_votp(SendVotp::new(12345, "+989121234567")).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, IppanelClient, IppanelClientBuilder, IppanelError,
};
pub use domain::{
    ApiKey, Meta, Recipient, SendPattern, SendRequest, SendResponse, SendVotp, SendWebservice,
    SendingType,
};
