use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response envelope returned by IPPanel for every sending mode.
///
/// `data` varies by sending mode and is left as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub data: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,
}

/// Status block of a [`SendResponse`].
///
/// Missing and `null` fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Values interpolated into `message`, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message_parameters: Vec<Value>,
    /// Machine-readable status identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message_code: String,
}

impl Meta {
    pub fn is_success(&self) -> bool {
        self.status
    }
}

impl SendResponse {
    pub fn is_success(&self) -> bool {
        self.meta.is_success()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
