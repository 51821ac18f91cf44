use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// IPPanel API key, sent verbatim as the `Authorization` header value.
///
/// The key is opaque: it is neither trimmed nor validated locally. An invalid key is
/// reported by the remote service as a rejection.
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an API key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sending mode discriminator (`sending_type`).
///
/// The remote service picks its message-composition rules from this value.
pub enum SendingType {
    /// Free-text message to a list of recipients.
    Webservice,
    /// Server-side registered template with variable substitution.
    Pattern,
    /// One-time password; the code itself is the message.
    Votp,
}

impl SendingType {
    /// Wire value of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Webservice => "webservice",
            Self::Pattern => "pattern",
            Self::Votp => "votp",
        }
    }
}

impl fmt::Display for SendingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient identifier as sent to IPPanel.
///
/// No validation or normalization happens here; the remote service decides what it
/// accepts.
pub struct Recipient(String);

impl Recipient {
    /// Wrap a recipient as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value as sent to IPPanel.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
