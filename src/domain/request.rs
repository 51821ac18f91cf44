use serde_json::{Map, Value};

use crate::domain::value::{Recipient, SendingType};

/// Free-text message to a list of recipients (`sending_type = "webservice"`).
#[derive(Debug, Clone, PartialEq)]
pub struct SendWebservice {
    message: String,
    sender: String,
    recipients: Vec<Recipient>,
}

/// Template message to a single recipient (`sending_type = "pattern"`).
#[derive(Debug, Clone, PartialEq)]
pub struct SendPattern {
    pattern_code: String,
    sender: String,
    recipient: Recipient,
    params: Map<String, Value>,
}

/// One-time password message to a single recipient (`sending_type = "votp"`).
#[derive(Debug, Clone, PartialEq)]
pub struct SendVotp {
    code: i32,
    recipient: Recipient,
}

/// Any of the three sending modes.
#[derive(Debug, Clone, PartialEq)]
pub enum SendRequest {
    Webservice(SendWebservice),
    Pattern(SendPattern),
    Votp(SendVotp),
}

impl SendWebservice {
    /// Recipients keep their order and may be empty; the remote service decides
    /// whether that is an error.
    pub fn new<R>(
        message: impl Into<String>,
        sender: impl Into<String>,
        recipients: impl IntoIterator<Item = R>,
    ) -> Self
    where
        R: Into<Recipient>,
    {
        Self {
            message: message.into(),
            sender: sender.into(),
            recipients: recipients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn sending_type(&self) -> SendingType {
        SendingType::Webservice
    }
}

impl SendPattern {
    /// `params` are passed through verbatim as the template variables.
    pub fn new(
        pattern_code: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<Recipient>,
        params: Map<String, Value>,
    ) -> Self {
        Self {
            pattern_code: pattern_code.into(),
            sender: sender.into(),
            recipient: recipient.into(),
            params,
        }
    }

    /// Add or replace a single template variable.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn pattern_code(&self) -> &str {
        &self.pattern_code
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn sending_type(&self) -> SendingType {
        SendingType::Pattern
    }
}

impl SendVotp {
    /// The code is not range-checked: negative values are sent with a leading minus.
    pub fn new(code: i32, recipient: impl Into<Recipient>) -> Self {
        Self {
            code,
            recipient: recipient.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn sending_type(&self) -> SendingType {
        SendingType::Votp
    }
}

impl SendRequest {
    pub fn sending_type(&self) -> SendingType {
        match self {
            Self::Webservice(request) => request.sending_type(),
            Self::Pattern(request) => request.sending_type(),
            Self::Votp(request) => request.sending_type(),
        }
    }
}

impl From<SendWebservice> for SendRequest {
    fn from(value: SendWebservice) -> Self {
        Self::Webservice(value)
    }
}

impl From<SendPattern> for SendRequest {
    fn from(value: SendPattern) -> Self {
        Self::Pattern(value)
    }
}

impl From<SendVotp> for SendRequest {
    fn from(value: SendVotp) -> Self {
        Self::Votp(value)
    }
}
