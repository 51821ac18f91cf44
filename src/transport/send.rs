use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{
    Recipient, SendPattern, SendRequest, SendResponse, SendVotp, SendWebservice, SendingType,
};

#[derive(Debug, Serialize)]
struct RecipientsParams<'a> {
    recipients: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct WebserviceJsonRequest<'a> {
    from_number: &'a str,
    message: &'a str,
    sending_type: &'static str,
    params: RecipientsParams<'a>,
}

// Unlike the other modes, pattern sends carry `recipients` at the top level
// and `params` holds the template variables.
#[derive(Debug, Serialize)]
struct PatternJsonRequest<'a> {
    from_number: &'a str,
    recipients: Vec<&'a str>,
    code: &'a str,
    params: &'a Map<String, Value>,
    sending_type: &'static str,
}

#[derive(Debug, Serialize)]
struct VotpJsonRequest<'a> {
    message: String,
    sending_type: &'static str,
    params: RecipientsParams<'a>,
}

impl<'a> From<&'a SendWebservice> for WebserviceJsonRequest<'a> {
    fn from(request: &'a SendWebservice) -> Self {
        Self {
            from_number: request.sender(),
            message: request.message(),
            sending_type: SendingType::Webservice.as_str(),
            params: RecipientsParams {
                recipients: request.recipients().iter().map(Recipient::raw).collect(),
            },
        }
    }
}

impl<'a> From<&'a SendPattern> for PatternJsonRequest<'a> {
    fn from(request: &'a SendPattern) -> Self {
        Self {
            from_number: request.sender(),
            recipients: vec![request.recipient().raw()],
            code: request.pattern_code(),
            params: request.params(),
            sending_type: SendingType::Pattern.as_str(),
        }
    }
}

impl<'a> From<&'a SendVotp> for VotpJsonRequest<'a> {
    fn from(request: &'a SendVotp) -> Self {
        Self {
            message: request.code().to_string(),
            sending_type: SendingType::Votp.as_str(),
            params: RecipientsParams {
                recipients: vec![request.recipient().raw()],
            },
        }
    }
}

pub fn encode_send_json(request: &SendRequest) -> Result<Vec<u8>, serde_json::Error> {
    match request {
        SendRequest::Webservice(request) => {
            serde_json::to_vec(&WebserviceJsonRequest::from(request))
        }
        SendRequest::Pattern(request) => serde_json::to_vec(&PatternJsonRequest::from(request)),
        SendRequest::Votp(request) => serde_json::to_vec(&VotpJsonRequest::from(request)),
    }
}

pub fn decode_send_json_response(json: &str) -> Result<SendResponse, serde_json::Error> {
    serde_json::from_str(json)
}
