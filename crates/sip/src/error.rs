use thiserror::Error;

#[derive(Error, Debug)]
pub enum SipError {
    #[error("event header has no event type")]
    EmptyEventType,

    #[error("invalid event type: {value}")]
    InvalidEventType { value: String },

    #[error("invalid event parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("invalid header value: {reason}")]
    InvalidHeaderValue { reason: String },
}

impl SipError {
    pub fn invalid_event_type<S: ToString>(str: S) -> Self {
        Self::InvalidEventType { value: str.to_string() }
    }

    pub fn invalid_parameter<S: ToString>(str: S) -> Self {
        Self::InvalidParameter { reason: str.to_string() }
    }

    pub fn invalid_header_value<S: ToString>(str: S) -> Self {
        Self::InvalidHeaderValue { reason: str.to_string() }
    }
}
