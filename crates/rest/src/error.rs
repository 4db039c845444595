use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestError {
    #[error("invalid form: {reason}")]
    InvalidForm { reason: String },

    #[error("invalid json: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid reference '{reference}': {source}")]
    InvalidReference {
        reference: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("message has no entity")]
    MissingEntity,
}

impl RestError {
    pub fn invalid_form<S: ToString>(str: S) -> Self {
        Self::InvalidForm { reason: str.to_string() }
    }

    pub fn invalid_reference<S: ToString>(reference: S, source: http::uri::InvalidUri) -> Self {
        Self::InvalidReference { reference: reference.to_string(), source }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }
}

impl From<http::Error> for RestError {
    fn from(e: http::Error) -> Self {
        Self::invalid_header(e)
    }
}

impl From<http::header::InvalidHeaderValue> for RestError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_header(e)
    }
}
