use thiserror::Error;

use crate::model::summary::Suppression;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("unsupported value for {key}: {value:?}")]
    UnsupportedValue { key: &'static str, value: String },
    #[error("unknown {dimension} bucket: {label:?}")]
    UnknownBucket {
        dimension: &'static str,
        label: String,
    },
    #[error("expected key=value, got {0:?}")]
    MalformedPair(String),
    #[error("params file must hold a JSON object of strings: {0}")]
    MalformedParams(String),
}

/// Why a request stopped before producing group summaries.
#[derive(Debug, PartialEq)]
pub enum Halt {
    Suppressed(Suppression),
    Invalid(RequestError),
}

impl From<Suppression> for Halt {
    fn from(value: Suppression) -> Self {
        Halt::Suppressed(value)
    }
}

impl From<RequestError> for Halt {
    fn from(value: RequestError) -> Self {
        Halt::Invalid(value)
    }
}
