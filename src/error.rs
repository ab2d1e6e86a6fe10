//! SDK error types, one enum per layer.

use thiserror::Error;

/// Transport-layer errors: the secure channel and the SOAP codec.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The secure channel could not be established. Raised only by
    /// `SoapTransport::connect`, never by a later call.
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid SOAP response: {0}")]
    Decode(String),
}

/// Remote-call errors, classified from the `{status, payload}` envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response was not a map, or lacked `status`/`payload`.
    #[error("Unexpected response from server")]
    MalformedResponse,

    /// Envelope status 401, regardless of payload.
    #[error("Failed to authenticate")]
    AuthenticationFailed,

    /// Non-zero status with an empty payload.
    #[error("The result is empty.")]
    EmptyResult,

    /// Non-zero status. The message is the server's own error text when the
    /// payload is scalar, generic when it is structured.
    #[error("{0}")]
    CallFailed(String),

    /// A lookup (reseller by email, free IP) yielded no match. Used as a
    /// control signal by the available-actions query.
    #[error("{0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Lifecycle dispatch errors.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
