//! The `route` RPC seam.
//!
//! Every remote procedure on the panel goes through one generic `route`
//! call taking `(key, controller, action, input)` and returning the decoded
//! response as a dynamic value. [`SoapTransport`] is the production
//! implementation; tests script their own.

pub mod soap;
pub mod trust;

mod xml;

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

pub use soap::SoapTransport;

/// One `route` RPC against the panel.
///
/// Returns the server's response decoded into a dynamic value — the
/// *undecoded* envelope. Classification of `{status, payload}` happens in
/// `InterworxApi::call`, not here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn route(
        &self,
        key: &str,
        controller: &str,
        action: &str,
        input: Option<&Value>,
    ) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn route(
        &self,
        key: &str,
        controller: &str,
        action: &str,
        input: Option<&Value>,
    ) -> Result<Value, TransportError> {
        (**self).route(key, controller, action, input).await
    }
}
