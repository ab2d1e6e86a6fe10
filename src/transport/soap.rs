//! `SoapTransport` — the panel's `route` procedure over SOAP/TLS.

use crate::error::TransportError;
use crate::network;
use crate::transport::{trust, xml, Transport};
use async_trait::async_trait;
use quick_xml::escape::escape;
use serde_json::Value;

/// SOAP transport for one panel host.
///
/// Holds the HTTPS client and endpoint URL; the access key travels with each
/// `route` call, so one transport can serve key changes without reconnecting.
pub struct SoapTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl SoapTransport {
    /// Establish the secure channel to a panel host.
    ///
    /// Configures the trust store from the system CA bundle and fetches the
    /// service's WSDL once as the connection check. Any failure here is a
    /// [`TransportError::Connection`], distinct from later call errors.
    pub async fn connect(host: &str) -> Result<Self, TransportError> {
        let client = trust::client_builder()?
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let wsdl = network::wsdl_url(host);
        let response = client
            .get(&wsdl)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        if !response.status().is_success() {
            return Err(TransportError::Connection(format!(
                "server returned {} for {}",
                response.status(),
                wsdl
            )));
        }
        tracing::debug!(host, "connected to InterWorx SOAP endpoint");

        Ok(Self {
            endpoint: network::soap_endpoint(host),
            client,
        })
    }

    fn request_body(key: &str, controller: &str, action: &str, input: Option<&Value>) -> String {
        let input_xml = input.map(xml::encode_value).unwrap_or_default();
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:iworx="urn:iworx.soap">"#,
                "<SOAP-ENV:Body><iworx:route>",
                "<apikey>{key}</apikey><ctrl>{ctrl}</ctrl><action>{action}</action><input>{input}</input>",
                "</iworx:route></SOAP-ENV:Body></SOAP-ENV:Envelope>"
            ),
            key = escape(key),
            ctrl = escape(controller),
            action = escape(action),
            input = input_xml,
        )
    }
}

#[async_trait]
impl Transport for SoapTransport {
    async fn route(
        &self,
        key: &str,
        controller: &str,
        action: &str,
        input: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let body = Self::request_body(key, controller, action, input);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", "urn:iworx.soap#route")
            .body(body)
            .send()
            .await?;
        let text = response.text().await?;
        xml::decode_response(&text)
    }
}
