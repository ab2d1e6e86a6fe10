//! The API client — one method per remote endpoint.
//!
//! Thin wrappers over [`InterworxApi::call`], which owns the envelope
//! classification. Typed wire structs are used where the response shape is
//! known; listing rows with positional columns are walked dynamically.

use crate::api::envelope::{as_integer, Envelope};
use crate::domain::packages::PackageDetails;
use crate::domain::reseller::{self, AddResellerAccount, ResellerDetails};
use crate::domain::siteworx::{AddSiteworxAccount, EditSiteworxAccount, SiteworxAccount};
use crate::error::ApiError;
use crate::network;
use crate::transport::{SoapTransport, Transport};
use serde_json::{json, Value};

/// Client for one panel server.
///
/// Owns the access key; [`set_key`](Self::set_key) swaps it for all
/// subsequent calls (it can also carry an active session id).
pub struct InterworxApi<T: Transport = SoapTransport> {
    transport: T,
    key: String,
}

impl InterworxApi<SoapTransport> {
    /// Connect to a panel host. Connection-establishment failures surface as
    /// [`crate::error::TransportError::Connection`].
    pub async fn connect(host: &str, key: impl Into<String>) -> Result<Self, ApiError> {
        let transport = SoapTransport::connect(host).await?;
        Ok(Self::with_transport(transport, key))
    }
}

impl<T: Transport> InterworxApi<T> {
    /// Build a client over an already-established transport.
    pub fn with_transport(transport: T, key: impl Into<String>) -> Self {
        Self {
            transport,
            key: key.into(),
        }
    }

    /// Replace the access key used by subsequent calls.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Execute one remote procedure and classify its response envelope.
    pub async fn call(
        &self,
        controller: &str,
        action: &str,
        input: Option<Value>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(controller, action, "calling route");
        let raw = self
            .transport
            .route(&self.key, controller, action, input.as_ref())
            .await?;
        Envelope::decode(&raw)?.into_result()
    }

    // ── Siteworx accounts ────────────────────────────────────────────────

    pub async fn add_siteworx_account(
        &self,
        account: &AddSiteworxAccount,
    ) -> Result<Value, ApiError> {
        let input = serde_json::to_value(account)?;
        self.call(network::CTRL_SITEWORX, "add", Some(input)).await
    }

    pub async fn edit_siteworx_account(
        &self,
        account: &EditSiteworxAccount,
    ) -> Result<Value, ApiError> {
        let input = serde_json::to_value(account)?;
        self.call(network::CTRL_SITEWORX, "edit", Some(input)).await
    }

    pub async fn delete_siteworx_account(&self, domain: &str) -> Result<Value, ApiError> {
        self.call(
            network::CTRL_SITEWORX,
            "delete",
            Some(json!({ "domain": domain })),
        )
        .await
    }

    pub async fn suspend_siteworx_account(&self, domain: &str) -> Result<Value, ApiError> {
        self.call(
            network::CTRL_SITEWORX,
            "suspend",
            Some(json!({ "domain": domain })),
        )
        .await
    }

    pub async fn unsuspend_siteworx_account(&self, domain: &str) -> Result<Value, ApiError> {
        self.call(
            network::CTRL_SITEWORX,
            "unsuspend",
            Some(json!({ "domain": domain })),
        )
        .await
    }

    /// Account details for a domain. Absent accounts come back from the
    /// server as a failing envelope, not an empty result.
    pub async fn get_siteworx_account(&self, domain: &str) -> Result<SiteworxAccount, ApiError> {
        let payload = self
            .call(
                network::CTRL_SITEWORX,
                "querySiteworxAccountDetails",
                Some(json!({ "domain": domain })),
            )
            .await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// First free IP on the server. An empty listing is a hard failure, never
    /// a silent default.
    pub async fn get_free_ip(&self) -> Result<String, ApiError> {
        let payload = self
            .call(network::CTRL_SITEWORX, "listFreeIps", Some(json!([])))
            .await?;
        payload
            .as_array()
            .and_then(|rows| rows.first())
            .and_then(|row| row.as_array())
            .and_then(|cols| cols.first())
            .and_then(scalar_text)
            .ok_or_else(|| ApiError::NotFound("no free IP addresses available".to_string()))
    }

    // ── Reseller accounts ────────────────────────────────────────────────

    pub async fn add_reseller_account(
        &self,
        account: &AddResellerAccount,
    ) -> Result<Value, ApiError> {
        let input = serde_json::to_value(account)?;
        self.call(network::CTRL_RESELLER, "add", Some(input)).await
    }

    pub async fn delete_reseller_account(&self, reseller_id: i64) -> Result<Value, ApiError> {
        self.call(
            network::CTRL_RESELLER,
            "delete",
            Some(json!({ "reseller_id": reseller_id })),
        )
        .await
    }

    pub async fn suspend_reseller_account(&self, reseller_id: i64) -> Result<Value, ApiError> {
        self.call(
            network::CTRL_RESELLER,
            "edit",
            Some(json!({ "reseller_id": reseller_id, "status": "inactive" })),
        )
        .await
    }

    pub async fn unsuspend_reseller_account(&self, reseller_id: i64) -> Result<Value, ApiError> {
        self.call(
            network::CTRL_RESELLER,
            "edit",
            Some(json!({ "reseller_id": reseller_id, "status": "active" })),
        )
        .await
    }

    /// Resolve a reseller id by email.
    ///
    /// `listIds` rows are `[id, label]` pairs with the email embedded in the
    /// label as `"... (<email>)"`. No match is an absence, not an error.
    pub async fn get_reseller_id(&self, email: &str) -> Result<Option<i64>, ApiError> {
        let payload = self
            .call(network::CTRL_RESELLER, "listIds", Some(json!([])))
            .await?;
        let Some(rows) = payload.as_array() else {
            tracing::error!(payload = %payload, "listIds returned a non-list payload");
            return Err(ApiError::MalformedResponse);
        };
        for row in rows {
            let Some(cols) = row.as_array() else { continue };
            let (Some(id), Some(label)) = (cols.first(), cols.get(1)) else {
                continue;
            };
            let Some(label) = label.as_str() else { continue };
            if reseller::email_from_label(label) == Some(email) {
                return Ok(as_integer(id));
            }
        }
        Ok(None)
    }

    /// Reseller details by email.
    ///
    /// Walks `listResellers` instead of `queryResellerDetails` — the panel's
    /// per-reseller query is unreliable. No match → [`ApiError::NotFound`].
    pub async fn query_reseller_details(&self, email: &str) -> Result<ResellerDetails, ApiError> {
        let payload = self
            .call(network::CTRL_RESELLER, "listResellers", Some(json!([])))
            .await?;
        let resellers: Vec<ResellerDetails> = serde_json::from_value(payload)?;
        resellers
            .into_iter()
            .find(|r| r.email == email)
            .ok_or_else(|| ApiError::NotFound("Reseller does not exist".to_string()))
    }

    // ── Packages ─────────────────────────────────────────────────────────

    pub async fn list_packages(&self) -> Result<Vec<PackageDetails>, ApiError> {
        let payload = self.call(network::CTRL_PACKAGES, "listDetails", None).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Whether some package's name exactly matches (case-sensitive).
    pub async fn package_exists(&self, name: &str) -> Result<bool, ApiError> {
        let packages = self.list_packages().await?;
        Ok(packages.iter().any(|p| p.name == name))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
