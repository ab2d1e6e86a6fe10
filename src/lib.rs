//! # InterWorx Provisioning SDK
//!
//! A Rust client for the InterWorx control panel, aimed at billing/automation
//! platforms that need to provision hosting and reseller accounts.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — domain types, wire types, error taxonomy, network constants
//! 2. **Transport** — the [`transport::Transport`] seam plus
//!    [`transport::SoapTransport`], the panel's SOAP `route` procedure over TLS
//! 3. **API client** — [`api::InterworxApi`] with one method per remote
//!    endpoint and the response-envelope classification core
//! 4. **Provisioner** — [`provision::Provisioner`], lifecycle dispatch for
//!    create/delete/suspend/unsuspend/update plus available-actions queries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use interworx_provision::prelude::*;
//!
//! let api = InterworxApi::connect("panel.example.com", access_key).await?;
//! let provisioner = Provisioner::new(api);
//!
//! let message = provisioner.create(&context).await?;
//! let actions = provisioner.available_actions(&context).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain wire types: siteworx accounts, resellers, packages.
pub mod domain;

/// SDK error types, one enum per layer.
pub mod error;

/// Endpoint constants: port, controller paths, URL helpers.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// The `route` RPC seam and its SOAP-over-TLS implementation.
pub mod transport;

// ── Layer 3: API client ──────────────────────────────────────────────────────

/// `InterworxApi` — per-endpoint methods over the classified `call` core.
pub mod api;

// ── Layer 4: Provisioner ─────────────────────────────────────────────────────

/// Lifecycle dispatch and the plugin descriptor metadata.
pub mod provision;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::api::{Envelope, InterworxApi, Payload};

    pub use crate::domain::packages::PackageDetails;
    pub use crate::domain::reseller::{AddResellerAccount, ResellerDetails};
    pub use crate::domain::siteworx::{
        AccountStatus, AddSiteworxAccount, EditSiteworxAccount, SiteworxAccount,
    };

    pub use crate::error::{ApiError, ProvisionError, TransportError};

    pub use crate::provision::{
        descriptor, Action, PluginDescriptor, ProvisionContext, Provisioner,
    };

    pub use crate::transport::{SoapTransport, Transport};
}
