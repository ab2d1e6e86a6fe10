//! The lifecycle dispatcher.
//!
//! Maps provisioning intents onto API calls and turns results into short
//! human-readable confirmations or an ordered action list. Account state
//! lives entirely on the server; every decision re-queries it.

use crate::api::InterworxApi;
use crate::domain::siteworx::AccountStatus;
use crate::error::{ApiError, ProvisionError};
use crate::provision::{Action, ProvisionContext};
use crate::transport::{SoapTransport, Transport};

/// Lifecycle dispatcher for one panel server.
pub struct Provisioner<T: Transport = SoapTransport> {
    api: InterworxApi<T>,
}

impl Provisioner<SoapTransport> {
    /// Connect to the server named in the context.
    pub async fn connect(ctx: &ProvisionContext) -> Result<Self, ProvisionError> {
        let api = InterworxApi::connect(&ctx.server_host, ctx.access_key.clone()).await?;
        Ok(Self::new(api))
    }
}

impl<T: Transport> Provisioner<T> {
    pub fn new(api: InterworxApi<T>) -> Self {
        Self { api }
    }

    /// Create the account.
    ///
    /// Resellers get a free IP allocated first and start out active;
    /// standalone accounts are added with the derived siteworx fields.
    pub async fn create(&self, ctx: &ProvisionContext) -> Result<String, ProvisionError> {
        if ctx.is_reseller {
            let ip = self.api.get_free_ip().await?;
            self.api
                .add_reseller_account(&ctx.add_reseller_request(ip))
                .await?;
        } else {
            self.api.add_siteworx_account(&ctx.add_request()).await?;
        }
        Ok(format!("{} has been created.", ctx.domain_name))
    }

    pub async fn delete(&self, ctx: &ProvisionContext) -> Result<String, ProvisionError> {
        if ctx.is_reseller {
            let id = self.reseller_id(ctx).await?;
            self.api.delete_reseller_account(id).await?;
        } else {
            self.api.delete_siteworx_account(&ctx.domain_name).await?;
        }
        Ok(format!("{} has been deleted.", ctx.domain_name))
    }

    pub async fn suspend(&self, ctx: &ProvisionContext) -> Result<String, ProvisionError> {
        if ctx.is_reseller {
            let id = self.reseller_id(ctx).await?;
            self.api.suspend_reseller_account(id).await?;
        } else {
            self.api.suspend_siteworx_account(&ctx.domain_name).await?;
        }
        Ok(format!("{} has been suspended.", ctx.domain_name))
    }

    pub async fn unsuspend(&self, ctx: &ProvisionContext) -> Result<String, ProvisionError> {
        if ctx.is_reseller {
            let id = self.reseller_id(ctx).await?;
            self.api.unsuspend_reseller_account(id).await?;
        } else {
            self.api
                .unsuspend_siteworx_account(&ctx.domain_name)
                .await?;
        }
        Ok(format!("{} has been unsuspended.", ctx.domain_name))
    }

    /// Update username, password, IP, and package template.
    ///
    /// Reseller accounts cannot be updated through this adapter; that is an
    /// explicit refusal, never a fallthrough to the siteworx path.
    pub async fn update(&self, ctx: &ProvisionContext) -> Result<String, ProvisionError> {
        if ctx.is_reseller {
            return Err(ProvisionError::Unsupported(
                "reseller accounts cannot be updated".to_string(),
            ));
        }
        self.api.edit_siteworx_account(&ctx.edit_request()).await?;
        Ok(format!("{} has been updated.", ctx.domain_name))
    }

    /// Actions currently valid for the account, derived from remote state.
    ///
    /// A lookup failure meaning "no such account" is reinterpreted as "offer
    /// Create"; authentication, transport, and malformed-response errors
    /// still propagate.
    pub async fn available_actions(
        &self,
        ctx: &ProvisionContext,
    ) -> Result<Vec<Action>, ProvisionError> {
        let second = if ctx.is_reseller {
            match self.api.query_reseller_details(&ctx.customer_email).await {
                Ok(details) => match details.status {
                    AccountStatus::Active => Action::Suspend,
                    _ => Action::UnSuspend,
                },
                Err(e) if is_absence(&e) => return Ok(vec![Action::Create]),
                Err(e) => return Err(e.into()),
            }
        } else {
            match self.api.get_siteworx_account(&ctx.domain_name).await {
                Ok(account) => match account.status {
                    AccountStatus::Suspended | AccountStatus::Inactive => Action::UnSuspend,
                    _ => Action::Suspend,
                },
                Err(e) if is_absence(&e) => return Ok(vec![Action::Create]),
                Err(e) => return Err(e.into()),
            }
        };
        Ok(vec![Action::Delete, second])
    }

    /// Connectivity check: a well-formed package listing is success.
    pub async fn test_connection(&self) -> Result<(), ProvisionError> {
        tracing::debug!("testing connection to InterWorx server");
        let packages = self.api.list_packages().await?;
        tracing::debug!(count = packages.len(), "package listing returned");
        Ok(())
    }

    async fn reseller_id(&self, ctx: &ProvisionContext) -> Result<i64, ProvisionError> {
        self.api
            .get_reseller_id(&ctx.customer_email)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "no reseller account matches {}",
                    ctx.customer_email
                ))
                .into()
            })
    }
}

/// The remote's ways of saying "no such account": an explicit lookup miss, or
/// a failing envelope from querying an absent account.
fn is_absence(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::NotFound(_) | ApiError::CallFailed(_) | ApiError::EmptyResult
    )
}
