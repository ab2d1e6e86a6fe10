//! Wire types for the siteworx controller.

use serde::{Deserialize, Serialize};

/// Fixed defaults the panel expects on account creation.
pub const DATABASE_SERVER: &str = "localhost";
pub const LANGUAGE: &str = "en-us";
pub const THEME: &str = "interworx";
pub const MENU_STYLE: &str = "small";

/// Server-reported account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `add` request. Field names are the panel's exact form names.
#[derive(Debug, Clone, Serialize)]
pub struct AddSiteworxAccount {
    pub domainname: String,
    pub ipaddress: String,
    pub database_server: String,
    pub billing_day: u32,
    pub uniqname: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub language: String,
    pub theme: String,
    pub menu_style: String,
    pub packagetemplate: String,
}

/// `edit` request.
#[derive(Debug, Clone, Serialize)]
pub struct EditSiteworxAccount {
    pub domainname: String,
    pub ipaddress: String,
    pub uniqname: String,
    pub password: String,
    pub confirm_password: String,
    pub packagetemplate: String,
}

/// `querySiteworxAccountDetails` response. Only the fields the lifecycle
/// logic reads; the panel sends many more.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteworxAccount {
    pub status: AccountStatus,
    #[serde(default)]
    pub domain: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_status_deserializes_known_and_unknown() {
        let active: AccountStatus = serde_json::from_value(json!("active")).unwrap();
        assert_eq!(active, AccountStatus::Active);
        let suspended: AccountStatus = serde_json::from_value(json!("suspended")).unwrap();
        assert_eq!(suspended, AccountStatus::Suspended);
        let odd: AccountStatus = serde_json::from_value(json!("deactivating")).unwrap();
        assert_eq!(odd, AccountStatus::Unknown);
    }

    #[test]
    fn test_siteworx_account_ignores_extra_fields() {
        let account: SiteworxAccount = serde_json::from_value(json!({
            "status": "inactive",
            "domain": "example.com",
            "storage": "512",
        }))
        .unwrap();
        assert_eq!(account.status, AccountStatus::Inactive);
        assert_eq!(account.domain.as_deref(), Some("example.com"));
    }
}
