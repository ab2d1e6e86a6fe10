//! The per-operation provisioning context and its request derivations.

use crate::domain::reseller::AddResellerAccount;
use crate::domain::siteworx::{
    self, AccountStatus, AddSiteworxAccount, EditSiteworxAccount,
};
use chrono::{Datelike, Local};

/// Everything one lifecycle operation needs, resolved once from the host
/// platform's configuration before dispatch. Read-only during the operation.
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    pub server_host: String,
    pub access_key: String,
    pub domain_name: String,
    pub username: String,
    pub password: String,
    pub ip_address: String,
    pub package_template: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_email: String,
    pub is_reseller: bool,
}

impl ProvisionContext {
    /// The panel rejects unix-style usernames longer than 8 characters.
    pub(crate) fn uniqname(&self) -> &str {
        truncate_username(&self.username)
    }

    fn nickname(&self) -> String {
        format!("{} {}", self.customer_first_name, self.customer_last_name)
    }

    pub(crate) fn add_request(&self) -> AddSiteworxAccount {
        AddSiteworxAccount {
            domainname: self.domain_name.clone(),
            ipaddress: self.ip_address.clone(),
            database_server: siteworx::DATABASE_SERVER.to_string(),
            billing_day: Local::now().day(),
            uniqname: self.uniqname().to_string(),
            nickname: self.nickname(),
            email: self.customer_email.clone(),
            password: self.password.clone(),
            confirm_password: self.password.clone(),
            language: siteworx::LANGUAGE.to_string(),
            theme: siteworx::THEME.to_string(),
            menu_style: siteworx::MENU_STYLE.to_string(),
            packagetemplate: self.package_template.clone(),
        }
    }

    /// Reseller creation reuses the siteworx fields, active from the start,
    /// bound to an IP the caller allocated.
    pub(crate) fn add_reseller_request(&self, ipv4: String) -> AddResellerAccount {
        AddResellerAccount {
            account: self.add_request(),
            status: AccountStatus::Active,
            ipv4,
        }
    }

    pub(crate) fn edit_request(&self) -> EditSiteworxAccount {
        EditSiteworxAccount {
            domainname: self.domain_name.clone(),
            ipaddress: self.ip_address.clone(),
            uniqname: self.uniqname().to_string(),
            password: self.password.clone(),
            confirm_password: self.password.clone(),
            packagetemplate: self.package_template.clone(),
        }
    }
}

/// Truncate to at most 8 characters, passing shorter names through unchanged.
pub fn truncate_username(username: &str) -> &str {
    match username.char_indices().nth(8) {
        Some((idx, _)) => &username[..idx],
        None => username,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ProvisionContext {
        ProvisionContext {
            server_host: "panel.example.com".to_string(),
            access_key: "key".to_string(),
            domain_name: "example.com".to_string(),
            username: "exampleuser".to_string(),
            password: "hunter22".to_string(),
            ip_address: "203.0.113.10".to_string(),
            package_template: "Gold".to_string(),
            customer_first_name: "Jane".to_string(),
            customer_last_name: "Doe".to_string(),
            customer_email: "jane@x.com".to_string(),
            is_reseller: false,
        }
    }

    #[test]
    fn test_truncate_username() {
        assert_eq!(truncate_username("exampleuser"), "exampleu");
        assert_eq!(truncate_username("short"), "short");
        assert_eq!(truncate_username("eightchr"), "eightchr");
    }

    #[test]
    fn test_add_request_derives_fields() {
        let request = context().add_request();
        assert_eq!(request.uniqname, "exampleu");
        assert_eq!(request.nickname, "Jane Doe");
        assert_eq!(request.database_server, "localhost");
        assert_eq!(request.language, "en-us");
        assert_eq!(request.theme, "interworx");
        assert_eq!(request.menu_style, "small");
        assert_eq!(request.confirm_password, request.password);
        assert!((1..=31).contains(&request.billing_day));
    }

    #[test]
    fn test_add_reseller_request_is_active_with_ip() {
        let request = context().add_reseller_request("198.51.100.7".to_string());
        assert_eq!(request.status, AccountStatus::Active);
        assert_eq!(request.ipv4, "198.51.100.7");
        assert_eq!(request.account.domainname, "example.com");
    }
}
