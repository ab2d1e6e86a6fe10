//! Wire types for the reseller controller.

use crate::domain::siteworx::{AccountStatus, AddSiteworxAccount};
use serde::{Deserialize, Serialize};

/// `add` request: the siteworx fields plus the reseller-only ones.
#[derive(Debug, Clone, Serialize)]
pub struct AddResellerAccount {
    #[serde(flatten)]
    pub account: AddSiteworxAccount,
    pub status: AccountStatus,
    pub ipv4: String,
}

/// One entry from `listResellers`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResellerDetails {
    #[serde(default)]
    pub reseller_id: Option<i64>,
    pub email: String,
    pub status: AccountStatus,
}

/// Extract the email a `listIds` label embeds as `"... (<email>)"`.
///
/// Takes the substring between the last `(` and the trailing `)`; labels
/// without that shape yield `None`.
pub fn email_from_label(label: &str) -> Option<&str> {
    let open = label.rfind('(')?;
    label[open + 1..].strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_from_label() {
        assert_eq!(email_from_label("Jane (jane@x.com)"), Some("jane@x.com"));
        assert_eq!(
            email_from_label("Bob (the builder) (bob@x.com)"),
            Some("bob@x.com")
        );
    }

    #[test]
    fn test_email_from_label_rejects_other_shapes() {
        assert_eq!(email_from_label("no email here"), None);
        assert_eq!(email_from_label("trailing (open"), None);
        assert_eq!(email_from_label(""), None);
    }
}
