//! Static plugin metadata exposed to the host platform.

use crate::provision::Action;
use serde::Serialize;

/// Descriptor the host platform reads when registering the plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub actions: &'static [Action],
    pub supports_resellers: bool,
    pub features: Features,
    pub fields: Vec<FieldSpec>,
}

/// Capabilities the plugin advertises.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Features {
    pub package_name: bool,
    pub test_connection: bool,
    pub show_nameservers: bool,
    pub upgrades: bool,
}

/// One configuration field shown in the host platform's server settings.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldType,
    pub description: &'static str,
    /// Stored encrypted by the host platform.
    pub encryptable: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Hidden,
}

/// The InterWorx plugin descriptor.
pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        name: "InterWorx-CP",
        description: "InterWorx-CP integration.",
        actions: &[Action::Create, Action::Delete, Action::Suspend, Action::UnSuspend],
        supports_resellers: true,
        features: Features {
            package_name: true,
            test_connection: true,
            show_nameservers: true,
            upgrades: true,
        },
        fields: vec![
            FieldSpec {
                label: "Server Hostname",
                kind: FieldType::Text,
                description: "Hostname of the InterWorx server.",
                encryptable: false,
            },
            FieldSpec {
                label: "Access Key",
                kind: FieldType::Textarea,
                description: "Access key used to authenticate to the server.",
                encryptable: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_actions_and_flags() {
        let d = descriptor();
        assert_eq!(d.name, "InterWorx-CP");
        assert!(d.supports_resellers);
        assert_eq!(
            d.actions,
            &[Action::Create, Action::Delete, Action::Suspend, Action::UnSuspend]
        );
        assert!(d.features.test_connection);
    }

    #[test]
    fn test_access_key_field_is_encryptable() {
        let d = descriptor();
        let key_field = d.fields.iter().find(|f| f.label == "Access Key").unwrap();
        assert!(key_field.encryptable);
        assert!(matches!(key_field.kind, FieldType::Textarea));
    }

    #[test]
    fn test_descriptor_serializes_action_names() {
        let json = serde_json::to_string(&descriptor()).unwrap();
        assert!(json.contains("\"UnSuspend\""));
        assert!(json.contains("\"Create\""));
    }
}
