//! Lifecycle dispatch for the host billing platform.

mod context;
mod descriptor;
mod dispatcher;

pub use context::ProvisionContext;
pub use descriptor::{descriptor, Features, FieldSpec, FieldType, PluginDescriptor};
pub use dispatcher::Provisioner;

use serde::Serialize;

/// A lifecycle action the host platform can offer for an account.
///
/// Display strings are exactly the words the platform matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Create,
    Delete,
    Suspend,
    UnSuspend,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Delete => "Delete",
            Self::Suspend => "Suspend",
            Self::UnSuspend => "UnSuspend",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
