use serde::{Deserialize, Serialize};

/// Deployment record written once by `init`.
///
/// A missing `version` decodes as the empty string, which never matches the compiled
/// contract version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractState {
    #[serde(default)]
    pub version: String,
}

impl ContractState {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}
