use serde::Deserialize;

/// The single shared secret guarding every write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PasswordConfig {
    #[serde(rename = "senhaPadrao", alias = "defaultPassword", default)]
    pub default_password: Option<String>,
}

impl PasswordConfig {
    pub fn new(default_password: impl Into<String>) -> Self {
        Self {
            default_password: Some(default_password.into()),
        }
    }

    /// Exact string comparison. A config without a password accepts nothing.
    pub fn accepts(&self, candidate: Option<&str>) -> bool {
        match (self.default_password.as_deref(), candidate) {
            (Some(expected), Some(candidate)) => expected == candidate,
            _ => false,
        }
    }
}
