use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings file:
///
/// ```toml
/// [client]
/// base_url = "https://api.swifthaul.example"
/// timeout_seconds = 30
///
/// [auth]
/// email = "${SWIFTHAUL_EMAIL}"
/// password = "${SWIFTHAUL_PASSWORD}"
/// ```
///
/// `${VAR}` placeholders are substituted from the environment before
/// parsing, so credentials can stay out of the file itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub client: ClientSection,
    pub auth: Option<AuthSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSection {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ClientError::InvalidConfig {
            field: "toml_parsing".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.base_url", &self.client.base_url)?;

        if let Some(timeout) = self.client.timeout_seconds {
            if timeout == 0 {
                return Err(ClientError::InvalidConfig {
                    field: "client.timeout_seconds".to_string(),
                    reason: "Timeout must be at least 1 second".to_string(),
                });
            }
        }

        Ok(())
    }
}
