use crate::core::{parse_service, AuthRequestSource, ServiceIdentifier};
use crate::utils::error::{Result, ScopeError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub client: ClientConfig,
    pub services: Option<ServicesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub client_id: Option<String>,
    pub redirect_uri: String,
    pub auth_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub requested: Option<Vec<String>>,
    pub manage: Option<bool>,
}

impl AuthConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded auth config");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScopeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScopeError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        let client_id = validation::validate_required_field("client.client_id", &self.client.client_id)?;
        validation::validate_non_empty_string("client.client_id", client_id)?;
        validation::validate_url("client.redirect_uri", &self.client.redirect_uri)?;
        validation::validate_url("client.auth_endpoint", self.auth_endpoint())?;

        self.requested_services()?;
        Ok(())
    }
}

impl AuthRequestSource for AuthConfig {
    fn client_id(&self) -> &str {
        self.client.client_id.as_deref().unwrap_or_default()
    }

    fn redirect_uri(&self) -> &str {
        &self.client.redirect_uri
    }

    fn auth_endpoint(&self) -> &str {
        self.client
            .auth_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_AUTH_ENDPOINT)
    }

    fn requested_services(&self) -> Result<Vec<ServiceIdentifier>> {
        let requested = self
            .services
            .as_ref()
            .and_then(|s| s.requested.as_deref())
            .unwrap_or_default();

        requested.iter().map(|raw| parse_service(raw)).collect()
    }

    fn manage(&self) -> bool {
        self.services
            .as_ref()
            .and_then(|s| s.manage)
            .unwrap_or(false)
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
