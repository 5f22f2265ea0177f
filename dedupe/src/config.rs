//! CRM connection configuration
//!
//! The engine and client never read the environment themselves; the caller
//! builds a `CrmConfig` once at startup and passes it in.

use crate::error::{DedupeError, DedupeResult};
use std::env;

/// Environment variable holding the CRM company domain, e.g.
/// `https://mycompany.pipedrive.com`
pub const DOMAIN_ENV: &str = "PIPEDRIVE_DOMAIN";

/// Environment variable holding the API token
pub const API_KEY_ENV: &str = "PIPEDRIVE_API_KEY";

/// Connection settings for the remote CRM API
#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub domain: String,
    pub api_token: String,
}

impl CrmConfig {
    pub fn new(domain: impl Into<String>, api_token: impl Into<String>) -> Self {
        let domain = domain.into().trim_end_matches('/').to_string();
        Self {
            domain,
            api_token: api_token.into(),
        }
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> DedupeResult<Self> {
        let domain = env::var(DOMAIN_ENV).map_err(|_| DedupeError::ConfigError {
            message: format!("{DOMAIN_ENV} must be set"),
        })?;
        let api_token = env::var(API_KEY_ENV).map_err(|_| DedupeError::ConfigError {
            message: format!("{API_KEY_ENV} must be set"),
        })?;

        if api_token.is_empty() {
            return Err(DedupeError::ConfigError {
                message: format!("{API_KEY_ENV} is empty"),
            });
        }

        Ok(Self::new(domain, api_token))
    }

    /// Base URL for a record collection, e.g. `https://.../v1/persons`
    pub fn collection_url(&self, kind: crate::types::EntityKind) -> String {
        format!("{}/v1/{}", self.domain, kind.collection())
    }
}
