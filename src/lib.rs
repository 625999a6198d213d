pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{build_authorization_url, parse_callback, CallbackParams};
pub use crate::config::AuthConfig;
pub use crate::core::{
    all_services, merge_scopes, parse_service, scopes_for, scopes_for_manage,
    scopes_for_services, services_info, services_markdown, user_service_csv, user_services,
    AuthRequestSource, Registry, ServiceIdentifier, ServiceRecord, ServiceView, IDENTITY_SCOPES,
};
pub use crate::utils::error::{Result, ScopeError};
