use crate::core::{AuthRequestSource, Registry};
use crate::utils::error::{Result, ScopeError};
use crate::utils::validation::validate_url;
use url::Url;

/// Builds the consent URL for `source`, with `scope` set to the space-joined
/// resolved scopes.
pub fn build_authorization_url(source: &dyn AuthRequestSource, state: &str) -> Result<Url> {
    if state.trim().is_empty() {
        return Err(ScopeError::InvalidConfigValueError {
            field: "state".to_string(),
            value: state.to_string(),
            reason: "State token cannot be empty".to_string(),
        });
    }

    let registry = Registry::global();
    let mut services = source.requested_services()?;
    if services.is_empty() {
        services = registry.user_services();
    }

    let scopes = if source.manage() {
        registry.scopes_for_manage(&services)?
    } else {
        registry.scopes_for_services(&services)?
    };

    let mut url = validate_url("client.auth_endpoint", source.auth_endpoint())?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", source.client_id())
        .append_pair("redirect_uri", source.redirect_uri())
        .append_pair("scope", &scopes.join(" "))
        .append_pair("state", state)
        .append_pair("access_type", "offline");

    tracing::debug!(
        services = services.len(),
        scopes = scopes.len(),
        manage = source.manage(),
        "built authorization url"
    );
    Ok(url)
}
