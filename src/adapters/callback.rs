use crate::utils::error::{Result, ScopeError};
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}

/// Extracts the authorization code and state from a redirect URL.
pub fn parse_callback(raw: &str) -> Result<CallbackParams> {
    let url = Url::parse(raw.trim()).map_err(|e| callback_error(raw, e.to_string()))?;

    let mut code = None;
    let mut state = None;
    for (key, value) in url.query_pairs() {
        match &*key {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => {
                return Err(ScopeError::AuthorizationDenied {
                    error: value.into_owned(),
                })
            }
            _ => {}
        }
    }

    let code = code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| callback_error(raw, "missing code"))?;
    let state = state
        .filter(|s| !s.is_empty())
        .ok_or_else(|| callback_error(raw, "missing state"))?;

    Ok(CallbackParams { code, state })
}

fn callback_error(raw: &str, reason: impl Into<String>) -> ScopeError {
    ScopeError::CallbackError {
        url: raw.to_string(),
        reason: reason.into(),
    }
}
