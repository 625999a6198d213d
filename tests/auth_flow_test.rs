use anyhow::Result;
use scope_registry::utils::validation::Validate;
use scope_registry::{build_authorization_url, parse_callback, AuthConfig, ScopeError};
use std::collections::HashMap;
use tempfile::TempDir;

#[test]
fn test_config_to_url_to_callback() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("scope-registry.toml");

    let config_content = r#"
[client]
client_id = "client-abc.apps.googleusercontent.com"
redirect_uri = "http://127.0.0.1:8085/oauth2/callback"

[services]
requested = ["gmail", "drive"]
manage = true
"#;
    std::fs::write(&config_path, config_content)?;

    let config = AuthConfig::from_file(&config_path)?;
    config.validate()?;

    let url = build_authorization_url(&config, "state-42")?;
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(
        params["scope"],
        "email https://mail.google.com/ https://www.googleapis.com/auth/drive \
         https://www.googleapis.com/auth/gmail.settings.basic \
         https://www.googleapis.com/auth/userinfo.email openid"
    );
    assert_eq!(params["access_type"], "offline");

    let redirect = format!("{}?code=auth-code&state={}", params["redirect_uri"], params["state"]);
    let callback = parse_callback(&redirect)?;
    assert_eq!(callback.code, "auth-code");
    assert_eq!(callback.state, "state-42");

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = AuthConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ScopeError::IoError(_))));
}
