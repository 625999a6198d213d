use crate::domain::model::ServiceIdentifier;
use crate::utils::error::Result;

/// Everything an authorization URL needs besides the state token.
pub trait AuthRequestSource: Send + Sync {
    fn client_id(&self) -> &str;
    fn redirect_uri(&self) -> &str;
    fn auth_endpoint(&self) -> &str;
    /// Services to request; an empty list means the individual-account defaults.
    fn requested_services(&self) -> Result<Vec<ServiceIdentifier>>;
    fn manage(&self) -> bool;
}
