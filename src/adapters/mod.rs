// Adapters layer: the OAuth edges that consume resolved scopes. Pure, no network I/O.

pub mod auth_url;
pub mod callback;

pub use auth_url::build_authorization_url;
pub use callback::{parse_callback, CallbackParams};
