pub mod markdown;
pub mod registry;
pub mod resolve;

pub use crate::domain::model::{ServiceIdentifier, ServiceRecord, ServiceView};
pub use crate::domain::ports::AuthRequestSource;
pub use crate::utils::error::Result;
pub use markdown::services_markdown;
pub use registry::Registry;
pub use resolve::{merge_scopes, IDENTITY_SCOPES};

pub fn parse_service(raw: &str) -> Result<ServiceIdentifier> {
    Registry::global().parse(raw)
}

pub fn all_services() -> Vec<ServiceIdentifier> {
    Registry::global().all_services()
}

pub fn user_services() -> Vec<ServiceIdentifier> {
    Registry::global().user_services()
}

pub fn user_service_csv() -> String {
    Registry::global().user_service_csv()
}

pub fn scopes_for(service: &ServiceIdentifier) -> Result<Vec<String>> {
    Registry::global().scopes_for(service)
}

pub fn scopes_for_services(services: &[ServiceIdentifier]) -> Result<Vec<String>> {
    Registry::global().scopes_for_services(services)
}

pub fn scopes_for_manage(services: &[ServiceIdentifier]) -> Result<Vec<String>> {
    Registry::global().scopes_for_manage(services)
}

pub fn services_info() -> Vec<ServiceView> {
    Registry::global().services_info()
}
