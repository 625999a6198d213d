use serde::Serialize;
use std::fmt;

/// Canonical (trimmed, lowercase) name of a registered service.
///
/// Values only come out of the registry, so every identifier in circulation
/// names an entry of the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServiceIdentifier(&'static str);

impl ServiceIdentifier {
    pub(crate) const fn from_static(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for ServiceIdentifier {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub scopes: &'static [&'static str],
    pub available_to_individual_accounts: bool,
    pub dependent_apis: &'static [&'static str],
    pub note: &'static str,
}

/// Owned snapshot of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceView {
    pub service: ServiceIdentifier,
    #[serde(rename = "user")]
    pub available_to_individual_accounts: bool,
    pub scopes: Vec<String>,
    #[serde(rename = "apis", skip_serializing_if = "Vec::is_empty")]
    pub dependent_apis: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl ServiceView {
    pub(crate) fn new(service: ServiceIdentifier, record: &ServiceRecord) -> Self {
        Self {
            service,
            available_to_individual_accounts: record.available_to_individual_accounts,
            scopes: record.scopes.iter().map(|s| s.to_string()).collect(),
            dependent_apis: record.dependent_apis.iter().map(|s| s.to_string()).collect(),
            note: record.note.to_string(),
        }
    }
}
