use crate::domain::model::{ServiceIdentifier, ServiceRecord, ServiceView};
use crate::utils::error::{Result, ScopeError};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

pub const SCOPE_OPENID: &str = "openid";
pub const SCOPE_EMAIL: &str = "email";
pub const SCOPE_USERINFO_EMAIL: &str = "https://www.googleapis.com/auth/userinfo.email";

#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry {
    pub id: &'static str,
    pub record: ServiceRecord,
}

/// Built-in table. Slice order is the presentation order.
static SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        id: "gmail",
        record: ServiceRecord {
            scopes: &[
                "https://mail.google.com/",
                "https://www.googleapis.com/auth/gmail.settings.basic",
            ],
            available_to_individual_accounts: true,
            dependent_apis: &["Gmail API"],
            note: "",
        },
    },
    ServiceEntry {
        id: "calendar",
        record: ServiceRecord {
            scopes: &["https://www.googleapis.com/auth/calendar"],
            available_to_individual_accounts: true,
            dependent_apis: &["Calendar API"],
            note: "",
        },
    },
    ServiceEntry {
        id: "drive",
        record: ServiceRecord {
            scopes: &["https://www.googleapis.com/auth/drive"],
            available_to_individual_accounts: true,
            dependent_apis: &["Drive API"],
            note: "",
        },
    },
    ServiceEntry {
        id: "docs",
        record: ServiceRecord {
            // Docs operations run through Drive; the Docs scope is requested alongside it.
            scopes: &[
                "https://www.googleapis.com/auth/drive",
                "https://www.googleapis.com/auth/documents",
            ],
            available_to_individual_accounts: true,
            dependent_apis: &["Docs API", "Drive API"],
            note: "Export/copy/create via Drive",
        },
    },
    ServiceEntry {
        id: "contacts",
        record: ServiceRecord {
            scopes: &[
                "https://www.googleapis.com/auth/contacts",
                "https://www.googleapis.com/auth/contacts.other.readonly",
                "https://www.googleapis.com/auth/directory.readonly",
            ],
            available_to_individual_accounts: true,
            dependent_apis: &["People API"],
            note: "Contacts + other contacts + directory",
        },
    },
    ServiceEntry {
        id: "tasks",
        record: ServiceRecord {
            scopes: &["https://www.googleapis.com/auth/tasks"],
            available_to_individual_accounts: true,
            dependent_apis: &["Tasks API"],
            note: "",
        },
    },
    ServiceEntry {
        id: "sheets",
        record: ServiceRecord {
            scopes: &["https://www.googleapis.com/auth/spreadsheets"],
            available_to_individual_accounts: true,
            dependent_apis: &["Sheets API", "Drive API"],
            note: "Export via Drive",
        },
    },
    ServiceEntry {
        id: "people",
        record: ServiceRecord {
            // needed for people/me
            scopes: &["profile"],
            available_to_individual_accounts: true,
            dependent_apis: &["People API"],
            note: "OIDC profile scope",
        },
    },
    ServiceEntry {
        id: "groups",
        record: ServiceRecord {
            scopes: &["https://www.googleapis.com/auth/cloud-identity.groups.readonly"],
            available_to_individual_accounts: false,
            dependent_apis: &["Cloud Identity API"],
            note: "Workspace only",
        },
    },
    ServiceEntry {
        id: "keep",
        record: ServiceRecord {
            scopes: &["https://www.googleapis.com/auth/keep"],
            available_to_individual_accounts: false,
            dependent_apis: &["Keep API"],
            note: "Workspace only; service account",
        },
    },
];

/// Read-only service table plus a name index derived from it.
#[derive(Debug)]
pub struct Registry {
    entries: &'static [ServiceEntry],
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Process-wide registry over the built-in table, built on first use.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Registry::new(SERVICES))
    }

    pub(crate) fn new(entries: &'static [ServiceEntry]) -> Self {
        let index: HashMap<&'static str, usize> = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id, position))
            .collect();
        debug_assert_eq!(index.len(), entries.len(), "duplicate service id in table");

        Self { entries, index }
    }

    pub(crate) fn record(&self, id: &str) -> Option<&ServiceRecord> {
        self.index.get(id).map(|&position| &self.entries[position].record)
    }

    pub fn parse(&self, raw: &str) -> Result<ServiceIdentifier> {
        let canonical = raw.trim().to_lowercase();
        match self.index.get(canonical.as_str()) {
            Some(&position) => Ok(ServiceIdentifier::from_static(self.entries[position].id)),
            None => {
                tracing::warn!(input = raw, "rejected unknown service");
                Err(self.unknown(raw))
            }
        }
    }

    pub fn all_services(&self) -> Vec<ServiceIdentifier> {
        self.filtered(|_| true)
    }

    /// Services usable by individual (consumer) accounts, in presentation order.
    pub fn user_services(&self) -> Vec<ServiceIdentifier> {
        self.filtered(|record| record.available_to_individual_accounts)
    }

    pub fn user_service_csv(&self) -> String {
        join_services(&self.user_services(), ",")
    }

    pub fn scopes_for(&self, service: &ServiceIdentifier) -> Result<Vec<String>> {
        let record = self
            .record(service.as_str())
            .ok_or_else(|| self.unknown(service.as_str()))?;

        Ok(record.scopes.iter().map(|s| s.to_string()).collect())
    }

    pub fn services_info(&self) -> Vec<ServiceView> {
        self.entries
            .iter()
            .map(|entry| ServiceView::new(ServiceIdentifier::from_static(entry.id), &entry.record))
            .collect()
    }

    pub(crate) fn unknown(&self, input: &str) -> ScopeError {
        ScopeError::UnknownService {
            input: input.to_string(),
            expected: join_services(&self.all_services(), "|"),
        }
    }

    fn filtered<F>(&self, include: F) -> Vec<ServiceIdentifier>
    where
        F: Fn(&ServiceRecord) -> bool,
    {
        self.entries
            .iter()
            .filter(|entry| include(&entry.record))
            .map(|entry| ServiceIdentifier::from_static(entry.id))
            .collect()
    }
}

pub(crate) fn join_services(services: &[ServiceIdentifier], sep: &str) -> String {
    services
        .iter()
        .map(ServiceIdentifier::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

impl FromStr for ServiceIdentifier {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self> {
        Registry::global().parse(s)
    }
}

impl<'de> Deserialize<'de> for ServiceIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
