use crate::core::registry::{Registry, SCOPE_EMAIL, SCOPE_OPENID, SCOPE_USERINFO_EMAIL};
use crate::domain::model::ServiceIdentifier;
use crate::utils::error::Result;
use std::collections::BTreeSet;

pub const IDENTITY_SCOPES: [&str; 3] = [SCOPE_OPENID, SCOPE_EMAIL, SCOPE_USERINFO_EMAIL];

impl Registry {
    /// Union of the scopes of `services`, sorted ascending without duplicates.
    ///
    /// Input order and repeats do not affect the result. The first unknown
    /// service aborts the whole call.
    pub fn scopes_for_services(&self, services: &[ServiceIdentifier]) -> Result<Vec<String>> {
        let mut set = BTreeSet::new();
        for service in services {
            set.extend(self.scopes_for(service)?);
        }

        let scopes: Vec<String> = set.into_iter().collect();
        tracing::debug!(
            services = services.len(),
            scopes = scopes.len(),
            "resolved service scopes"
        );
        Ok(scopes)
    }

    /// Service scopes plus the identity scopes needed to manage the account.
    pub fn scopes_for_manage(&self, services: &[ServiceIdentifier]) -> Result<Vec<String>> {
        let scopes = self.scopes_for_services(services)?;
        Ok(merge_scopes(&scopes, &IDENTITY_SCOPES))
    }
}

/// Sorted, deduplicated union of two scope lists. Blank entries are dropped.
pub fn merge_scopes<A, B>(scopes: &[A], extras: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    scopes
        .iter()
        .map(AsRef::<str>::as_ref)
        .chain(extras.iter().map(AsRef::<str>::as_ref))
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ScopeError;

    fn ids(names: &[&str]) -> Vec<ServiceIdentifier> {
        names
            .iter()
            .map(|name| Registry::global().parse(name).unwrap())
            .collect()
    }

    fn assert_strictly_sorted(scopes: &[String]) {
        assert!(
            scopes.windows(2).all(|w| w[0] < w[1]),
            "not strictly ascending: {:?}",
            scopes
        );
    }

    #[test]
    fn test_union_ignores_order_and_repeats() {
        let registry = Registry::global();
        let aba = registry.scopes_for_services(&ids(&["docs", "drive", "docs"])).unwrap();
        let ba = registry.scopes_for_services(&ids(&["drive", "docs"])).unwrap();
        let ab = registry.scopes_for_services(&ids(&["docs", "drive"])).unwrap();

        assert_eq!(aba, ba);
        assert_eq!(ba, ab);
        assert_strictly_sorted(&aba);
        assert_eq!(aba.len(), 2);
    }

    #[test]
    fn test_union_of_mixed_services() {
        let scopes = Registry::global()
            .scopes_for_services(&ids(&["contacts", "gmail", "tasks", "people", "contacts"]))
            .unwrap();

        for want in [
            "https://mail.google.com/",
            "https://www.googleapis.com/auth/contacts",
            "https://www.googleapis.com/auth/tasks",
            "profile",
        ] {
            assert!(scopes.iter().any(|s| s == want), "missing {}", want);
        }
        assert_strictly_sorted(&scopes);
        assert_eq!(scopes.len(), 7);
    }

    #[test]
    fn test_empty_input_resolves_to_nothing() {
        assert!(Registry::global().scopes_for_services(&[]).unwrap().is_empty());
        assert_eq!(
            Registry::global().scopes_for_manage(&[]).unwrap(),
            vec![
                "email".to_string(),
                "https://www.googleapis.com/auth/userinfo.email".to_string(),
                "openid".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_service_short_circuits() {
        let mut services = ids(&["gmail"]);
        services.push(ServiceIdentifier::from_static("nope"));
        services.extend(ids(&["drive"]));

        match Registry::global().scopes_for_services(&services) {
            Err(ScopeError::UnknownService { input, .. }) => assert_eq!(input, "nope"),
            other => panic!("expected UnknownService, got {:?}", other),
        }
        assert!(Registry::global().scopes_for_manage(&services).is_err());
    }

    #[test]
    fn test_manage_adds_identity_scopes() {
        let registry = Registry::global();
        let services = ids(&["gmail", "people"]);
        let base = registry.scopes_for_services(&services).unwrap();
        let manage = registry.scopes_for_manage(&services).unwrap();

        for scope in &base {
            assert!(manage.contains(scope));
        }
        for scope in IDENTITY_SCOPES {
            assert!(manage.iter().any(|s| s == scope));
        }
        assert_eq!(manage.len(), base.len() + IDENTITY_SCOPES.len());
        assert_strictly_sorted(&manage);
    }

    #[test]
    fn test_merge_drops_blanks_and_duplicates() {
        let merged = merge_scopes(&["b", "", "a"], &["a", "", "c"]);
        assert_eq!(merged, vec!["a", "b", "c"]);
    }
}
