use scope_registry::{
    all_services, parse_service, scopes_for, scopes_for_manage, scopes_for_services,
    services_info, services_markdown, user_service_csv, user_services, ScopeError,
    ServiceIdentifier, IDENTITY_SCOPES,
};
use std::collections::HashSet;

fn ids(names: &[&str]) -> Vec<ServiceIdentifier> {
    names.iter().map(|n| parse_service(n).unwrap()).collect()
}

#[test]
fn test_every_listed_service_parses_to_itself() {
    for service in all_services() {
        assert_eq!(parse_service(service.as_str()).unwrap(), service);
        assert_eq!(service.as_str().parse::<ServiceIdentifier>().unwrap(), service);
    }
    assert_eq!(parse_service(" GMAIL ").unwrap(), parse_service("gmail").unwrap());
}

#[test]
fn test_unknown_service_is_rejected() {
    match parse_service("nope") {
        Err(ScopeError::UnknownService { input, expected }) => {
            assert_eq!(input, "nope");
            for service in all_services() {
                assert!(expected.split('|').any(|e| e == service.as_str()));
            }
        }
        other => panic!("expected UnknownService, got {:?}", other),
    }
}

#[test]
fn test_user_services_subset_in_order() {
    let all = all_services();
    let user = user_services();

    let mut cursor = all.iter();
    for service in &user {
        assert!(cursor.any(|s| s == service), "{} out of order", service);
    }
    assert!(user.len() < all.len());
    assert!(!user.iter().any(|s| s.as_str() == "keep"));

    let csv: Vec<String> = user.iter().map(|s| s.to_string()).collect();
    assert_eq!(user_service_csv(), csv.join(","));
}

#[test]
fn test_docs_scopes() {
    let scopes: HashSet<String> = scopes_for(&parse_service("docs").unwrap())
        .unwrap()
        .into_iter()
        .collect();
    assert!(scopes.contains("https://www.googleapis.com/auth/drive"));
    assert!(scopes.contains("https://www.googleapis.com/auth/documents"));
}

#[test]
fn test_union_scenario() {
    let scopes =
        scopes_for_services(&ids(&["contacts", "gmail", "tasks", "people", "contacts"])).unwrap();

    assert!(scopes.contains(&"https://mail.google.com/".to_string()));
    assert!(scopes.contains(&"https://www.googleapis.com/auth/contacts".to_string()));
    assert!(scopes.contains(&"https://www.googleapis.com/auth/tasks".to_string()));
    assert!(scopes.contains(&"profile".to_string()));

    let unique: HashSet<&String> = scopes.iter().collect();
    assert_eq!(unique.len(), scopes.len());
    let mut sorted = scopes.clone();
    sorted.sort();
    assert_eq!(sorted, scopes);
}

#[test]
fn test_manage_is_superset() {
    let services = ids(&["calendar", "sheets", "calendar"]);
    let base = scopes_for_services(&services).unwrap();
    let manage = scopes_for_manage(&services).unwrap();

    let base_set: HashSet<&str> = base.iter().map(String::as_str).collect();
    let manage_set: HashSet<&str> = manage.iter().map(String::as_str).collect();
    let extra: HashSet<&str> = manage_set.difference(&base_set).copied().collect();

    assert!(manage_set.is_superset(&base_set));
    assert_eq!(extra, IDENTITY_SCOPES.iter().copied().collect::<HashSet<&str>>());
    assert_eq!(manage_set.len(), manage.len());
}

#[test]
fn test_services_json_shape() {
    let infos = services_info();
    let value = serde_json::to_value(&infos).unwrap();
    let gmail = &value[0];

    assert_eq!(gmail["service"], "gmail");
    assert_eq!(gmail["user"], true);
    assert_eq!(gmail["apis"][0], "Gmail API");
    assert!(gmail.get("note").is_none());
    assert_eq!(value[9]["note"], "Workspace only; service account");
}

#[test]
fn test_markdown_rows() {
    assert!(services_markdown(&[]).is_empty());

    let infos = services_info();
    let markdown = services_markdown(&infos[..3]);
    assert_eq!(markdown.lines().count(), 5);
    assert!(markdown.starts_with("| Service |"));
}
