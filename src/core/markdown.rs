use crate::domain::model::ServiceView;
use std::fmt::Write;

const HEADER: &str = "| Service | User | APIs | Scopes | Notes |\n| --- | --- | --- | --- | --- |\n";

/// Renders `views` as a markdown table, one row per view in the given order.
///
/// An empty slice renders as an empty string, header included.
pub fn services_markdown(views: &[ServiceView]) -> String {
    if views.is_empty() {
        return String::new();
    }

    let mut out = String::from(HEADER);
    for view in views {
        let user = if view.available_to_individual_accounts {
            "yes"
        } else {
            "no"
        };
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            view.service,
            user,
            view.dependent_apis.join(", "),
            markdown_scopes(&view.scopes),
            view.note
        );
    }
    out
}

fn markdown_scopes(scopes: &[String]) -> String {
    scopes
        .iter()
        .map(|scope| format!("`{}`", scope))
        .collect::<Vec<_>>()
        .join("<br>")
}
