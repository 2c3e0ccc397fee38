use issuefeed_digest::DigestViewModel;

/// Render the view model as a plain-text listing: a headline plus one
/// numbered line per issue, or the not-found message echoing the input name.
pub fn format_view(view: &DigestViewModel) -> String {
    match view {
        DigestViewModel::Found {
            project_title,
            project_url,
            max_items,
            items,
        } => {
            let mut out = format!(
                "{max_items} most recently updated active issues for project \"{project_title}\" ({project_url})\n"
            );
            for (i, issue) in items.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {} ({}) - last changed: {}\n",
                    i + 1,
                    issue.title,
                    issue.url,
                    issue.last_changed_display,
                ));
            }
            out
        }
        DigestViewModel::NotFound { machine_name } => {
            format!("Sorry, no project found on drupal.org for machine name \"{machine_name}\".\n")
        }
    }
}
