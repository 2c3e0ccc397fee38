/// Query for the project lookup: a single filtered read against the node
/// collection, no explicit limit. Only the first match is consulted.
pub fn project_lookup_query(machine_name: &str) -> Vec<(&'static str, String)> {
    vec![("field_project_machine_name", machine_name.to_string())]
}

/// Query for the issue digest: project issues belonging to `nid`, open
/// status only, capped at `max_items`, most recently changed first.
///
/// Sorting by comment count would be the better "most active" signal, but
/// the remote rejects it with a server error. Recency is the permanent
/// substitute, not a workaround to revisit.
pub fn issue_digest_query(nid: u64, max_items: u32) -> Vec<(&'static str, String)> {
    vec![
        ("type", "project_issue".to_string()),
        ("field_project", nid.to_string()),
        ("limit", max_items.to_string()),
        ("sort", "changed".to_string()),
        ("direction", "DESC".to_string()),
        // status 1 = open/active
        ("field_issue_status", "1".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_lookup_filters_by_machine_name() {
        let query = project_lookup_query("ctools");
        assert_eq!(
            query,
            vec![("field_project_machine_name", "ctools".to_string())]
        );
    }

    #[test]
    fn project_lookup_passes_empty_name_through() {
        let query = project_lookup_query("");
        assert_eq!(query, vec![("field_project_machine_name", String::new())]);
    }

    #[test]
    fn issue_digest_query_has_fixed_semantics() {
        let query = issue_digest_query(110238, 20);
        assert_eq!(
            query,
            vec![
                ("type", "project_issue".to_string()),
                ("field_project", "110238".to_string()),
                ("limit", "20".to_string()),
                ("sort", "changed".to_string()),
                ("direction", "DESC".to_string()),
                ("field_issue_status", "1".to_string()),
            ]
        );
    }

    #[test]
    fn issue_digest_query_carries_the_cap() {
        let query = issue_digest_query(1, 3);
        assert!(query.contains(&("limit", "3".to_string())));
    }
}
