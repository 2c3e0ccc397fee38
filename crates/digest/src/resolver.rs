use crate::client::{DrupalClient, DrupalClientError};
use crate::models::ProjectNode;
use crate::query::project_lookup_query;

/// A resolved project: remote node id, display title, canonical page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub nid: u64,
    pub title: String,
    pub url: String,
}

/// Transport or payload failure while looking up the project. Never used for
/// a clean zero-match — that is `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("project lookup failed: {0}")]
    Client(#[from] DrupalClientError),
}

/// Stage 1: resolve a machine name to a project record.
///
/// Returns `Ok(None)` when the filter matches nothing. If the remote returns
/// more than one record, the first one wins (the api-d7 filter is trusted,
/// not disambiguated).
pub async fn resolve_project(
    client: &DrupalClient,
    machine_name: &str,
) -> Result<Option<ProjectRecord>, ResolutionError> {
    let query = project_lookup_query(machine_name);
    let nodes = client.fetch_nodes::<ProjectNode>(&query).await?;

    let record = nodes.list.into_iter().next().map(|node| ProjectRecord {
        nid: node.nid,
        title: node.title,
        url: node.url,
    });

    match &record {
        Some(project) => {
            tracing::debug!(machine_name, nid = project.nid, "resolved project");
        }
        None => {
            tracing::info!(machine_name, "no project matches machine name");
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DrupalClientConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> DrupalClient {
        DrupalClient::new(DrupalClientConfig {
            base_url: base_url.to_string(),
            max_retries: 0,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn resolves_first_match() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "list": [
                {"nid": "42", "title": "CTools", "url": "https://www.drupal.org/project/ctools"},
                {"nid": "43", "title": "CTools fork", "url": "https://www.drupal.org/project/ctools2"}
            ]
        });

        Mock::given(method("GET"))
            .and(path("/node.json"))
            .and(query_param("field_project_machine_name", "ctools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let record = resolve_project(&test_client(&server.uri()), "ctools")
            .await
            .unwrap()
            .expect("should match");
        assert_eq!(record.nid, 42);
        assert_eq!(record.title, "CTools");
        assert_eq!(record.url, "https://www.drupal.org/project/ctools");
    }

    #[tokio::test]
    async fn empty_list_is_a_clean_miss() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/node.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"list": []})))
            .mount(&server)
            .await;

        let record = resolve_project(&test_client(&server.uri()), "no_such_project")
            .await
            .unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn empty_machine_name_still_queries() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/node.json"))
            .and(query_param("field_project_machine_name", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"list": []})))
            .expect(1)
            .mount(&server)
            .await;

        let record = resolve_project(&test_client(&server.uri()), "")
            .await
            .unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_not_a_miss() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/node.json"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = resolve_project(&test_client(&server.uri()), "ctools")
            .await
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Client(_)));
    }
}
