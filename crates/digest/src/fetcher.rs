use crate::client::{DrupalClient, DrupalClientError};
use crate::format::format_changed;
use crate::models::IssueNode;
use crate::query::issue_digest_query;

/// One display-ready issue line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub title: String,
    pub url: String,
    pub last_changed_at: i64,
    /// `dd.mm.yyyy HH:MM`, UTC, zero-padded.
    pub last_changed_display: String,
}

/// The bounded digest. Items arrive from the remote already sorted by
/// `changed` descending; that order is trusted and preserved, never
/// re-sorted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDigest {
    pub items: Vec<IssueSummary>,
}

/// Transport or payload failure while fetching issues. A successful empty
/// result is not an error — it renders an empty list.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("issue digest fetch failed: {0}")]
    Client(#[from] DrupalClientError),
}

/// Stage 2: fetch the open-issue digest for a resolved project.
///
/// Preconditions: `nid` came out of a successful resolution and
/// `max_items >= 1`.
pub async fn fetch_digest(
    client: &DrupalClient,
    nid: u64,
    max_items: u32,
) -> Result<IssueDigest, DigestError> {
    let query = issue_digest_query(nid, max_items);
    let nodes = client.fetch_nodes::<IssueNode>(&query).await?;

    let mut items: Vec<IssueSummary> = nodes.list.into_iter().map(summarize).collect();
    // The limit parameter should already cap the page; truncate in case the
    // remote over-delivers.
    items.truncate(max_items as usize);

    tracing::debug!(nid, count = items.len(), "fetched issue digest");

    Ok(IssueDigest { items })
}

fn summarize(node: IssueNode) -> IssueSummary {
    let last_changed_display = format_changed(node.changed);
    IssueSummary {
        title: node.title,
        url: node.url,
        last_changed_at: node.changed,
        last_changed_display,
    }
}
