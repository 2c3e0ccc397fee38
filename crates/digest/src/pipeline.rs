use crate::client::DrupalClient;
use crate::fetcher::{fetch_digest, DigestError};
use crate::resolver::{resolve_project, ResolutionError};
use crate::view::{render, DigestViewModel};

/// A pipeline failure, tagged with the stage that failed so callers can
/// tell "lookup unreachable" from "issues unreachable".
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Digest(#[from] DigestError),
}

/// Run the full pipeline: resolve, then fetch, then render.
///
/// The digest fetch never runs unless resolution produced a record; a clean
/// zero-match short-circuits to `NotFound` after exactly one outbound call.
/// `max_items` must already be normalized (>= 1).
pub async fn run(
    client: &DrupalClient,
    machine_name: &str,
    max_items: u32,
) -> Result<DigestViewModel, PipelineError> {
    let Some(project) = resolve_project(client, machine_name).await? else {
        return Ok(DigestViewModel::not_found(machine_name));
    };

    let digest = fetch_digest(client, project.nid, max_items).await?;

    Ok(render(project, digest, max_items))
}
