use crate::fetcher::{IssueDigest, IssueSummary};
use crate::resolver::ProjectRecord;

/// Render-ready result of a pipeline run. The host's templating layer turns
/// this into markup; no I/O or markup happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestViewModel {
    Found {
        project_title: String,
        project_url: String,
        max_items: u32,
        items: Vec<IssueSummary>,
    },
    NotFound {
        /// The input machine name, echoed verbatim (possibly empty).
        machine_name: String,
    },
}

impl DigestViewModel {
    pub fn not_found(machine_name: &str) -> Self {
        Self::NotFound {
            machine_name: machine_name.to_string(),
        }
    }
}

/// Combine a resolved project and its digest into the view model. Pure;
/// callers only invoke this once both remote outcomes are known.
pub fn render(project: ProjectRecord, digest: IssueDigest, max_items: u32) -> DigestViewModel {
    DigestViewModel::Found {
        project_title: project.title,
        project_url: project.url,
        max_items,
        items: digest.items,
    }
}
