pub mod client;
pub mod fetcher;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod resolver;
pub mod view;

pub use client::{DrupalClient, DrupalClientConfig, DrupalClientError};
pub use fetcher::{fetch_digest, DigestError, IssueDigest, IssueSummary};
pub use pipeline::{run, PipelineError};
pub use resolver::{resolve_project, ProjectRecord, ResolutionError};
pub use view::DigestViewModel;
