pub mod deployment;
pub mod project;
pub mod social;
pub mod status;
pub mod workflow;

pub use deployment::{Deployment, DeploymentBadge};
pub use project::{Project, ProjectsPayload};
pub use social::{parse_social_payload, Platform, SocialLink, SocialPayload};
pub use status::{ProjectStatus, StatusesPayload};
pub use workflow::{Commit, FlatWorkflowLog, LogsRequest, LogsResponse, RepositoryStats, WorkflowLog};
