mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;

pub use domain::{entities, use_cases};
pub use interfaces::repositories;
pub use infrastructure::{assets, utils};

use repositories::functions_api::FunctionsApi;
use use_cases::{
    deployments::DeploymentAssembler, projects::ProjectAssembler,
    workflows::WorkflowStatsAssembler,
};

/// Assemblers wired against the REST functions backend, the combination
/// the CLI renderer uses.
pub struct Dashboard {
    pub projects: ProjectAssembler<FunctionsApi>,
    pub deployments: DeploymentAssembler<FunctionsApi>,
    pub workflows: WorkflowStatsAssembler<FunctionsApi>,
    pub api: FunctionsApi,
}

impl Dashboard {
    pub fn new(config: &settings::AppConfig) -> Result<Self, errors::AppError> {
        let api = FunctionsApi::new(config)?;

        Ok(Dashboard {
            projects: ProjectAssembler::new(api.clone()),
            deployments: DeploymentAssembler::new(api.clone()),
            workflows: WorkflowStatsAssembler::new(api.clone()),
            api,
        })
    }
}
