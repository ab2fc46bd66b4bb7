//! API client wiring for the UI
//!
//! The clients are constructed once at launch and handed to components
//! through Dioxus context; no component reaches for a module-level
//! singleton. The credential provider is injected here as well, so the
//! transport has no knowledge of where tokens live.

use std::sync::Arc;

use condo_api::{
    ApiClient, ContractsClient, EnvCredentials, PermissionsClient, RolesClient, SharedCredentials,
    VisitorsClient,
};
use condo_core::Config;

/// The per-entity API clients shared with every page.
#[derive(Clone)]
pub struct ApiServices {
    pub contracts: Arc<ContractsClient>,
    pub roles: Arc<RolesClient>,
    pub visitors: Arc<VisitorsClient>,
    pub permissions: Arc<PermissionsClient>,
}

impl ApiServices {
    /// Build all clients over one shared transport.
    pub fn new(config: &Config, credentials: SharedCredentials) -> Self {
        let http = Arc::new(ApiClient::new(config.api_base_url.clone(), credentials));
        tracing::info!("API clients configured for {}", http.base_url());

        Self {
            contracts: Arc::new(ContractsClient::new(http.clone())),
            roles: Arc::new(RolesClient::new(http.clone())),
            visitors: Arc::new(VisitorsClient::new(http.clone())),
            permissions: Arc::new(PermissionsClient::new(http)),
        }
    }

    /// Build clients from environment configuration with the default
    /// environment-variable credential provider.
    pub fn from_env() -> Self {
        Self::new(&Config::from_env(), Arc::new(EnvCredentials::default()))
    }
}
