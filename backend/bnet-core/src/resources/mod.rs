//! Resource modules built on the request core.
//!
//! Each module is a thin table of endpoint templates and enum tables plus
//! typed methods. Modules never own a client: they share the one
//! [`RequestClient`] they were built with.

pub mod destiny2;
pub mod forum;
pub mod registry;
pub mod trending;
pub mod user;

pub use destiny2::Destiny2;
pub use forum::Forum;
pub use registry::{MODULE_REGISTRY, ResourceModule, build_module, module_names};
pub use trending::Trending;
pub use user::User;

use crate::config::PlatformConfig;
use crate::endpoint::{EndpointTemplate, ParamMap};
use crate::error::CoreError;
use crate::oauth::OAuthManager;
use crate::request_client::RequestClient;

use models::{Credentials, OAuthToken};

use std::sync::Arc;

use log::debug;
use serde_json::Value;

/// Render `endpoint` against the client's root and GET it.
pub(crate) async fn fetch(
    client: &RequestClient,
    endpoint: &EndpointTemplate,
    path_params: &ParamMap,
    query_params: Option<&ParamMap>,
    token: Option<&OAuthToken>,
) -> Result<Value, CoreError> {
    let uri = endpoint.render(client.root_path(), path_params, query_params)?;
    debug!("{} -> {uri}", endpoint.name);
    Ok(client.get(&uri, token).await?)
}

/// Entry point: one request client, the OAuth manager and the selected modules.
pub struct BnetApi {
    client: Arc<RequestClient>,
    oauth: OAuthManager,
    modules: Vec<ResourceModule>,
}

impl BnetApi {
    /// Build every registered module.
    pub fn new(
        credentials: impl Into<Arc<Credentials>>,
        config: PlatformConfig,
    ) -> Result<Self, CoreError> {
        Self::with_modules(credentials, config, &module_names())
    }

    /// Build only the named modules. Unknown names fail before anything is built.
    pub fn with_modules(
        credentials: impl Into<Arc<Credentials>>,
        config: PlatformConfig,
        names: &[&str],
    ) -> Result<Self, CoreError> {
        let client = Arc::new(RequestClient::new(credentials.into(), config)?);
        Self::from_client(client, names)
    }

    /// Build on an existing client, e.g. one with a custom [`reqwest::Client`].
    pub fn from_client(client: Arc<RequestClient>, names: &[&str]) -> Result<Self, CoreError> {
        let modules = names
            .iter()
            .map(|name| build_module(name, Arc::clone(&client)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            oauth: OAuthManager::new(Arc::clone(&client)),
            client,
            modules,
        })
    }

    pub fn client(&self) -> &Arc<RequestClient> {
        &self.client
    }

    pub fn oauth(&self) -> &OAuthManager {
        &self.oauth
    }

    pub fn modules(&self) -> &[ResourceModule] {
        &self.modules
    }

    pub fn user(&self) -> Option<&User> {
        self.modules.iter().find_map(|module| match module {
            ResourceModule::User(user) => Some(user),
            _ => None,
        })
    }

    pub fn trending(&self) -> Option<&Trending> {
        self.modules.iter().find_map(|module| match module {
            ResourceModule::Trending(trending) => Some(trending),
            _ => None,
        })
    }

    pub fn forum(&self) -> Option<&Forum> {
        self.modules.iter().find_map(|module| match module {
            ResourceModule::Forum(forum) => Some(forum),
            _ => None,
        })
    }

    pub fn destiny2(&self) -> Option<&Destiny2> {
        self.modules.iter().find_map(|module| match module {
            ResourceModule::Destiny2(destiny2) => Some(destiny2),
            _ => None,
        })
    }
}
