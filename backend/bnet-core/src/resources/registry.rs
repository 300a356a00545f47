//! Static name -> factory table of resource modules.

use crate::error::RegistryError;
use crate::request_client::RequestClient;
use crate::resources::{Destiny2, Forum, Trending, User};

use std::sync::Arc;

pub type ModuleFactory = fn(Arc<RequestClient>) -> ResourceModule;

pub static MODULE_REGISTRY: &[(&str, ModuleFactory)] = &[
    ("User", build_user),
    ("Trending", build_trending),
    ("Forum", build_forum),
    ("Destiny2", build_destiny2),
];

#[derive(Clone)]
pub enum ResourceModule {
    User(User),
    Trending(Trending),
    Forum(Forum),
    Destiny2(Destiny2),
}

impl ResourceModule {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceModule::User(_) => "User",
            ResourceModule::Trending(_) => "Trending",
            ResourceModule::Forum(_) => "Forum",
            ResourceModule::Destiny2(_) => "Destiny2",
        }
    }
}

pub fn module_names() -> Vec<&'static str> {
    MODULE_REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Build a module by its registered name, ignoring case.
#[track_caller]
pub fn build_module(name: &str, client: Arc<RequestClient>) -> Result<ResourceModule, RegistryError> {
    MODULE_REGISTRY
        .iter()
        .find(|(registered, _)| registered.eq_ignore_ascii_case(name.trim()))
        .map(|(_, factory)| factory(client))
        .ok_or_else(|| RegistryError::unknown_module(name, module_names()))
}

fn build_user(client: Arc<RequestClient>) -> ResourceModule {
    ResourceModule::User(User::new(client))
}

fn build_trending(client: Arc<RequestClient>) -> ResourceModule {
    ResourceModule::Trending(Trending::new(client))
}

fn build_forum(client: Arc<RequestClient>) -> ResourceModule {
    ResourceModule::Forum(Forum::new(client))
}

fn build_destiny2(client: Arc<RequestClient>) -> ResourceModule {
    ResourceModule::Destiny2(Destiny2::new(client))
}
