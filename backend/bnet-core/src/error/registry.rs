use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Unknown Module Error: '{name}' is not registered (available: {}) {location}", .available.join(", "))]
    UnknownModule {
        name: String,
        available: Vec<&'static str>,
        location: ErrorLocation,
    },
}

impl RegistryError {
    #[track_caller]
    pub fn unknown_module(name: impl Into<String>, available: Vec<&'static str>) -> Self {
        RegistryError::UnknownModule {
            name: name.into(),
            available,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
