//! Bungie.net accounts and memberships.

use crate::endpoint::{EndpointTemplate, ParamMap};
use crate::enum_table::{EnumForm, EnumKey, EnumTable, normalize};
use crate::error::argument::{require_non_empty, require_number_like};
use crate::error::{ArgumentError, CoreError};
use crate::request_client::RequestClient;
use crate::resources::fetch;

use models::OAuthToken;

use std::sync::Arc;

use serde_json::Value;

pub const GET_BUNGIE_NET_USER_BY_ID: EndpointTemplate =
    EndpointTemplate::new("getBungieNetUserById", "/User/GetBungieNetUserById/{id}/");
pub const SEARCH_USERS: EndpointTemplate = EndpointTemplate::new("searchUsers", "/User/SearchUsers/");
pub const GET_AVAILABLE_THEMES: EndpointTemplate =
    EndpointTemplate::new("getAvailableThemes", "/User/GetAvailableThemes/");
pub const GET_MEMBERSHIPS_BY_ID: EndpointTemplate = EndpointTemplate::new(
    "getMembershipsById",
    "/User/GetMembershipsById/{membershipId}/{membershipType}/",
);
pub const GET_MEMBERSHIPS_FOR_CURRENT_USER: EndpointTemplate = EndpointTemplate::new(
    "getMembershipsForCurrentUser",
    "/User/GetMembershipsForCurrentUser/",
);
pub const GET_PARTNERSHIPS: EndpointTemplate =
    EndpointTemplate::new("getPartnerships", "/User/{membershipId}/Partnerships/");

pub const ENDPOINTS: &[EndpointTemplate] = &[
    GET_BUNGIE_NET_USER_BY_ID,
    SEARCH_USERS,
    GET_AVAILABLE_THEMES,
    GET_MEMBERSHIPS_BY_ID,
    GET_MEMBERSHIPS_FOR_CURRENT_USER,
    GET_PARTNERSHIPS,
];

/// Platforms an account can be linked to.
pub const BUNGIE_MEMBERSHIP_TYPE: EnumTable = EnumTable::new(
    "bungie membership type",
    EnumForm::Code,
    &[
        ("NONE", 0),
        ("TIGERXBOX", 1),
        ("TIGERPSN", 2),
        ("TIGERBLIZZARD", 4),
        ("TIGERDEMON", 10),
        ("BUNGIENEXT", 254),
        ("ALL", -1),
    ],
);

#[derive(Clone)]
pub struct User {
    client: Arc<RequestClient>,
}

impl User {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self { client }
    }

    pub async fn get_bungie_net_user_by_id(&self, id: &str) -> Result<Value, CoreError> {
        require_number_like("id", id)?;
        let path = ParamMap::new().with("id", id.trim());
        fetch(&self.client, &GET_BUNGIE_NET_USER_BY_ID, &path, None, None).await
    }

    pub async fn search_users(&self, search: &str) -> Result<Value, CoreError> {
        require_non_empty("search", search)?;
        let query = ParamMap::new().with("q", search);
        fetch(&self.client, &SEARCH_USERS, &ParamMap::new(), Some(&query), None).await
    }

    pub async fn get_available_themes(&self) -> Result<Value, CoreError> {
        fetch(&self.client, &GET_AVAILABLE_THEMES, &ParamMap::new(), None, None).await
    }

    pub async fn get_memberships_by_id<'a>(
        &self,
        membership_id: &str,
        membership_type: impl Into<EnumKey<'a>>,
    ) -> Result<Value, CoreError> {
        require_number_like("membership_id", membership_id)?;
        let membership_type = normalize(membership_type, &BUNGIE_MEMBERSHIP_TYPE)?;

        let path = ParamMap::new()
            .with("membershipId", membership_id.trim())
            .with("membershipType", membership_type);
        fetch(&self.client, &GET_MEMBERSHIPS_BY_ID, &path, None, None).await
    }

    /// Requires a user token; the endpoint rejects application-only calls.
    pub async fn get_memberships_for_current_user(
        &self,
        token: &OAuthToken,
    ) -> Result<Value, CoreError> {
        if !token.has_access_token() {
            return Err(ArgumentError::type_mismatch(
                "token",
                "an OAuth token with an access token",
                "empty access token",
            )
            .into());
        }
        fetch(
            &self.client,
            &GET_MEMBERSHIPS_FOR_CURRENT_USER,
            &ParamMap::new(),
            None,
            Some(token),
        )
        .await
    }

    pub async fn get_partnerships(&self, membership_id: &str) -> Result<Value, CoreError> {
        require_number_like("membership_id", membership_id)?;
        let path = ParamMap::new().with("membershipId", membership_id.trim());
        fetch(&self.client, &GET_PARTNERSHIPS, &path, None, None).await
    }
}
