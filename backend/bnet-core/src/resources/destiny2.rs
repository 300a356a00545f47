//! Destiny 2 manifest, players, profiles and activity reports.

use crate::endpoint::{EndpointTemplate, ParamMap};
use crate::enum_table::{EnumForm, EnumKey, EnumTable, join, normalize, resolve_many};
use crate::error::argument::{require_non_empty, require_number_like};
use crate::error::{ArgumentError, CoreError};
use crate::request_client::RequestClient;
use crate::resources::fetch;
use crate::resources::user::BUNGIE_MEMBERSHIP_TYPE;

use models::OAuthToken;

use std::sync::Arc;

use serde_json::Value;

pub const GET_DESTINY_MANIFEST: EndpointTemplate =
    EndpointTemplate::new("getDestinyManifest", "/Destiny2/Manifest/");
pub const GET_DESTINY_ENTITY_DEFINITION: EndpointTemplate = EndpointTemplate::new(
    "getDestinyEntityDefinition",
    "/Destiny2/Manifest/{entityType}/{hashIdentifier}/",
);
pub const SEARCH_DESTINY_PLAYER: EndpointTemplate = EndpointTemplate::new(
    "searchDestinyPlayer",
    "/Destiny2/SearchDestinyPlayer/{membershipType}/{displayName}/",
);
pub const GET_PROFILE: EndpointTemplate = EndpointTemplate::new(
    "getProfile",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/",
);
pub const GET_CHARACTER: EndpointTemplate = EndpointTemplate::new(
    "getCharacter",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/Character/{characterId}/",
);
pub const GET_POST_GAME_CARNAGE_REPORT: EndpointTemplate = EndpointTemplate::new(
    "getPostGameCarnageReport",
    "/Destiny2/Stats/PostGameCarnageReport/{activityId}/",
);

pub const ENDPOINTS: &[EndpointTemplate] = &[
    GET_DESTINY_MANIFEST,
    GET_DESTINY_ENTITY_DEFINITION,
    SEARCH_DESTINY_PLAYER,
    GET_PROFILE,
    GET_CHARACTER,
    GET_POST_GAME_CARNAGE_REPORT,
];

/// Profile and character components; sent by name in the `components` query.
pub const DESTINY_COMPONENT_TYPE: EnumTable = EnumTable::new(
    "destiny component type",
    EnumForm::Name,
    &[
        ("NONE", 0),
        ("PROFILES", 100),
        ("VENDORRECEIPTS", 101),
        ("PROFILEINVENTORIES", 102),
        ("PROFILECURRENCIES", 103),
        ("PROFILEPROGRESSION", 104),
        ("CHARACTERS", 200),
        ("CHARACTERINVENTORIES", 201),
        ("CHARACTERPROGRESSIONS", 202),
        ("CHARACTERRENDERDATA", 203),
        ("CHARACTERACTIVITIES", 204),
        ("CHARACTEREQUIPMENT", 205),
        ("ITEMINSTANCES", 300),
        ("ITEMOBJECTIVES", 301),
        ("ITEMPERKS", 302),
        ("ITEMRENDERDATA", 303),
        ("ITEMSTATS", 304),
        ("ITEMSOCKETS", 305),
        ("ITEMTALENTGRIDS", 306),
        ("ITEMCOMMONDATA", 307),
        ("ITEMPLUGSTATES", 308),
        ("VENDORS", 400),
        ("VENDORCATEGORIES", 401),
        ("VENDORSALES", 402),
        ("KIOSKS", 500),
        ("CURRENCYLOOKUPS", 600),
        ("PRESENTATIONNODES", 700),
        ("COLLECTIBLES", 800),
        ("RECORDS", 900),
    ],
);

#[derive(Clone)]
pub struct Destiny2 {
    client: Arc<RequestClient>,
}

impl Destiny2 {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self { client }
    }

    pub async fn get_manifest(&self) -> Result<Value, CoreError> {
        fetch(&self.client, &GET_DESTINY_MANIFEST, &ParamMap::new(), None, None).await
    }

    /// Static definition of one entity, e.g. `DestinyInventoryItemDefinition`.
    pub async fn get_entity_definition(
        &self,
        entity_type: &str,
        hash_identifier: &str,
    ) -> Result<Value, CoreError> {
        require_non_empty("entity_type", entity_type)?;
        require_number_like("hash_identifier", hash_identifier)?;
        let path = ParamMap::new()
            .with("entityType", entity_type.trim())
            .with("hashIdentifier", hash_identifier.trim());
        fetch(&self.client, &GET_DESTINY_ENTITY_DEFINITION, &path, None, None).await
    }

    pub async fn search_player<'a>(
        &self,
        membership_type: impl Into<EnumKey<'a>>,
        display_name: &str,
    ) -> Result<Value, CoreError> {
        let membership_type = normalize(membership_type, &BUNGIE_MEMBERSHIP_TYPE)?;
        require_non_empty("display_name", display_name)?;
        let path = ParamMap::new()
            .with("membershipType", membership_type)
            .with("displayName", display_name);
        fetch(&self.client, &SEARCH_DESTINY_PLAYER, &path, None, None).await
    }

    /// Some components are only returned when called with the owner's token.
    pub async fn get_profile<'a, K, I>(
        &self,
        membership_type: impl Into<EnumKey<'a>>,
        destiny_membership_id: &str,
        components: I,
        token: Option<&OAuthToken>,
    ) -> Result<Value, CoreError>
    where
        K: Into<EnumKey<'a>>,
        I: IntoIterator<Item = K>,
    {
        let membership_type = normalize(membership_type, &BUNGIE_MEMBERSHIP_TYPE)?;
        require_number_like("destiny_membership_id", destiny_membership_id)?;
        let query = components_query(components)?;

        let path = ParamMap::new()
            .with("membershipType", membership_type)
            .with("destinyMembershipId", destiny_membership_id.trim());
        fetch(&self.client, &GET_PROFILE, &path, Some(&query), token).await
    }

    pub async fn get_character<'a, K, I>(
        &self,
        membership_type: impl Into<EnumKey<'a>>,
        destiny_membership_id: &str,
        character_id: &str,
        components: I,
        token: Option<&OAuthToken>,
    ) -> Result<Value, CoreError>
    where
        K: Into<EnumKey<'a>>,
        I: IntoIterator<Item = K>,
    {
        let membership_type = normalize(membership_type, &BUNGIE_MEMBERSHIP_TYPE)?;
        require_number_like("destiny_membership_id", destiny_membership_id)?;
        require_number_like("character_id", character_id)?;
        let query = components_query(components)?;

        let path = ParamMap::new()
            .with("membershipType", membership_type)
            .with("destinyMembershipId", destiny_membership_id.trim())
            .with("characterId", character_id.trim());
        fetch(&self.client, &GET_CHARACTER, &path, Some(&query), token).await
    }

    pub async fn get_post_game_carnage_report(&self, activity_id: &str) -> Result<Value, CoreError> {
        require_number_like("activity_id", activity_id)?;
        let path = ParamMap::new().with("activityId", activity_id.trim());
        fetch(&self.client, &GET_POST_GAME_CARNAGE_REPORT, &path, None, None).await
    }
}

fn components_query<'a, K, I>(components: I) -> Result<ParamMap, CoreError>
where
    K: Into<EnumKey<'a>>,
    I: IntoIterator<Item = K>,
{
    let components = resolve_many(components, &DESTINY_COMPONENT_TYPE)?;
    if components.is_empty() {
        return Err(ArgumentError::type_mismatch(
            "components",
            "at least one destiny component type",
            "an empty list",
        )
        .into());
    }
    Ok(ParamMap::new().with("components", join(&components)))
}
