//! Trending content on bungie.net.

use crate::endpoint::{EndpointTemplate, ParamMap};
use crate::enum_table::{EnumForm, EnumKey, EnumTable, normalize};
use crate::error::CoreError;
use crate::error::argument::require_non_empty;
use crate::request_client::RequestClient;
use crate::resources::fetch;

use std::sync::Arc;

use serde_json::Value;

pub const GET_TRENDING_CATEGORIES: EndpointTemplate =
    EndpointTemplate::new("getTrendingCategories", "/Trending/Categories/");
pub const GET_TRENDING_CATEGORY: EndpointTemplate = EndpointTemplate::new(
    "getTrendingCategory",
    "/Trending/Categories/{categoryId}/{pageNumber}/",
);
pub const GET_TRENDING_ENTRY_DETAIL: EndpointTemplate = EndpointTemplate::new(
    "getTrendingEntryDetail",
    "/Trending/Details/{trendingEntryType}/{identifier}/",
);

pub const ENDPOINTS: &[EndpointTemplate] = &[
    GET_TRENDING_CATEGORIES,
    GET_TRENDING_CATEGORY,
    GET_TRENDING_ENTRY_DETAIL,
];

pub const TRENDING_ENTRY_TYPE: EnumTable = EnumTable::new(
    "trending entry type",
    EnumForm::Code,
    &[
        ("NEWS", 0),
        ("DESTINYITEM", 1),
        ("DESTINYACTIVITY", 2),
        ("DESTINYRITUAL", 3),
        ("SUPPORTARTICLE", 4),
        ("CREATION", 5),
        ("STREAM", 6),
        ("UPDATE", 7),
        ("LINK", 8),
        ("FORUMTAG", 9),
        ("CONTAINER", 10),
        ("RELEASE", 11),
    ],
);

#[derive(Clone)]
pub struct Trending {
    client: Arc<RequestClient>,
}

impl Trending {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self { client }
    }

    pub async fn get_categories(&self) -> Result<Value, CoreError> {
        fetch(&self.client, &GET_TRENDING_CATEGORIES, &ParamMap::new(), None, None).await
    }

    /// One page of a trending category.
    pub async fn get_category(&self, category_id: &str, page_number: u32) -> Result<Value, CoreError> {
        require_non_empty("category_id", category_id)?;
        let path = ParamMap::new()
            .with("categoryId", category_id)
            .with("pageNumber", page_number);
        fetch(&self.client, &GET_TRENDING_CATEGORY, &path, None, None).await
    }

    pub async fn get_entry_detail<'a>(
        &self,
        entry_type: impl Into<EnumKey<'a>>,
        identifier: &str,
    ) -> Result<Value, CoreError> {
        let entry_type = normalize(entry_type, &TRENDING_ENTRY_TYPE)?;
        require_non_empty("identifier", identifier)?;
        let path = ParamMap::new()
            .with("trendingEntryType", entry_type)
            .with("identifier", identifier);
        fetch(&self.client, &GET_TRENDING_ENTRY_DETAIL, &path, None, None).await
    }
}
