//! Forum topics and polls.

use crate::endpoint::{EndpointTemplate, ParamMap};
use crate::enum_table::{EnumForm, EnumKey, EnumTable, normalize, resolve};
use crate::error::argument::require_number_like;
use crate::error::{CoreError, EnumError};
use crate::request_client::RequestClient;
use crate::resources::fetch;

use std::sync::Arc;

use serde_json::Value;

pub const GET_TOPICS_PAGED: EndpointTemplate = EndpointTemplate::new(
    "getTopicsPaged",
    "/Forum/GetTopicsPaged/{page}/{pageSize}/{group}/{sort}/{quickDate}/{categoryFilter}/",
);
pub const GET_CORE_TOPICS_PAGED: EndpointTemplate = EndpointTemplate::new(
    "getCoreTopicsPaged",
    "/Forum/GetCoreTopicsPaged/{page}/{sort}/{quickDate}/{categoryFilter}/",
);
pub const GET_POLL: EndpointTemplate = EndpointTemplate::new("getPoll", "/Forum/Poll/{topicId}/");

pub const ENDPOINTS: &[EndpointTemplate] = &[GET_TOPICS_PAGED, GET_CORE_TOPICS_PAGED, GET_POLL];

pub const QUICK_DATE: EnumTable = EnumTable::new(
    "quick date",
    EnumForm::Code,
    &[
        ("ALL", 0),
        ("LASTYEAR", 1),
        ("LASTMONTH", 2),
        ("LASTWEEK", 3),
        ("LASTDAY", 4),
    ],
);

/// Bit flags; several may be combined in one request.
pub const CATEGORY_FILTER: EnumTable = EnumTable::new(
    "category filter",
    EnumForm::Code,
    &[
        ("NONE", 0),
        ("LINKS", 1),
        ("QUESTIONS", 2),
        ("ANSWEREDQUESTIONS", 4),
        ("MEDIA", 8),
        ("TEXTONLY", 16),
        ("ANNOUNCEMENT", 32),
        ("BUNGIEOFFICIAL", 64),
        ("POLLS", 128),
    ],
);

pub const TOPICS_SORT: EnumTable = EnumTable::new(
    "sortable topic",
    EnumForm::Code,
    &[
        ("DEFAULT", 0),
        ("LASTREPLIED", 1),
        ("MOSTREPLIED", 2),
        ("POPULARITY", 3),
        ("CONTROVERSIALITY", 4),
        ("LIKED", 5),
        ("HIGHESTRATED", 6),
        ("MOSTUPVOTED", 7),
    ],
);

/// Parameters of a paged topic listing.
#[derive(Debug, Clone)]
pub struct TopicsQuery<'a> {
    pub page: u32,
    pub page_size: u32,
    /// Group id; `0` lists the public forums.
    pub group: i64,
    pub sort: EnumKey<'a>,
    pub quick_date: EnumKey<'a>,
    pub category_filter: Vec<EnumKey<'a>>,
    /// Comma-separated tags, e.g. `#raids,#pvp`.
    pub tagstring: Option<&'a str>,
    pub locales: Option<&'a str>,
}

impl Default for TopicsQuery<'_> {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 25,
            group: 0,
            sort: EnumKey::Code(0),
            quick_date: EnumKey::Code(0),
            category_filter: Vec::new(),
            tagstring: None,
            locales: None,
        }
    }
}

#[derive(Clone)]
pub struct Forum {
    client: Arc<RequestClient>,
}

impl Forum {
    pub fn new(client: Arc<RequestClient>) -> Self {
        Self { client }
    }

    pub async fn get_topics_paged(&self, query: TopicsQuery<'_>) -> Result<Value, CoreError> {
        let path = ParamMap::new()
            .with("page", query.page)
            .with("pageSize", query.page_size)
            .with("group", query.group)
            .with("sort", normalize(query.sort, &TOPICS_SORT)?)
            .with("quickDate", normalize(query.quick_date, &QUICK_DATE)?)
            .with("categoryFilter", category_flags(query.category_filter)?);
        let params = ParamMap::new()
            .with_opt("tagstring", query.tagstring)
            .with_opt("locales", query.locales);

        fetch(&self.client, &GET_TOPICS_PAGED, &path, Some(&params), None).await
    }

    pub async fn get_core_topics_paged<'a>(
        &self,
        page: u32,
        sort: impl Into<EnumKey<'a>>,
        quick_date: impl Into<EnumKey<'a>>,
        category_filter: Vec<EnumKey<'a>>,
        locales: Option<&str>,
    ) -> Result<Value, CoreError> {
        let path = ParamMap::new()
            .with("page", page)
            .with("sort", normalize(sort, &TOPICS_SORT)?)
            .with("quickDate", normalize(quick_date, &QUICK_DATE)?)
            .with("categoryFilter", category_flags(category_filter)?);
        let params = ParamMap::new().with_opt("locales", locales);

        fetch(&self.client, &GET_CORE_TOPICS_PAGED, &path, Some(&params), None).await
    }

    pub async fn get_poll(&self, topic_id: &str) -> Result<Value, CoreError> {
        require_number_like("topic_id", topic_id)?;
        let path = ParamMap::new().with("topicId", topic_id.trim());
        fetch(&self.client, &GET_POLL, &path, None, None).await
    }
}

/// OR the filter flags together. No flags means `NONE`.
pub fn category_flags(keys: Vec<EnumKey<'_>>) -> Result<i64, EnumError> {
    keys.into_iter().try_fold(0, |flags, key| {
        resolve(key, &CATEGORY_FILTER).map(|member| flags | member.code)
    })
}
