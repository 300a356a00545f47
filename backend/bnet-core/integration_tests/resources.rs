use crate::helpers::{CLIENT_SECRET, client_for, config_for, credentials};

use bnet_core::error::{CoreError, RegistryError};
use bnet_core::resources::forum::TopicsQuery;
use bnet_core::resources::{BnetApi, Destiny2, Forum, User, module_names};
use bnet_core::{EnumKey, OAuthToken};

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "Response": {},
        "ErrorCode": 1,
        "ErrorStatus": "Success"
    }))
}

// ----------------------------------------------------------------------------
// User
// ----------------------------------------------------------------------------

/// **VALUE**: Symbolic membership types are converted before rendering.
///
/// **BUG THIS CATCHES**: Would catch `tigerpsn` being sent literally instead
/// of its code `2`.
#[tokio::test]
async fn given_membership_type_name_when_get_memberships_by_id_then_code_in_path() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/User/GetMembershipsById/4611686018/2/"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let user = User::new(client_for(&server, None));

    // WHEN
    let result = user.get_memberships_by_id("4611686018", "tigerpsn").await;

    // THEN
    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn given_search_text_when_search_users_then_sent_as_q_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/User/SearchUsers/"))
        .and(query_param("q", "Guardian One"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let user = User::new(client_for(&server, None));

    assert!(user.search_users("Guardian One").await.is_ok());
}

/// **VALUE**: Bad ids are rejected locally.
///
/// **BUG THIS CATCHES**: Would catch a non-numeric id being rendered into the
/// path and burning a request against the throttle budget.
#[tokio::test]
async fn given_non_numeric_id_when_get_bungie_net_user_by_id_then_argument_error_without_io() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(success())
        .expect(0)
        .mount(&server)
        .await;
    let user = User::new(client_for(&server, None));

    let err = user.get_bungie_net_user_by_id("abc").await.unwrap_err();

    assert!(matches!(err, CoreError::Argument(_)));
    assert!(err.is_local());
}

#[tokio::test]
async fn given_token_when_get_memberships_for_current_user_then_bearer_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/User/GetMembershipsForCurrentUser/"))
        .and(header("Authorization", "Bearer user-access"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let user = User::new(client_for(&server, Some(CLIENT_SECRET)));

    let result = user
        .get_memberships_for_current_user(&OAuthToken::new("user-access", "r"))
        .await;

    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn given_platform_error_when_resource_called_then_remote_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": 217,
            "ErrorStatus": "UserCannotResolveCentralAccount",
            "Message": "We couldn't find the account"
        })))
        .mount(&server)
        .await;
    let user = User::new(client_for(&server, None));

    let err = user.get_partnerships("123").await.unwrap_err();

    assert_eq!(err.category(), "remote");
    match err {
        CoreError::Request(request) => assert_eq!(request.error_code(), Some(217)),
        other => panic!("Expected Request error, got {other}"),
    }
}

// ----------------------------------------------------------------------------
// Forum
// ----------------------------------------------------------------------------

/// **VALUE**: Every enum in the topics path is normalized and flags are combined.
#[tokio::test]
async fn given_symbolic_filters_when_get_topics_paged_then_rendered_as_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/Forum/GetTopicsPaged/0/25/0/1/3/9/"))
        .and(query_param("tagstring", "#raids"))
        .and(query_param_is_missing("locales"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let forum = Forum::new(client_for(&server, None));

    let query = TopicsQuery {
        sort: "lastreplied".into(),
        quick_date: "LASTWEEK".into(),
        category_filter: vec!["links".into(), EnumKey::Code(8)],
        tagstring: Some("#raids"),
        ..TopicsQuery::default()
    };

    let result = forum.get_topics_paged(query).await;

    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn given_unknown_quick_date_when_get_core_topics_paged_then_enum_error() {
    let server = MockServer::start().await;
    let forum = Forum::new(client_for(&server, None));

    let err = forum
        .get_core_topics_paged(0, "default", "lastcentury", Vec::new(), None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("lastcentury is not a valid quick date"));
}

// ----------------------------------------------------------------------------
// Destiny2
// ----------------------------------------------------------------------------

/// **VALUE**: Components are sent by name, comma-joined.
///
/// **BUG THIS CATCHES**: Would catch the list being sent as repeated
/// parameters or with the comma percent-encoded twice.
#[tokio::test]
async fn given_components_when_get_profile_then_comma_joined_names_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/Destiny2/2/Profile/4611686018/"))
        .and(query_param("components", "PROFILES,CHARACTERS"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let destiny2 = Destiny2::new(client_for(&server, None));

    let result = destiny2
        .get_profile(2, "4611686018", [EnumKey::from("profiles"), EnumKey::Code(200)], None)
        .await;

    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn given_no_components_when_get_character_then_argument_error() {
    let server = MockServer::start().await;
    let destiny2 = Destiny2::new(client_for(&server, None));

    let err = destiny2
        .get_character("tigerpsn", "1", "2", Vec::<EnumKey>::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Argument(_)));
}

#[tokio::test]
async fn given_display_name_with_space_when_search_player_then_percent_encoded_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/Destiny2/SearchDestinyPlayer/-1/Guardian%20One/"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let destiny2 = Destiny2::new(client_for(&server, None));

    let result = destiny2.search_player("all", "Guardian One").await;

    assert!(result.is_ok(), "{result:?}");
}

/// **VALUE**: A Bungie name with its `#code` suffix reaches the platform whole.
///
/// **BUG THIS CATCHES**: Would catch `#1234` being read as a URL fragment so
/// the request silently searches for `Guardian` instead.
#[tokio::test]
async fn given_bungie_name_with_hash_when_search_player_then_hash_encoded_in_path() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Platform/Destiny2/SearchDestinyPlayer/-1/Guardian%231234/"))
        .respond_with(success())
        .expect(1)
        .mount(&server)
        .await;
    let destiny2 = Destiny2::new(client_for(&server, None));

    // WHEN
    let result = destiny2.search_player("all", "Guardian#1234").await;

    // THEN
    assert!(result.is_ok(), "{result:?}");
}

// ----------------------------------------------------------------------------
// Registry
// ----------------------------------------------------------------------------

/// **VALUE**: The default API builds every registered module on one client.
#[tokio::test]
async fn given_credentials_when_bnet_api_new_then_all_modules_present() {
    let api = BnetApi::new(credentials(Some(CLIENT_SECRET)), Default::default()).unwrap();

    let names: Vec<_> = api.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, module_names());
    assert!(api.user().is_some());
    assert!(api.trending().is_some());
    assert!(api.forum().is_some());
    assert!(api.destiny2().is_some());
}

#[tokio::test]
async fn given_subset_of_names_when_with_modules_then_only_those_built() {
    let server = MockServer::start().await;

    let api = BnetApi::with_modules(credentials(None), config_for(&server), &["user", "Forum"])
        .unwrap();

    assert!(api.user().is_some());
    assert!(api.forum().is_some());
    assert!(api.trending().is_none());
    assert!(api.destiny2().is_none());
}

/// **VALUE**: Unknown module names fail instead of being skipped.
///
/// **BUG THIS CATCHES**: Would catch a typo such as "Destiny" silently
/// producing an API without the module the caller asked for.
#[tokio::test]
async fn given_unknown_name_when_with_modules_then_registry_error() {
    let result = BnetApi::with_modules(credentials(None), Default::default(), &["Destiny"]);

    match result {
        Err(CoreError::Registry(RegistryError::UnknownModule { name, available, .. })) => {
            assert_eq!(name, "Destiny");
            assert!(available.contains(&"Destiny2"));
        }
        Err(other) => panic!("Expected Registry error, got {other}"),
        Ok(_) => panic!("Expected Registry error, got an api"),
    }
}

#[tokio::test]
async fn given_api_when_oauth_used_then_shares_module_client() {
    let server = MockServer::start().await;

    let api = BnetApi::with_modules(credentials(None), config_for(&server), &["User"]).unwrap();

    let url = api.oauth().authorization_url(Some("xyz"));
    assert!(url.starts_with(&format!("{}/en/OAuth/Authorize?", server.uri())));
    assert_eq!(api.client().root_path(), format!("{}/Platform", server.uri()));
}
