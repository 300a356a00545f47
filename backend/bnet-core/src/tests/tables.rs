// Checks every enum and endpoint table shipped by the resource modules.

use crate::endpoint::{EndpointTemplate, ParamMap};
use crate::enum_table::{EnumTable, resolve};
use crate::resources::forum::{CATEGORY_FILTER, QUICK_DATE, TOPICS_SORT, category_flags};
use crate::resources::trending::TRENDING_ENTRY_TYPE;
use crate::resources::user::BUNGIE_MEMBERSHIP_TYPE;
use crate::resources::{destiny2, forum, trending, user};

use regex::Regex;

fn shipped_tables() -> Vec<EnumTable> {
    vec![
        BUNGIE_MEMBERSHIP_TYPE,
        TRENDING_ENTRY_TYPE,
        QUICK_DATE,
        CATEGORY_FILTER,
        TOPICS_SORT,
        destiny2::DESTINY_COMPONENT_TYPE,
    ]
}

fn shipped_endpoints() -> Vec<EndpointTemplate> {
    [user::ENDPOINTS, trending::ENDPOINTS, forum::ENDPOINTS, destiny2::ENDPOINTS].concat()
}

/// **VALUE**: Every shipped table is bidirectional.
///
/// **BUG THIS CATCHES**: Would catch a copy-paste duplicate code or a
/// lower-case name slipping into a table, which breaks reverse lookup.
#[test]
fn given_shipped_tables_when_validate_then_all_pass() {
    for table in shipped_tables() {
        table
            .validate()
            .unwrap_or_else(|e| panic!("{} failed validation: {e}", table.description));
    }
}

#[test]
fn given_every_code_when_resolved_then_round_trips_through_name() {
    for table in shipped_tables() {
        for (name, code) in table.members {
            let by_code = resolve(*code, &table).unwrap();
            assert_eq!(by_code.name, *name, "{}", table.description);

            let by_name = resolve(by_code.name.to_lowercase(), &table).unwrap();
            assert_eq!(by_name.code, *code, "{}", table.description);
        }
    }
}

/// **VALUE**: Every shipped endpoint renders when all of its placeholders are given.
///
/// **BUG THIS CATCHES**: Would catch a typo such as `{membershipId` in a
/// template, which would otherwise only fail against the live platform.
#[test]
fn given_every_placeholder_filled_when_render_then_no_braces_left() {
    let placeholder = Regex::new(r"\{\s*([\w.]+)\s*\}").unwrap();

    for endpoint in shipped_endpoints() {
        let params: ParamMap = placeholder
            .captures_iter(endpoint.path)
            .map(|caps| (caps[1].to_string(), "1"))
            .collect();

        let uri = endpoint
            .render("https://www.bungie.net/Platform", &params, None)
            .unwrap_or_else(|e| panic!("{} failed to render: {e}", endpoint.name));

        assert!(!uri.contains('{') && !uri.contains('}'), "{uri}");
        assert!(uri.ends_with('/'), "{} should keep its trailing slash", endpoint.name);
    }
}

#[test]
fn given_shipped_endpoints_when_listed_then_names_are_unique() {
    let endpoints = shipped_endpoints();
    let mut names: Vec<_> = endpoints.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), endpoints.len());
}

#[test]
fn given_several_category_flags_when_combined_then_bits_are_ored() {
    assert_eq!(category_flags(vec!["links".into(), "media".into()]).unwrap(), 9);
    assert_eq!(category_flags(Vec::new()).unwrap(), 0);
    assert!(category_flags(vec!["unknown".into()]).is_err());
}
