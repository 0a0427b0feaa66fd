use dealdesk::{group_by, Query, Record, ALL};

use crate::support::{self, ids, Task};

#[test]
fn text_matches_any_search_field_ignoring_case() {
    let store = support::store();

    let by_title = store.filter(&Query::new().text("LOGIN"));
    assert_eq!(ids(&by_title), vec!["T-1", "T-4"]);

    // "alice" is an owner on T-1 and T-3
    let by_owner = store.filter(&Query::new().text("Alice"));
    assert_eq!(ids(&by_owner), vec!["T-1", "T-3"]);
}

#[test]
fn text_and_facets_are_combined() {
    let store = support::store();
    let query = Query::new().text("bob").facet("type", "Bug");

    assert_eq!(ids(&store.filter(&query)), vec!["T-5"]);
}

#[test]
fn all_sentinel_removes_a_constraint() {
    let store = support::store();
    let mut query = Query::new().facet("state", "Done");
    assert_eq!(store.filter(&query).len(), 2);

    query.set_facet("state", ALL);
    assert!(query.is_unconstrained());
    assert_eq!(query.facet_value("state"), ALL);
    assert_eq!(store.filter(&query).len(), store.len());
}

#[test]
fn resetting_a_facet_replaces_it() {
    let store = support::store();
    let mut query = Query::new();
    query.set_facet("state", "Todo");
    query.set_facet("state", "In Progress");

    assert_eq!(query.constraints().len(), 1);
    assert_eq!(ids(&store.filter(&query)), vec!["T-2", "T-4"]);
}

#[test]
fn unconstrained_filter_is_the_store_in_order() {
    let store = support::store();
    let all = store.filter(&Query::new());

    assert_eq!(all.len(), store.len());
    for (filtered, stored) in all.iter().zip(store.records()) {
        assert!(std::ptr::eq(*filtered, stored));
    }
}

#[test]
fn filter_output_is_exactly_the_matching_records_in_store_order() {
    let store = support::store();
    let texts = ["", "o", "LOG", "bob", "zzz"];
    let states = [ALL, "Todo", "In Progress", "Done"];

    for text in texts {
        for state in states {
            let query = Query::new().text(text).facet("state", state);
            let result = store.filter(&query);

            let expected: Vec<&Task> = store
                .iter()
                .filter(|t| {
                    let text_hit = text.is_empty()
                        || t.search_text()
                            .iter()
                            .any(|f| f.to_lowercase().contains(&text.to_lowercase()));
                    let state_hit = state == ALL || t.facet("state") == Some(state);
                    text_hit && state_hit
                })
                .collect();

            assert_eq!(ids(&result), ids(&expected), "text={text:?} state={state:?}");
        }
    }
}

#[test]
fn unknown_facet_never_matches() {
    let store = support::store();
    let query = Query::new().facet("priority", "High");

    assert!(store.filter(&query).is_empty());
}

#[test]
fn labels_match_exactly() {
    let store = support::store();
    assert!(store.filter(&Query::new().facet("state", "done")).is_empty());
    assert_eq!(store.filter(&Query::new().facet("state", "Done")).len(), 2);
}

#[test]
fn board_has_one_column_per_label() {
    let store = support::store();
    let visible = store.filter(&Query::new().text("o"));
    let columns = group_by(visible, "state");

    let labels: Vec<&str> = columns.iter().map(|c| c.value).collect();
    assert_eq!(labels, vec!["Todo", "In Progress", "Done"]);

    let total: usize = columns.iter().map(|c| c.len()).sum();
    assert_eq!(total, store.filter(&Query::new().text("o")).len());
    assert_eq!(ids(&columns[0].records), vec!["T-1", "T-5"]);
}

#[test]
fn board_keeps_empty_columns() {
    let store = support::store();
    let columns = group_by(store.filter(&Query::new().text("dark")), "state");

    assert_eq!(columns.len(), 3);
    assert!(columns[0].is_empty());
    assert_eq!(columns[1].len(), 1);
    assert!(columns[2].is_empty());
}
