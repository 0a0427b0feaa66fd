use dealdesk::{summary, Query, Tally};

use crate::support::{self, TaskState};

#[test]
fn tally_lists_every_label_including_zeros() {
    let mut store = support::store();
    store.update_facet_by_id("T-3", "state", "Todo").unwrap();
    store.update_facet_by_id("T-6", "state", "Todo").unwrap();

    let tally = summary::tally(&store, "state");

    assert_eq!(
        tally,
        vec![
            Tally { value: "Todo", count: 4 },
            Tally { value: "In Progress", count: 2 },
            Tally { value: "Done", count: 0 },
        ]
    );
}

#[test]
fn tally_of_unknown_facet_is_empty() {
    let store = support::store();
    assert!(summary::tally(&store, "priority").is_empty());
}

#[test]
fn share_and_sums_follow_the_store() {
    let mut store = support::store();
    let bugs = Query::new().facet("type", "Bug");

    assert_eq!(summary::share(&store, &bugs), 100.0 * 2.0 / 6.0);
    assert_eq!(summary::sum_by(&store, &bugs, |t| t.points), 4);
    assert_eq!(summary::sum_by(&store, &Query::new(), |t| t.points), 21);

    store.replace_all(Vec::new()).unwrap();
    assert_eq!(summary::share(&store, &bugs), 0.0);
    assert_eq!(summary::sum_by(&store, &bugs, |t| t.points), 0);
}

#[test]
fn count_where_takes_any_predicate() {
    let store = support::store();
    let open = summary::count_where(&store, |t| t.state != TaskState::Done);

    assert_eq!(open, 4);
    assert_eq!(open, store.len() - summary::count(&store, &Query::new().facet("state", "Done")));
}
