//! Output of `#[derive(Record)]` and `#[derive(Facet)]` on types outside
//! the crate.

use dealdesk::{EntityStore, Facet, FacetError, Query, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Facet)]
enum Tier {
    Free,
    #[facet(rename = "Pro Plus")]
    ProPlus,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Facet)]
enum Region {
    Emea,
    Apac,
    Amer,
}

#[derive(Debug, Clone, Record)]
struct AccountManager {
    #[record(id)]
    handle: String,
    #[record(search, required)]
    display_name: String,
    #[record(search)]
    nickname: Option<String>,
    #[record(search, required)]
    territories: Vec<String>,
    #[record(facet)]
    tier: Tier,
    #[record(facet = "region")]
    home: Region,
    #[record(required)]
    manager: Option<String>,
}

fn manager(handle: &str) -> AccountManager {
    AccountManager {
        handle: handle.to_string(),
        display_name: "Rosa Diaz".to_string(),
        nickname: Some("Ro".to_string()),
        territories: vec!["Iberia".to_string(), "Benelux".to_string()],
        tier: Tier::ProPlus,
        home: Region::Emea,
        manager: Some("Sam".to_string()),
    }
}

#[test]
fn collection_defaults_to_plural_snake_case() {
    assert_eq!(AccountManager::COLLECTION, "account_managers");
}

#[test]
fn id_comes_from_the_marked_field() {
    assert_eq!(manager("rdiaz").id(), "rdiaz");
}

#[test]
fn search_text_flattens_in_declaration_order() {
    let mut record = manager("rdiaz");
    assert_eq!(record.search_text(), vec!["Rosa Diaz", "Ro", "Iberia", "Benelux"]);

    record.nickname = None;
    assert_eq!(record.search_text(), vec!["Rosa Diaz", "Iberia", "Benelux"]);
}

#[test]
fn facets_are_named_and_enumerated() {
    assert_eq!(AccountManager::facet_names(), &["tier", "region"]);
    assert_eq!(
        AccountManager::facet_values("tier"),
        Some(&["Free", "Pro Plus", "Enterprise"][..])
    );
    assert_eq!(AccountManager::facet_values("home"), None);

    let record = manager("rdiaz");
    assert_eq!(record.facet("tier"), Some("Pro Plus"));
    assert_eq!(record.facet("region"), Some("Emea"));
}

#[test]
fn set_facet_parses_labels() {
    let mut record = manager("rdiaz");

    record.set_facet("region", "Apac").unwrap();
    assert_eq!(record.home, Region::Apac);

    assert_eq!(
        record.set_facet("tier", "ProPlus"),
        Err(FacetError::InvalidValue {
            facet: "tier".to_string(),
            value: "ProPlus".to_string(),
        })
    );
    assert_eq!(
        record.set_facet("home", "Apac"),
        Err(FacetError::UnknownFacet {
            collection: "account_managers",
            facet: "home".to_string(),
        })
    );
    assert_eq!(record.tier, Tier::ProPlus);
}

#[test]
fn required_fields_report_blanks() {
    let mut record = manager("rdiaz");
    assert!(record.missing_required().is_empty());

    record.display_name = " ".to_string();
    record.territories.clear();
    record.manager = None;

    assert_eq!(
        record.missing_required(),
        vec!["display_name", "territories", "manager"]
    );
}

#[test]
fn facet_enums_display_their_labels() {
    assert_eq!(Tier::ProPlus.to_string(), "Pro Plus");
    assert_eq!(Tier::ProPlus.as_str(), "Pro Plus");
    assert_eq!(Tier::parse("Enterprise"), Some(Tier::Enterprise));
    assert_eq!(Tier::parse("enterprise"), None);
    assert_eq!(Region::VALUES, &["Emea", "Apac", "Amer"]);
}

#[test]
fn derived_records_work_in_a_store() {
    let mut other = manager("jperalta");
    other.display_name = "Jake Peralta".to_string();
    other.tier = Tier::Free;
    let store = EntityStore::create(vec![manager("rdiaz"), other]).unwrap();

    let pro = store.filter(&Query::new().facet("tier", "Pro Plus"));
    assert_eq!(pro.len(), 1);
    assert_eq!(pro[0].id(), "rdiaz");

    let benelux = store.filter(&Query::new().text("BENELUX"));
    assert_eq!(benelux.len(), 2);
}
