use dealdesk::crm::deal::{self, DealPatch, DealStage};
use dealdesk::{Config, Query};

#[test]
fn pipeline_board_moves_a_deal_between_columns() {
    let mut deals = deal::view(&Config::default()).unwrap();
    let column = |deals: &dealdesk::View<deal::Deal>, stage: &str| -> Vec<String> {
        deals
            .board("stage")
            .into_iter()
            .find(|c| c.value == stage)
            .map(|c| c.records.iter().map(|d| d.id.clone()).collect())
            .unwrap_or_default()
    };
    assert_eq!(column(&deals, "Negotiation"), vec!["DEAL-3", "DEAL-6"]);

    deals.select("DEAL-6").unwrap();
    deals.act(DealPatch::Stage(DealStage::ClosedWon)).unwrap();

    assert_eq!(column(&deals, "Negotiation"), vec!["DEAL-3"]);
    assert_eq!(column(&deals, "Closed Won"), vec!["DEAL-4", "DEAL-6"]);
    assert_eq!(
        deal::pipeline_value(deals.store(), &Query::new().facet("stage", "Closed Won")),
        102_000
    );
}

#[test]
fn search_covers_title_company_and_contact() {
    let mut deals = deal::view(&Config::default()).unwrap();

    deals.set_text("migration");
    assert_eq!(deals.visible().len(), 1);
    deals.set_text("globex");
    assert_eq!(deals.visible().len(), 1);
    deals.set_text("sarah");
    assert_eq!(deals.visible()[0].id, "DEAL-6");
}
