//! End-to-end exercise of the suggestion pipeline as a library consumer
//! sees it: categorized API payload -> flattened batch -> paged window
//! -> search replacement.

use relaynum::api::SuggestionBatch;
use relaynum::cli::tui::wizard::pager::{SuggestionPager, PAGE_SIZE};

#[test]
fn initial_payload_pages_and_search_replaces() {
    let payload = r#"{
        "same_area_options": [
            {"phone_number": "5035550100"},
            {"phone_number": "5035550101"}
        ],
        "other_areas_options": [
            {"phone_number": "2065550102"}
        ],
        "same_prefix_options": [
            {"phone_number": "5035550103"}
        ]
    }"#;

    let batch: SuggestionBatch = serde_json::from_str(payload).unwrap();
    let mut pager = SuggestionPager::new();
    pager.initialize(batch.flatten());

    // First page is the first three of the concatenation, in category
    // order.
    assert_eq!(pager.visible_page().len(), PAGE_SIZE);
    assert_eq!(
        pager.visible_page(),
        &["5035550100", "5035550101", "2065550102"]
    );

    // The fourth suggestion sits alone on the second page, then the
    // window cycles back to the start.
    pager.advance_page();
    assert_eq!(pager.visible_page(), &["5035550103"]);
    pager.advance_page();
    assert_eq!(pager.offset(), 0);

    // A search replaces the batch wholesale.
    assert!(pager.try_begin_search());
    pager.finish_search(Some(vec!["5035559999".to_string()]));
    assert_eq!(pager.visible_page(), &["5035559999"]);

    // And the late re-delivery of initial data does not undo it.
    pager.initialize(batch.flatten());
    assert_eq!(pager.visible_page(), &["5035559999"]);
}
